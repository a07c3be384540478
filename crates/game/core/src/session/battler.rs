use crate::actor::Actor;
use crate::env::{ItemDefinition, SkillDefinition};

/// Rules shared by every combat participant.
///
/// Actors specialise these: they filter skills by what they have learned
/// and handle book and material items themselves, deferring everything
/// else here.
pub trait BattlerRules {
    /// Generic usability check (SP cost, restricting states).
    fn is_skill_usable(&self, actor: &Actor<'_>, skill: &SkillDefinition) -> bool;

    /// Generic item effect (recovery and similar). Returns whether it applied.
    fn use_item(&mut self, actor: &mut Actor<'_>, item: &ItemDefinition) -> bool;
}
