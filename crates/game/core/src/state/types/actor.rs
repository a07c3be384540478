use super::{
    ActorId, BattleCommandOverrides, BattleRow, ClassId, Equipment, LearnedSkills,
    StatusConditions,
};
use crate::battle::CommandSlot;
use crate::env::ArchetypeDefinition;
use crate::stats::StatModifiers;

/// Persisted state of one party-eligible character.
///
/// This is what a save file stores. Everything derived from it (resolved
/// stats, the experience table) is recomputed by [`crate::Actor`].
///
/// # Invariants
///
/// Maintained by `Actor`, not by this type:
///
/// - `level` lies in `1..=final_level` of the archetype
/// - `exp` is at least the threshold of `level` and below the next one
///   unless the actor is at the final level
/// - `current_hp`/`current_sp` lie in `0..=max`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActorState {
    pub id: ActorId,

    // === Display ===
    pub name: String,
    pub title: String,
    pub face_name: String,
    pub face_index: i32,
    pub sprite_name: String,
    pub sprite_index: i32,
    pub sprite_transparent: bool,

    // === Progression ===
    pub level: i32,
    pub exp: i32,
    pub modifiers: StatModifiers,
    pub current_hp: i32,
    pub current_sp: i32,

    pub equipment: Equipment,
    pub skills: LearnedSkills,
    pub states: StatusConditions,
    pub battle_commands: BattleCommandOverrides,

    /// Class whose growth tables replace the archetype's while `class_changed` is set.
    pub class_id: Option<ClassId>,
    pub class_changed: bool,

    pub row: BattleRow,
    pub two_weapon: bool,
    pub lock_equipment: bool,
    pub auto_battle: bool,
}

impl ActorState {
    /// Fresh state as set up from the database at game start.
    ///
    /// Every battle menu entry defers to the archetype. HP, SP, experience
    /// and starting skills are filled in by [`crate::Actor::init`].
    pub fn from_archetype(archetype: &ArchetypeDefinition) -> Self {
        Self {
            id: archetype.id,
            name: archetype.name.clone(),
            title: archetype.title.clone(),
            face_name: archetype.face_name.clone(),
            face_index: archetype.face_index,
            sprite_name: archetype.sprite_name.clone(),
            sprite_index: archetype.sprite_index,
            sprite_transparent: archetype.sprite_transparent,
            level: archetype.initial_level.max(1),
            equipment: archetype.initial_equipment,
            class_id: archetype.class,
            two_weapon: archetype.two_weapon,
            lock_equipment: archetype.lock_equipment,
            auto_battle: archetype.auto_battle,
            battle_commands: BattleCommandOverrides::from_slots(vec![
                CommandSlot::Default;
                archetype.battle_commands.len()
            ]),
            ..Self::default()
        }
    }
}
