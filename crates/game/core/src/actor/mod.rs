//! The actor facade.
//!
//! [`Actor`] wraps a persisted [`ActorState`] together with the static
//! records it was set up from and the oracles it reads. It owns the derived
//! experience table and keeps the state invariants: level within range,
//! experience consistent with the level, HP and SP within their maxima.
//!
//! Mutable session collaborators (party, message queue, battle globals,
//! generic battler rules) are passed to the operations that need them.
//!
//! Operations are grouped by concern:
//!
//! - `stats`: resolved stats and base-stat setters
//! - `vitals`: HP, SP and status conditions
//! - `progression`: experience and level transitions
//! - `equipment`: slots and equip legality
//! - `skills`: learned skills and usability
//! - `items`: the use-item dispatcher
//! - `battle`: placement, menu commands and battle queries
mod battle;
mod equipment;
mod error;
mod items;
mod progression;
mod skills;
mod stats;
mod vitals;

pub use error::ActorError;
pub use progression::NO_NEXT_EXP;

use std::fmt;

use crate::env::{ArchetypeDefinition, ClassDefinition, ExpCurveParams, GameEnv, ParameterCurves};
use crate::growth::ExpTable;
use crate::state::{ActorId, ActorState, ClassId};
use crate::stats::StatResolver;

/// A party-eligible character bound to the game data it was set up from.
pub struct Actor<'a> {
    state: ActorState,
    exp_table: ExpTable,
    archetype: &'a ArchetypeDefinition,
    env: GameEnv<'a>,
}

impl<'a> Actor<'a> {
    /// Sets up a fresh actor from its database record.
    ///
    /// Call [`Actor::init`] afterwards to grant starting skills and fill
    /// HP, SP and experience.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Oracle`] if `id` has no archetype.
    pub fn new(id: ActorId, env: GameEnv<'a>) -> Result<Self, ActorError> {
        let archetype = env.archetypes().require_archetype(id)?;
        Ok(Self::assemble(ActorState::from_archetype(archetype), archetype, env))
    }

    /// Wraps a restored save state.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Oracle`] if the state refers to an unknown archetype.
    pub fn from_state(state: ActorState, env: GameEnv<'a>) -> Result<Self, ActorError> {
        let archetype = env.archetypes().require_archetype(state.id)?;
        Ok(Self::assemble(state, archetype, env))
    }

    fn assemble(state: ActorState, archetype: &'a ArchetypeDefinition, env: GameEnv<'a>) -> Self {
        let exp_table = build_exp_table(&state, archetype, &env);
        Self {
            state,
            exp_table,
            archetype,
            env,
        }
    }

    /// Game-start initialisation.
    pub fn init(&mut self) {
        let archetype = self.archetype;
        let level = self.state.level;
        for learning in archetype.skills.iter().filter(|l| l.level <= level) {
            self.learn_skill(learning.skill);
        }

        self.set_hp(self.max_hp());
        self.set_sp(self.max_sp());
        self.set_exp(self.exp_table.min_exp(level).unwrap_or(0));
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    /// Releases the persisted state, e.g. for saving.
    pub fn into_state(self) -> ActorState {
        self.state
    }

    pub fn archetype(&self) -> &'a ArchetypeDefinition {
        self.archetype
    }

    pub fn env(&self) -> GameEnv<'a> {
        self.env
    }

    /// Class whose tables are in effect, if a class change is active.
    fn active_class(&self) -> Option<&'a ClassDefinition> {
        active_class(&self.state, &self.env)
    }

    fn curves(&self) -> &'a ParameterCurves {
        self.active_class()
            .map_or(&self.archetype.parameters, |class| &class.parameters)
    }

    fn resolver(&self) -> StatResolver<'a> {
        StatResolver::new(self.env.variant(), self.curves(), self.env.items())
    }

    fn rebuild_exp_table(&mut self) {
        self.exp_table = build_exp_table(&self.state, self.archetype, &self.env);
    }

    // ------------------------------------------------------------------
    // Display and meta data
    // ------------------------------------------------------------------

    pub fn id(&self) -> ActorId {
        self.state.id
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.title = title.into();
    }

    pub fn face_name(&self) -> &str {
        &self.state.face_name
    }

    pub fn face_index(&self) -> i32 {
        self.state.face_index
    }

    pub fn set_face(&mut self, file: impl Into<String>, index: i32) {
        self.state.face_name = file.into();
        self.state.face_index = index;
    }

    pub fn sprite_name(&self) -> &str {
        &self.state.sprite_name
    }

    pub fn sprite_index(&self) -> i32 {
        self.state.sprite_index
    }

    pub fn sprite_transparent(&self) -> bool {
        self.state.sprite_transparent
    }

    pub fn set_sprite(&mut self, file: impl Into<String>, index: i32, transparent: bool) {
        self.state.sprite_name = file.into();
        self.state.sprite_index = index;
        self.state.sprite_transparent = transparent;
    }

    /// Dual wielding, which rules out shields.
    pub fn two_weapon(&self) -> bool {
        self.state.two_weapon
    }

    pub fn auto_battle(&self) -> bool {
        self.state.auto_battle
    }

    pub fn set_auto_battle(&mut self, auto_battle: bool) {
        self.state.auto_battle = auto_battle;
    }

    pub fn lock_equipment(&self) -> bool {
        self.state.lock_equipment
    }

    /// Label of the skill command in the battle menu.
    pub fn skill_name(&self) -> &'a str {
        &self.archetype.skill_name
    }

    pub fn class_id(&self) -> Option<ClassId> {
        self.state.class_id
    }

    /// Name of the assigned class, empty when there is none.
    pub fn class_name(&self) -> &'a str {
        self.state
            .class_id
            .and_then(|id| self.env.archetypes().class(id))
            .map_or("", |class| class.name.as_str())
    }

    /// Assigns a class and switches growth tables to it.
    ///
    /// `None` reverts to the archetype's own tables. Level and experience
    /// are left untouched; HP and SP are reclamped to the new maxima.
    pub fn set_class(&mut self, class: Option<ClassId>) {
        tracing::debug!(actor = %self.state.id, from = ?self.state.class_id, to = ?class, "class changed");
        self.state.class_id = class;
        self.state.class_changed = class.is_some();
        self.rebuild_exp_table();
        self.reclamp_vitals();
    }
}

impl fmt::Debug for Actor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("state", &self.state)
            .field("max_level", &self.exp_table.max_level())
            .finish_non_exhaustive()
    }
}

fn active_class<'a>(state: &ActorState, env: &GameEnv<'a>) -> Option<&'a ClassDefinition> {
    if !state.class_changed {
        return None;
    }
    let id = state.class_id?;
    let class = env.archetypes().class(id);
    if class.is_none() {
        tracing::warn!(actor = %state.id, class = %id, "class missing, using archetype tables");
    }
    class
}

fn build_exp_table(state: &ActorState, archetype: &ArchetypeDefinition, env: &GameEnv<'_>) -> ExpTable {
    let params: ExpCurveParams = active_class(state, env).map_or(archetype.exp, |class| class.exp);
    ExpTable::build(env.variant(), params, archetype.final_level)
}
