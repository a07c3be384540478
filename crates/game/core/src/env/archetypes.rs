//! Actor and class definitions.
//!
//! An archetype is the immutable database record an actor is set up from.
//! A class carries the same growth data and replaces the archetype's tables
//! while a class change is active.

use crate::battle::CommandSlot;
use crate::env::OracleError;
use crate::state::{ActorId, ClassId, Equipment, SkillId, StateId};
use crate::stats::StatKind;

pub trait ArchetypeOracle: Send + Sync {
    fn archetype(&self, id: ActorId) -> Option<&ArchetypeDefinition>;

    fn class(&self, id: ClassId) -> Option<&ClassDefinition>;

    /// Looks up an archetype that must exist.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ArchetypeNotFound` if the id has no record.
    fn require_archetype(&self, id: ActorId) -> Result<&ArchetypeDefinition, OracleError> {
        self.archetype(id).ok_or(OracleError::ArchetypeNotFound(id))
    }
}

/// Inputs of the experience curve formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpCurveParams {
    pub base: i32,
    pub inflation: i32,
    pub correction: i32,
}

impl ExpCurveParams {
    pub const fn new(base: i32, inflation: i32, correction: i32) -> Self {
        Self {
            base,
            inflation,
            correction,
        }
    }
}

impl Default for ExpCurveParams {
    fn default() -> Self {
        Self::new(30, 30, 0)
    }
}

/// Per-level stat tables, indexed by `level - 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterCurves {
    pub max_hp: Vec<i32>,
    pub max_sp: Vec<i32>,
    pub attack: Vec<i32>,
    pub defense: Vec<i32>,
    pub spirit: Vec<i32>,
    pub agility: Vec<i32>,
}

impl ParameterCurves {
    pub fn curve(&self, stat: StatKind) -> &[i32] {
        match stat {
            StatKind::MaxHp => &self.max_hp,
            StatKind::MaxSp => &self.max_sp,
            StatKind::Attack => &self.attack,
            StatKind::Defense => &self.defense,
            StatKind::Spirit => &self.spirit,
            StatKind::Agility => &self.agility,
        }
    }

    /// Table value of `stat` at `level`; levels the table does not cover read as 0.
    pub fn value(&self, stat: StatKind, level: i32) -> i32 {
        usize::try_from(level - 1)
            .ok()
            .and_then(|index| self.curve(stat).get(index))
            .copied()
            .unwrap_or(0)
    }
}

/// A skill an archetype picks up on reaching `level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Learning {
    pub level: i32,
    pub skill: SkillId,
}

impl Learning {
    pub const fn new(level: i32, skill: SkillId) -> Self {
        Self { level, skill }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArchetypeDefinition {
    pub id: ActorId,
    pub name: String,
    pub title: String,
    pub face_name: String,
    pub face_index: i32,
    pub sprite_name: String,
    pub sprite_index: i32,
    pub sprite_transparent: bool,

    pub initial_level: i32,
    pub final_level: i32,
    pub exp: ExpCurveParams,
    pub parameters: ParameterCurves,

    pub initial_equipment: Equipment,
    pub class: Option<ClassId>,
    pub two_weapon: bool,
    pub lock_equipment: bool,
    pub auto_battle: bool,

    /// Skills learned by level, in database order.
    pub skills: Vec<Learning>,
    /// Label of the skill command in the battle menu.
    pub skill_name: String,

    /// Fixed battle coordinates at reference resolution; 0 means automatic.
    pub battle_x: i32,
    pub battle_y: i32,
    /// Default battle menu. `CommandSlot::Default` marks the end of the list here.
    pub battle_commands: Vec<CommandSlot>,

    /// Susceptibility rank per state, indexed by `state - 1`. Sparse.
    pub state_ranks: Vec<u8>,
    pub critical_hit: bool,
    pub critical_hit_chance: i32,
    pub battler_animation: i32,
}

impl ArchetypeDefinition {
    /// Rank used for states the sparse table does not cover.
    pub const DEFAULT_STATE_RANK: u8 = 3;

    pub fn state_rank(&self, state: StateId) -> u8 {
        state
            .index()
            .and_then(|index| self.state_ranks.get(index))
            .copied()
            .unwrap_or(Self::DEFAULT_STATE_RANK)
    }
}

impl Default for ArchetypeDefinition {
    fn default() -> Self {
        Self {
            id: ActorId::default(),
            name: String::new(),
            title: String::new(),
            face_name: String::new(),
            face_index: 0,
            sprite_name: String::new(),
            sprite_index: 0,
            sprite_transparent: false,
            initial_level: 1,
            final_level: 50,
            exp: ExpCurveParams::default(),
            parameters: ParameterCurves::default(),
            initial_equipment: Equipment::default(),
            class: None,
            two_weapon: false,
            lock_equipment: false,
            auto_battle: false,
            skills: Vec::new(),
            skill_name: String::new(),
            battle_x: 0,
            battle_y: 0,
            battle_commands: Vec::new(),
            state_ranks: Vec::new(),
            critical_hit: true,
            critical_hit_chance: 30,
            battler_animation: 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassDefinition {
    pub id: ClassId,
    pub name: String,
    pub exp: ExpCurveParams,
    pub parameters: ParameterCurves,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_lookup_outside_table_reads_zero() {
        let curves = ParameterCurves {
            attack: vec![10, 12, 15],
            ..ParameterCurves::default()
        };

        assert_eq!(curves.value(StatKind::Attack, 1), 10);
        assert_eq!(curves.value(StatKind::Attack, 3), 15);
        assert_eq!(curves.value(StatKind::Attack, 4), 0);
        assert_eq!(curves.value(StatKind::Attack, 0), 0);
        assert_eq!(curves.value(StatKind::Defense, 1), 0);
    }

    #[test]
    fn state_rank_defaults_for_sparse_table() {
        let archetype = ArchetypeDefinition {
            state_ranks: vec![0, 4],
            ..ArchetypeDefinition::default()
        };

        assert_eq!(archetype.state_rank(StateId(2)), 4);
        assert_eq!(archetype.state_rank(StateId(3)), ArchetypeDefinition::DEFAULT_STATE_RANK);
    }
}
