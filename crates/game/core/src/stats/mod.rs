//! Stat resolution.
//!
//! Every battle stat is resolved the same way:
//!
//! ```text
//! table[level]  (+ permanent modifier)  (+ equipment bonuses)  → clamp
//! ```
//!
//! The growth table comes from the actor's effective archetype (its class
//! when a class change is active). Modifiers are persisted per actor and
//! only ever change through the base-stat setters or material items.
//! Equipment bonuses are summed over slots whose item reference resolves in
//! the item catalog.

pub mod bounds;
pub mod resolver;

pub use bounds::StatBounds;
pub use resolver::StatResolver;

/// The six stats an actor carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    MaxHp,
    MaxSp,
    Attack,
    Defense,
    Spirit,
    Agility,
}

bitflags::bitflags! {
    /// Optional layers added on top of the growth table value.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StatLayers: u8 {
        /// Permanent per-actor modifier.
        const MODIFIER = 1 << 0;
        /// Bonuses of the currently equipped items.
        const EQUIPMENT = 1 << 1;
    }
}

impl StatLayers {
    /// Growth table value only.
    pub const RAW: Self = Self::empty();
    /// Everything that applies outside of battle.
    pub const EFFECTIVE: Self = Self::all();
}

impl Default for StatLayers {
    fn default() -> Self {
        Self::EFFECTIVE
    }
}

/// Permanent additive deltas applied on top of the growth tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatModifiers {
    pub max_hp: i32,
    pub max_sp: i32,
    pub attack: i32,
    pub defense: i32,
    pub spirit: i32,
    pub agility: i32,
}

impl StatModifiers {
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::MaxHp => self.max_hp,
            StatKind::MaxSp => self.max_sp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Spirit => self.spirit,
            StatKind::Agility => self.agility,
        }
    }

    pub fn get_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::MaxHp => &mut self.max_hp,
            StatKind::MaxSp => &mut self.max_sp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Spirit => &mut self.spirit,
            StatKind::Agility => &mut self.agility,
        }
    }
}
