use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(pub u16);

        impl $name {
            #[inline]
            pub const fn new(id: u16) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> u16 {
                self.0
            }

            /// 0-based storage index of this record, `None` for the reserved id 0.
            #[inline]
            pub const fn index(self) -> Option<usize> {
                (self.0 as usize).checked_sub(1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

record_id! {
    /// Database id of a party-eligible character.
    ActorId
}

record_id! {
    /// Database id of a class that can replace an actor's own growth tables.
    ClassId
}

record_id! {
    /// Database id of an item (equipment, consumables, books, materials).
    ItemId
}

record_id! {
    /// Database id of a skill.
    SkillId
}

record_id! {
    /// Database id of a status condition.
    StateId
}

record_id! {
    /// Database id of a battle terrain.
    TerrainId
}

record_id! {
    /// Database id of an entry in the battle command catalog.
    CommandId
}

impl StateId {
    /// Condition that marks a battler as incapacitated.
    pub const DEATH: Self = Self(1);
}

/// Formation row chosen for an actor in battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleRow {
    #[default]
    Front,
    Back,
}
