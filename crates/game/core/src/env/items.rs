use crate::state::{ActorId, ItemId, SkillId};
use crate::stats::StatKind;

pub trait ItemOracle: Send + Sync {
    /// Number of records in the item catalog.
    fn item_count(&self) -> usize;

    fn item(&self, id: ItemId) -> Option<&ItemDefinition>;

    /// Resolves a persisted item reference.
    ///
    /// References past the end of the catalog are treated as empty. Save
    /// data written against a larger database may still carry them.
    fn resolve(&self, id: ItemId) -> Option<&ItemDefinition> {
        if id.get() == 0 || usize::from(id.get()) > self.item_count() {
            return None;
        }
        self.item(id)
    }
}

/// Item definition with common fields and type-specific data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    /// Bonuses granted while equipped.
    pub equip: EquipBonuses,
    /// Per-actor usability mask, indexed by `actor - 1`.
    ///
    /// The mask is sparse: actors past its end may use the item.
    pub actor_set: Vec<bool>,
}

impl ItemDefinition {
    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn is_usable_by(&self, actor: ActorId) -> bool {
        actor
            .index()
            .and_then(|index| self.actor_set.get(index))
            .copied()
            .unwrap_or(true)
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    #[default]
    Common,
    Weapon,
    Shield,
    Armor,
    Helmet,
    Accessory,
    /// Restorative item, usable on incapacitated actors.
    Medicine,
    /// Teaches a skill when used.
    Book { skill: SkillId },
    /// Permanently raises base stats when used.
    Material(StatGains),
    Special,
    Switch,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match *self {
            Self::Medicine => ItemCategory::Medicine,
            Self::Book { skill } => ItemCategory::Book(skill),
            Self::Material(gains) => ItemCategory::Material(gains),
            _ => ItemCategory::Other,
        }
    }

    pub fn is_shield(&self) -> bool {
        matches!(self, Self::Shield)
    }
}

/// Routing key for the use-item dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemCategory {
    Medicine,
    Book(SkillId),
    Material(StatGains),
    Other,
}

/// Stat bonuses of an equippable item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipBonuses {
    pub attack: i32,
    pub defense: i32,
    pub spirit: i32,
    pub agility: i32,
}

impl EquipBonuses {
    /// Bonus for `stat`. Equipment never raises max HP or max SP.
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::MaxHp | StatKind::MaxSp => 0,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Spirit => self.spirit,
            StatKind::Agility => self.agility,
        }
    }
}

/// Permanent increases granted by a material item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatGains {
    pub max_hp: i32,
    pub max_sp: i32,
    pub attack: i32,
    pub defense: i32,
    pub spirit: i32,
    pub agility: i32,
}

impl StatGains {
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
}
