//! Equipment slots of an actor.
//!
//! Slots hold item references exactly as persisted. Whether a reference
//! still resolves in the item catalog is checked on read by the actor, not
//! here, so save data survives a shrinking database unchanged.

use strum::{EnumCount, IntoEnumIterator};

use super::ItemId;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Shield,
    Armor,
    Helmet,
    Accessory,
}

impl EquipSlot {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: [Option<ItemId>; EquipSlot::COUNT],
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [Option<ItemId>; EquipSlot::COUNT]) -> Self {
        Self { slots }
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Stored reference, unchecked against the catalog.
    #[inline]
    pub fn get(&self, slot: EquipSlot) -> Option<ItemId> {
        self.slots[slot.index()]
    }

    /// Stores `item` in `slot`, returning the previous reference.
    pub fn replace(&mut self, slot: EquipSlot, item: Option<ItemId>) -> Option<ItemId> {
        std::mem::replace(&mut self.slots[slot.index()], item)
    }

    /// Stored references in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, Option<ItemId>)> + '_ {
        EquipSlot::iter().map(|slot| (slot, self.get(slot)))
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    slots: [Option<ItemId>; EquipSlot::COUNT],
}

impl EquipmentBuilder {
    pub fn with(mut self, slot: EquipSlot, item: ItemId) -> Self {
        self.slots[slot.index()] = Some(item);
        self
    }

    pub fn weapon(self, item: ItemId) -> Self {
        self.with(EquipSlot::Weapon, item)
    }

    pub fn shield(self, item: ItemId) -> Self {
        self.with(EquipSlot::Shield, item)
    }

    pub fn armor(self, item: ItemId) -> Self {
        self.with(EquipSlot::Armor, item)
    }

    pub fn helmet(self, item: ItemId) -> Self {
        self.with(EquipSlot::Helmet, item)
    }

    pub fn accessory(self, item: ItemId) -> Self {
        self.with(EquipSlot::Accessory, item)
    }

    pub fn build(self) -> Equipment {
        Equipment { slots: self.slots }
    }
}
