use super::{Actor, ActorError};
use crate::session::Party;
use crate::state::{EquipSlot, Equipment, ItemId};

impl Actor<'_> {
    /// Raw slot contents as persisted, including stale references.
    pub fn equipment_slots(&self) -> &Equipment {
        &self.state.equipment
    }

    /// Item in slot `index`.
    ///
    /// `None` for an empty slot, for an index outside `0..5`, and for a
    /// stored reference past the end of the item catalog.
    pub fn equipment(&self, index: usize) -> Option<ItemId> {
        EquipSlot::from_index(index).and_then(|slot| self.equipped(slot))
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<ItemId> {
        self.state
            .equipment
            .get(slot)
            .and_then(|item| self.checked_item(item))
    }

    pub fn weapon_id(&self) -> Option<ItemId> {
        self.equipped(EquipSlot::Weapon)
    }

    pub fn shield_id(&self) -> Option<ItemId> {
        self.equipped(EquipSlot::Shield)
    }

    pub fn armor_id(&self) -> Option<ItemId> {
        self.equipped(EquipSlot::Armor)
    }

    pub fn helmet_id(&self) -> Option<ItemId> {
        self.equipped(EquipSlot::Helmet)
    }

    pub fn accessory_id(&self) -> Option<ItemId> {
        self.equipped(EquipSlot::Accessory)
    }

    /// Stores `item` in slot `index` and returns the previous occupant.
    ///
    /// Party stock is not touched; see [`Actor::change_equipment`]. A
    /// previous reference past the end of the catalog is reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InvalidSlot`] for an index outside `0..5`.
    pub fn set_equipment(
        &mut self,
        index: usize,
        item: Option<ItemId>,
    ) -> Result<Option<ItemId>, ActorError> {
        let slot = EquipSlot::from_index(index).ok_or(ActorError::InvalidSlot(index))?;
        let item = item.filter(|id| id.get() != 0);

        let previous = self.state.equipment.replace(slot, item);
        tracing::debug!(actor = %self.state.id, %slot, ?previous, ?item, "equipment changed");

        Ok(previous.and_then(|id| self.checked_item(id)))
    }

    /// Swaps equipment and reconciles the party stock.
    ///
    /// The previous item goes back to the party; the new one is taken from it.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InvalidSlot`] for an index outside `0..5`.
    pub fn change_equipment(
        &mut self,
        index: usize,
        item: Option<ItemId>,
        party: &mut dyn Party,
    ) -> Result<(), ActorError> {
        let item = item.filter(|id| id.get() != 0);
        let previous = self.set_equipment(index, item)?;

        if let Some(previous) = previous {
            party.add_item(previous, 1);
        }
        if let Some(item) = item {
            party.remove_item(item, 1);
        }
        Ok(())
    }

    /// Whether this actor may equip `item`.
    ///
    /// Dual wielders cannot hold shields. Otherwise the item's per-actor
    /// mask decides. Unknown items are never equippable.
    pub fn is_equippable(&self, item: ItemId) -> bool {
        let Some(definition) = self.env.items().resolve(item) else {
            return false;
        };
        if self.state.two_weapon && definition.kind.is_shield() {
            return false;
        }
        definition.is_usable_by(self.state.id)
    }

    /// Whether the item's per-actor mask admits this actor.
    pub fn is_item_usable(&self, item: ItemId) -> bool {
        self.env
            .items()
            .resolve(item)
            .is_some_and(|definition| definition.is_usable_by(self.state.id))
    }

    fn checked_item(&self, item: ItemId) -> Option<ItemId> {
        if usize::from(item.get()) > self.env.items().item_count() {
            tracing::warn!(actor = %self.state.id, %item, "equipped item past end of catalog");
            return None;
        }
        Some(item)
    }
}
