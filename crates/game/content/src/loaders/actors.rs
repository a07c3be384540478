//! Actor archetype and class loader.

use std::path::Path;

use rpg_core::{ArchetypeDefinition, ClassDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Archetypes and the classes they can switch to.
///
/// Both tables are stored in id order: the record with id `n` is the
/// `n`-th entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorCatalog {
    pub actors: Vec<ArchetypeDefinition>,
    pub classes: Vec<ClassDefinition>,
}

/// Loader for the actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load archetypes and classes from a RON file.
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let catalog: ActorCatalog = read_ron(path, "actor catalog")?;
        tracing::debug!(
            actors = catalog.actors.len(),
            classes = catalog.classes.len(),
            "loaded actor catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use rpg_core::{ActorId, EquipSlot, Equipment, ItemId};

    use super::*;

    #[test]
    fn equipment_slots_survive_ron() {
        let equipment = Equipment::builder()
            .weapon(ItemId(1))
            .armor(ItemId(3))
            .build();

        let text = ron::to_string(&equipment).unwrap();
        let parsed: Equipment = ron::from_str(&text).unwrap();
        assert_eq!(parsed, equipment);

        let written: Equipment =
            ron::from_str("(slots: (Some(1), None, Some(3), None, None))").unwrap();
        assert_eq!(written, equipment);
    }

    #[test]
    fn sample_actors_carry_initial_equipment() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/actors.ron");
        let catalog = ActorLoader::load(&path).unwrap();

        let alex = &catalog.actors[0];
        assert_eq!(alex.id, ActorId(1));
        assert_eq!(alex.initial_equipment.get(EquipSlot::Weapon), Some(ItemId(1)));
        assert_eq!(alex.initial_equipment.get(EquipSlot::Armor), Some(ItemId(3)));
        assert_eq!(catalog.classes.len(), 1);
    }
}
