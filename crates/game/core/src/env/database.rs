//! In-memory database backing every oracle.
//!
//! Tables are stored in id order: the record with id `n` lives at index
//! `n - 1`. [`Database::validate`] checks that layout once after loading so
//! lookups can stay plain index operations.

use super::{
    ArchetypeDefinition, ArchetypeOracle, BattleCommand, BattleOracle, ClassDefinition,
    ConfigOracle, GameEnv, ItemDefinition, ItemOracle, OracleError, Placement, SkillDefinition,
    SkillOracle, TerrainDefinition, Terms, TermsOracle,
};
use crate::state::{ActorId, ClassId, CommandId, ItemId, SkillId, TerrainId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Database {
    pub actors: Vec<ArchetypeDefinition>,
    pub classes: Vec<ClassDefinition>,
    pub items: Vec<ItemDefinition>,
    pub skills: Vec<SkillDefinition>,
    pub terrains: Vec<TerrainDefinition>,
    pub commands: Vec<BattleCommand>,
    pub placement: Placement,
    pub terms: Terms,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles this database with a configuration source.
    pub fn env<'a>(&'a self, config: &'a dyn ConfigOracle) -> GameEnv<'a> {
        GameEnv::new(self, self, self, self, self, config)
    }

    /// Checks record numbering and cross references.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MisnumberedRecord` when a record is not stored
    /// at its id, and `OracleError::ClassNotFound` when an archetype starts
    /// with a class the database does not define.
    pub fn validate(&self) -> Result<(), OracleError> {
        check_numbering("actors", self.actors.iter().map(|r| r.id.get()))?;
        check_numbering("classes", self.classes.iter().map(|r| r.id.get()))?;
        check_numbering("items", self.items.iter().map(|r| r.id.get()))?;
        check_numbering("skills", self.skills.iter().map(|r| r.id.get()))?;
        check_numbering("terrains", self.terrains.iter().map(|r| r.id.get()))?;
        check_numbering("commands", self.commands.iter().map(|r| r.id.get()))?;

        for archetype in &self.actors {
            if let Some(class) = archetype.class {
                self.class(class).ok_or(OracleError::ClassNotFound(class))?;
            }
        }
        Ok(())
    }
}

fn check_numbering(table: &str, ids: impl Iterator<Item = u16>) -> Result<(), OracleError> {
    for (index, found) in ids.enumerate() {
        let expected = index + 1;
        if usize::from(found) != expected {
            return Err(OracleError::MisnumberedRecord {
                table: table.to_string(),
                expected,
                found,
            });
        }
    }
    Ok(())
}

fn lookup<T>(table: &[T], index: Option<usize>) -> Option<&T> {
    index.and_then(|index| table.get(index))
}

impl ArchetypeOracle for Database {
    fn archetype(&self, id: ActorId) -> Option<&ArchetypeDefinition> {
        lookup(&self.actors, id.index())
    }

    fn class(&self, id: ClassId) -> Option<&ClassDefinition> {
        lookup(&self.classes, id.index())
    }
}

impl ItemOracle for Database {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, id: ItemId) -> Option<&ItemDefinition> {
        lookup(&self.items, id.index())
    }
}

impl SkillOracle for Database {
    fn skill(&self, id: SkillId) -> Option<&SkillDefinition> {
        lookup(&self.skills, id.index())
    }
}

impl BattleOracle for Database {
    fn terrain(&self, id: TerrainId) -> Option<&TerrainDefinition> {
        lookup(&self.terrains, id.index())
    }

    fn command(&self, id: CommandId) -> Option<&BattleCommand> {
        lookup(&self.commands, id.index())
    }

    fn placement(&self) -> Placement {
        self.placement
    }
}

impl TermsOracle for Database {
    fn terms(&self) -> &Terms {
        &self.terms
    }
}
