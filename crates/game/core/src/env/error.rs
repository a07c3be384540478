//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, ClassId};

/// Errors that occur when a required database record is missing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Actor archetype was not found by id.
    #[error("actor archetype {0} not found")]
    ArchetypeNotFound(ActorId),

    /// Class definition was not found by id.
    #[error("class {0} not found")]
    ClassNotFound(ClassId),

    /// A table record is not stored at the position its id implies.
    #[error("{table} table expected record #{expected}, found #{found}")]
    MisnumberedRecord {
        table: String,
        expected: usize,
        found: u16,
    },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ArchetypeNotFound(_) | ClassNotFound(_) => ErrorSeverity::Validation,
            MisnumberedRecord { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ArchetypeNotFound(_) => "ORACLE_ARCHETYPE_NOT_FOUND",
            ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            MisnumberedRecord { .. } => "ORACLE_MISNUMBERED_RECORD",
        }
    }
}
