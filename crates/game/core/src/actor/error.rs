//! Actor errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised by [`super::Actor`] operations that address something by index or id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Equipment slot index outside `0..5`.
    #[error("equipment slot {0} does not exist")]
    InvalidSlot(usize),
}

impl GameError for ActorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::InvalidSlot(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::InvalidSlot(_) => "ACTOR_INVALID_SLOT",
        }
    }
}
