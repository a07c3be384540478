//! Configuration oracle for exposing game configuration to actors.

use crate::config::{EngineVariant, GameConfig};

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    fn variant(&self) -> EngineVariant;

    /// Logical screen size as `(width, height)`.
    fn screen_size(&self) -> (i32, i32);
}

impl ConfigOracle for GameConfig {
    fn variant(&self) -> EngineVariant {
        self.variant
    }

    fn screen_size(&self) -> (i32, i32) {
        (self.screen_width, self.screen_height)
    }
}
