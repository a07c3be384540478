//! Battle presentation helpers: menu command lists and screen placement.
pub mod commands;
pub mod placement;

pub use commands::{CommandSlot, resolve_commands};
pub use placement::{PlacementContext, SPRITE_ANCHOR_OFFSET};
