//! Mutable collaborators owned by the surrounding game session.
//!
//! Unlike oracles these carry live state (party stock, the message window,
//! the current battle). They are passed into the calls that need them, so
//! tests can substitute recording fakes.
mod battle;
mod battler;
mod messages;
mod party;

pub use battle::{BattleMode, BattleState};
pub use battler::BattlerRules;
pub use messages::{MessageLog, MessageQueue};
pub use party::Party;
