//! Battle menu command lists.
//!
//! Both the archetype's default menu and an actor's override list are
//! sequences of [`CommandSlot`]s. Resolution walks the override list by
//! position and consults the default list wherever the override defers.

use crate::env::{BattleCommand, BattleOracle};
use crate::state::CommandId;

/// One entry of a battle command list.
///
/// Variants are ordered like the raw values read as unsigned
/// (`0 < id < u32::MAX`), so sorting puts explicit commands ahead of the
/// deferring entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandSlot {
    /// Row change command, which is never shown.
    Row,
    Command(CommandId),
    /// In an override list: use the archetype's command at this position.
    /// In an archetype list: end of list.
    Default,
}

impl CommandSlot {
    /// Decodes the raw value used by save data and event commands.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Row,
            raw if raw < 0 => Self::Default,
            raw => u16::try_from(raw)
                .map(|id| Self::Command(CommandId(id)))
                .unwrap_or(Self::Default),
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            Self::Default => -1,
            Self::Row => 0,
            Self::Command(id) => i32::from(id.get()),
        }
    }
}

/// Resolves an override list against the archetype's defaults.
///
/// Row entries are skipped. A deferring entry uses the default at the same
/// position unless that position is past the default list, marks its end,
/// or is itself a row entry. References missing from the catalog are
/// skipped.
pub fn resolve_commands<'a>(
    overrides: &[CommandSlot],
    defaults: &[CommandSlot],
    catalog: &'a dyn BattleOracle,
) -> Vec<&'a BattleCommand> {
    let mut commands = Vec::with_capacity(overrides.len());

    for (position, slot) in overrides.iter().enumerate() {
        let id = match slot {
            CommandSlot::Row => continue,
            CommandSlot::Command(id) => *id,
            CommandSlot::Default => match defaults.get(position) {
                Some(CommandSlot::Command(id)) => *id,
                Some(CommandSlot::Default | CommandSlot::Row) | None => continue,
            },
        };

        match catalog.command(id) {
            Some(command) => commands.push(command),
            None => tracing::warn!(command = %id, "battle command missing from catalog"),
        }
    }

    commands
}
