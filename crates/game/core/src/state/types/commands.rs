use crate::battle::CommandSlot;

/// Per-actor overrides of the battle menu, kept sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleCommandOverrides {
    slots: Vec<CommandSlot>,
}

impl BattleCommandOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<CommandSlot>) -> Self {
        Self { slots }
    }

    /// Adds `slot` unless already present, then re-sorts.
    pub fn add(&mut self, slot: CommandSlot) {
        if !self.slots.contains(&slot) {
            self.slots.push(slot);
            self.slots.sort();
        }
    }

    /// Removes the first occurrence of `slot`.
    pub fn remove(&mut self, slot: CommandSlot) -> bool {
        match self.slots.iter().position(|&s| s == slot) {
            Some(position) => {
                self.slots.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[CommandSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CommandId;

    #[test]
    fn add_is_unique_and_sorted() {
        let mut overrides = BattleCommandOverrides::new();
        overrides.add(CommandSlot::Command(CommandId(3)));
        overrides.add(CommandSlot::Default);
        overrides.add(CommandSlot::Command(CommandId(3)));
        overrides.add(CommandSlot::Command(CommandId(1)));
        overrides.add(CommandSlot::Row);

        assert_eq!(
            overrides.as_slice(),
            &[
                CommandSlot::Row,
                CommandSlot::Command(CommandId(1)),
                CommandSlot::Command(CommandId(3)),
                CommandSlot::Default,
            ]
        );
    }
}
