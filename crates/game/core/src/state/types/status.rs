//! Active status conditions.
//!
//! The generic battler rules own what a condition does; actors only add,
//! remove and query them.

use super::StateId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusConditions {
    states: Vec<StateId>,
}

impl StatusConditions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Returns false if the state was already active.
    pub fn add(&mut self, state: StateId) -> bool {
        if self.contains(state) {
            return false;
        }
        self.states.push(state);
        true
    }

    /// Returns whether the state was active.
    pub fn remove(&mut self, state: StateId) -> bool {
        let before = self.states.len();
        self.states.retain(|&s| s != state);
        self.states.len() != before
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
