use super::Actor;
use crate::state::{StateId, StatusConditions};

impl Actor<'_> {
    pub fn hp(&self) -> i32 {
        self.state.current_hp
    }

    pub fn sp(&self) -> i32 {
        self.state.current_sp
    }

    /// Pulls HP and SP back under their maxima after a table or level swap.
    pub(super) fn reclamp_vitals(&mut self) {
        self.set_hp(self.state.current_hp);
        self.set_sp(self.state.current_sp);
    }

    /// Sets HP, clamped to `0..=max_hp`. Status conditions are not touched.
    pub fn set_hp(&mut self, hp: i32) {
        self.state.current_hp = hp.clamp(0, self.max_hp());
    }

    pub fn set_sp(&mut self, sp: i32) {
        self.state.current_sp = sp.clamp(0, self.max_sp());
    }

    /// Applies an HP delta and the death transition.
    ///
    /// Dropping to 0 HP replaces every condition with the death state.
    /// Any other result lifts the death state.
    pub fn change_hp(&mut self, delta: i32) {
        self.set_hp(self.state.current_hp.saturating_add(delta));

        if self.state.current_hp == 0 {
            self.state.states.clear();
            self.state.states.add(StateId::DEATH);
            tracing::debug!(actor = %self.state.id, "actor incapacitated");
        } else if self.state.states.remove(StateId::DEATH) {
            tracing::debug!(actor = %self.state.id, hp = self.state.current_hp, "actor revived");
        }
    }

    pub fn is_dead(&self) -> bool {
        self.state.states.contains(StateId::DEATH)
    }

    pub fn states(&self) -> &StatusConditions {
        &self.state.states
    }

    pub fn has_state(&self, state: StateId) -> bool {
        self.state.states.contains(state)
    }

    /// Returns false if the condition was already active.
    pub fn add_state(&mut self, state: StateId) -> bool {
        self.state.states.add(state)
    }

    pub fn remove_state(&mut self, state: StateId) -> bool {
        self.state.states.remove(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::Actor;
    use crate::state::StateId;
    use crate::testing::{self, ALEX};

    const POISON: StateId = StateId(2);

    #[test]
    fn hp_and_sp_are_clamped() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();

        actor.set_hp(-10);
        assert_eq!(actor.hp(), 0);
        actor.set_hp(100_000);
        assert_eq!(actor.hp(), actor.max_hp());
        actor.set_sp(100_000);
        assert_eq!(actor.sp(), actor.max_sp());
    }

    #[test]
    fn lethal_damage_replaces_conditions_with_death() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();
        actor.init();
        actor.add_state(POISON);

        actor.change_hp(-100_000);
        assert_eq!(actor.hp(), 0);
        assert!(actor.is_dead());
        assert!(!actor.has_state(POISON));
        assert_eq!(actor.states().iter().count(), 1);
    }

    #[test]
    fn healing_lifts_death() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();
        actor.init();
        actor.change_hp(-100_000);

        actor.change_hp(5);
        assert_eq!(actor.hp(), 5);
        assert!(!actor.is_dead());
    }
}
