use super::Actor;
use crate::env::RngOracle;
use crate::session::BattlerRules;
use crate::state::{LearnedSkills, SkillId};

impl Actor<'_> {
    pub fn skills(&self) -> &LearnedSkills {
        &self.state.skills
    }

    pub fn is_skill_learned(&self, skill: SkillId) -> bool {
        self.state.skills.contains(skill)
    }

    /// Returns false for id 0 or a skill already known.
    pub fn learn_skill(&mut self, skill: SkillId) -> bool {
        let learned = self.state.skills.learn(skill);
        if learned {
            tracing::debug!(actor = %self.state.id, %skill, "skill learned");
        }
        learned
    }

    pub fn unlearn_skill(&mut self, skill: SkillId) -> bool {
        let removed = self.state.skills.unlearn(skill);
        if removed {
            tracing::debug!(actor = %self.state.id, %skill, "skill forgotten");
        }
        removed
    }

    /// Learned and accepted by the generic rules (SP cost, restricting states).
    pub fn is_skill_usable(&self, skill: SkillId, rules: &dyn BattlerRules) -> bool {
        if !self.is_skill_learned(skill) {
            return false;
        }
        self.env
            .skills()
            .skill(skill)
            .is_some_and(|definition| rules.is_skill_usable(self, definition))
    }

    /// Uniform pick among learned skills, `None` when nothing is learned.
    pub fn random_skill(&self, rng: &dyn RngOracle, seed: u64) -> Option<SkillId> {
        let skills = self.state.skills.as_slice();
        rng.pick_index(seed, skills.len())
            .and_then(|index| skills.get(index))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::Actor;
    use crate::env::PcgRng;
    use crate::state::SkillId;
    use crate::testing::{self, ALEX, FIRE, HEAL, ICE, PermissiveBattler};

    #[test]
    fn learning_twice_is_a_noop() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();

        assert!(actor.learn_skill(ICE));
        assert!(!actor.learn_skill(ICE));
        assert!(!actor.learn_skill(SkillId(0)));
        assert_eq!(actor.skills().len(), 1);

        assert!(actor.unlearn_skill(ICE));
        assert!(!actor.unlearn_skill(ICE));
    }

    #[test]
    fn usability_requires_learning_and_rules() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();
        actor.init();
        let rules = PermissiveBattler::default();

        assert!(actor.is_skill_usable(HEAL, &rules));
        assert!(!actor.is_skill_usable(FIRE, &rules));

        // the permissive rules still charge SP
        actor.learn_skill(FIRE);
        actor.set_sp(0);
        assert!(!actor.is_skill_usable(FIRE, &rules));
    }

    #[test]
    fn random_skill_needs_a_learned_skill() {
        let db = testing::database();
        let config = testing::config();
        let mut actor = Actor::new(ALEX, db.env(&config)).unwrap();
        let rng = PcgRng;

        assert_eq!(actor.random_skill(&rng, 1), None);

        actor.learn_skill(FIRE);
        actor.learn_skill(ICE);
        for seed in 0..32 {
            let skill = actor.random_skill(&rng, seed).unwrap();
            assert!(skill == FIRE || skill == ICE);
        }
    }
}
