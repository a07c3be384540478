//! Experience and level transitions.
//!
//! `level` is authoritative. Experience follows it: never below the
//! threshold of the current level, and below the next threshold unless the
//! actor sits at the final level.

use std::cmp::Ordering;

use super::Actor;
use crate::growth::ExpTable;
use crate::session::MessageQueue;
use crate::stats::StatBounds;

/// Shown in place of the next threshold at the final level.
pub const NO_NEXT_EXP: &str = "------";

impl Actor<'_> {
    pub fn level(&self) -> i32 {
        self.state.level
    }

    pub fn exp(&self) -> i32 {
        self.state.exp
    }

    pub fn max_level(&self) -> i32 {
        self.exp_table.max_level()
    }

    pub fn exp_table(&self) -> &ExpTable {
        &self.exp_table
    }

    /// Threshold of `level`, `None` outside `1..=max_level`.
    pub fn min_exp_for_level(&self, level: i32) -> Option<i32> {
        self.exp_table.min_exp(level)
    }

    /// Threshold of the current level.
    pub fn base_exp(&self) -> Option<i32> {
        self.exp_table.min_exp(self.state.level)
    }

    /// Threshold of the next level, `None` at the final level.
    pub fn next_exp(&self) -> Option<i32> {
        self.exp_table.next_exp(self.state.level)
    }

    pub fn exp_string(&self) -> String {
        self.state.exp.to_string()
    }

    pub fn next_exp_string(&self) -> String {
        self.next_exp()
            .map_or_else(|| NO_NEXT_EXP.to_string(), |exp| exp.to_string())
    }

    /// Stores experience clamped to the variant ceiling. The level is not adjusted.
    pub fn set_exp(&mut self, exp: i32) {
        self.state.exp = StatBounds::experience(self.env.variant()).clamp(exp);
    }

    /// Stores the level clamped to `1..=max_level`.
    ///
    /// Skills and experience are left alone; HP and SP are reclamped.
    pub fn set_level(&mut self, level: i32) {
        self.state.level = level.clamp(1, self.max_level());
        self.reclamp_vitals();
    }

    /// Sets experience to `exp` and moves the level to match.
    ///
    /// With a message queue the level-up lines are posted there as one batch.
    pub fn change_exp(&mut self, exp: i32, messages: Option<&mut dyn MessageQueue>) {
        let exp = StatBounds::experience(self.env.variant()).clamp(exp);
        let mut level = self.state.level;

        match exp.cmp(&self.state.exp) {
            Ordering::Greater => {
                while level < self.max_level() {
                    match self.exp_table.next_exp(level) {
                        Some(threshold) if threshold <= exp => level += 1,
                        _ => break,
                    }
                }
            }
            Ordering::Less => {
                while level > 1 {
                    match self.exp_table.min_exp(level) {
                        Some(threshold) if exp < threshold => level -= 1,
                        _ => break,
                    }
                }
            }
            Ordering::Equal => {}
        }

        self.set_exp(exp);
        if level != self.state.level {
            self.change_level(level, messages);
        }
    }

    /// Moves to `level` (clamped) and applies the transition side effects.
    ///
    /// Going up learns the archetype skills unlocked on the way and lifts
    /// experience to the new threshold. Going down pulls HP and SP under
    /// the new maxima and drops experience that would already reach the
    /// next level.
    pub fn change_level(&mut self, level: i32, messages: Option<&mut dyn MessageQueue>) {
        let old_level = self.state.level;
        self.set_level(level);
        let new_level = self.state.level;

        match new_level.cmp(&old_level) {
            Ordering::Greater => self.level_up(old_level, new_level, messages),
            Ordering::Less => self.level_down(old_level, new_level),
            Ordering::Equal => {}
        }
    }

    fn level_up(&mut self, old_level: i32, new_level: i32, messages: Option<&mut dyn MessageQueue>) {
        tracing::debug!(actor = %self.state.id, old_level, new_level, "level up");

        let archetype = self.archetype;
        let terms = self.env.terms();
        let announce = messages.is_some();
        let mut lines = Vec::new();

        if announce {
            lines.push(format!(
                "{} {} {}{}",
                self.state.name, terms.level, new_level, terms.level_up
            ));
        }

        let unlocked = archetype
            .skills
            .iter()
            .filter(|learning| learning.level > old_level && learning.level <= new_level);
        for learning in unlocked {
            if !self.learn_skill(learning.skill) || !announce {
                continue;
            }
            match self.env.skills().skill(learning.skill) {
                Some(skill) => lines.push(format!("{}{}", skill.name, terms.skill_learned)),
                None => tracing::warn!(skill = %learning.skill, "learned skill has no record"),
            }
        }

        if let Some(queue) = messages {
            queue.post(lines);
        }

        let floor = self.base_exp().unwrap_or(0);
        self.set_exp(self.state.exp.max(floor));
    }

    fn level_down(&mut self, old_level: i32, new_level: i32) {
        tracing::debug!(actor = %self.state.id, old_level, new_level, "level down");

        self.reclamp_vitals();

        if self.next_exp().is_none_or(|next| self.state.exp >= next) {
            self.set_exp(self.base_exp().unwrap_or(0));
        }
    }
}
