use strum::IntoEnumIterator;

use super::Actor;
use crate::env::{ItemCategory, StatGains};
use crate::session::BattlerRules;
use crate::state::ItemId;
use crate::stats::{StatKind, StatLayers};

impl Actor<'_> {
    /// Applies `item` to this actor. Returns whether it had an effect.
    ///
    /// Only medicine works on an incapacitated actor. Books teach their
    /// skill and materials raise base stats; everything else is handed to
    /// the generic battler rules. Stock bookkeeping is the caller's.
    pub fn use_item(&mut self, item: ItemId, rules: &mut dyn BattlerRules) -> bool {
        let Some(definition) = self.env.items().resolve(item) else {
            tracing::warn!(actor = %self.state.id, %item, "used item has no record");
            return false;
        };

        let category = definition.category();
        if self.is_dead() && category != ItemCategory::Medicine {
            return false;
        }

        match category {
            ItemCategory::Book(skill) => self.learn_skill(skill),
            ItemCategory::Material(gains) => {
                self.apply_gains(gains);
                true
            }
            ItemCategory::Medicine | ItemCategory::Other => rules.use_item(self, definition),
        }
    }

    fn apply_gains(&mut self, gains: StatGains) {
        for stat in StatKind::iter() {
            let gain = gains.get(stat);
            if gain != 0 {
                let current = self.stat(stat, StatLayers::EFFECTIVE);
                self.set_base_stat(stat, current.saturating_add(gain));
            }
        }
    }
}
