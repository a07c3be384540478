use super::{StatBounds, StatKind, StatLayers, StatModifiers};
use crate::config::EngineVariant;
use crate::env::{ItemOracle, ParameterCurves};
use crate::state::Equipment;

/// Resolves stats for one actor at one level.
///
/// Borrowed views only; build one per query.
#[derive(Clone, Copy)]
pub struct StatResolver<'a> {
    pub variant: EngineVariant,
    pub curves: &'a ParameterCurves,
    pub items: &'a dyn ItemOracle,
}

impl<'a> StatResolver<'a> {
    pub fn new(
        variant: EngineVariant,
        curves: &'a ParameterCurves,
        items: &'a dyn ItemOracle,
    ) -> Self {
        Self {
            variant,
            curves,
            items,
        }
    }

    pub fn resolve(
        &self,
        stat: StatKind,
        level: i32,
        modifiers: &StatModifiers,
        equipment: &Equipment,
        layers: StatLayers,
    ) -> i32 {
        let mut value = self.curves.value(stat, level);

        if layers.contains(StatLayers::MODIFIER) {
            value = value.saturating_add(modifiers.get(stat));
        }
        if layers.contains(StatLayers::EQUIPMENT) {
            value = value.saturating_add(self.equipment_bonus(stat, equipment));
        }

        StatBounds::for_stat(stat, self.variant).clamp(value)
    }

    /// Sum of `stat` bonuses over slots whose reference resolves in the catalog.
    pub fn equipment_bonus(&self, stat: StatKind, equipment: &Equipment) -> i32 {
        equipment
            .iter()
            .filter_map(|(_, item)| item)
            .filter_map(|item| self.items.resolve(item))
            .map(|item| item.equip.get(stat))
            .fold(0i32, i32::saturating_add)
    }
}
