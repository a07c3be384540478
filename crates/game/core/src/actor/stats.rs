use super::Actor;
use crate::stats::{StatKind, StatLayers};

impl Actor<'_> {
    /// Resolves `stat` at the current level with the chosen layers.
    pub fn stat(&self, stat: StatKind, layers: StatLayers) -> i32 {
        self.resolver().resolve(
            stat,
            self.state.level,
            &self.state.modifiers,
            &self.state.equipment,
            layers,
        )
    }

    pub fn max_hp(&self) -> i32 {
        self.stat(StatKind::MaxHp, StatLayers::EFFECTIVE)
    }

    pub fn max_sp(&self) -> i32 {
        self.stat(StatKind::MaxSp, StatLayers::EFFECTIVE)
    }

    pub fn attack(&self) -> i32 {
        self.stat(StatKind::Attack, StatLayers::EFFECTIVE)
    }

    pub fn defense(&self) -> i32 {
        self.stat(StatKind::Defense, StatLayers::EFFECTIVE)
    }

    pub fn spirit(&self) -> i32 {
        self.stat(StatKind::Spirit, StatLayers::EFFECTIVE)
    }

    pub fn agility(&self) -> i32 {
        self.stat(StatKind::Agility, StatLayers::EFFECTIVE)
    }

    /// Moves the permanent modifier so the effective value becomes `value`.
    ///
    /// The target is not clamped here; the resolver clamps on read, so the
    /// modifier may carry a surplus past the ceiling. HP and SP are pulled
    /// back into range after a max change.
    pub fn set_base_stat(&mut self, stat: StatKind, value: i32) {
        let delta = value.saturating_sub(self.stat(stat, StatLayers::EFFECTIVE));
        let modifier = self.state.modifiers.get_mut(stat);
        *modifier = modifier.saturating_add(delta);

        match stat {
            StatKind::MaxHp => self.set_hp(self.state.current_hp),
            StatKind::MaxSp => self.set_sp(self.state.current_sp),
            StatKind::Attack | StatKind::Defense | StatKind::Spirit | StatKind::Agility => {}
        }
    }

    pub fn set_base_max_hp(&mut self, value: i32) {
        self.set_base_stat(StatKind::MaxHp, value);
    }

    pub fn set_base_max_sp(&mut self, value: i32) {
        self.set_base_stat(StatKind::MaxSp, value);
    }

    pub fn set_base_attack(&mut self, value: i32) {
        self.set_base_stat(StatKind::Attack, value);
    }

    pub fn set_base_defense(&mut self, value: i32) {
        self.set_base_stat(StatKind::Defense, value);
    }

    pub fn set_base_spirit(&mut self, value: i32) {
        self.set_base_stat(StatKind::Spirit, value);
    }

    pub fn set_base_agility(&mut self, value: i32) {
        self.set_base_stat(StatKind::Agility, value);
    }
}
