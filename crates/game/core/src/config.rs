/// Numeric rule family the runtime emulates.
///
/// The two legacy engine generations disagree on the experience curve
/// formula and on several value ceilings. The variant is chosen once when
/// the game data is loaded and then threaded through every computation that
/// depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineVariant {
    /// Compounding experience curve, 999 max HP, 999999 max experience.
    #[default]
    Rpg2k,
    /// Linear experience curve, 9999 max HP, 9999999 max experience.
    Rpg2k3,
}

impl EngineVariant {
    /// Ceiling for maximum HP.
    pub const fn max_hp(self) -> i32 {
        match self {
            Self::Rpg2k => 999,
            Self::Rpg2k3 => 9999,
        }
    }

    /// Ceiling for max SP, attack, defense, spirit and agility.
    pub const fn max_other_stat(self) -> i32 {
        999
    }

    /// Ceiling for accumulated experience.
    pub const fn max_exp(self) -> i32 {
        match self {
            Self::Rpg2k => 999_999,
            Self::Rpg2k3 => 9_999_999,
        }
    }

    /// Whether battler animations replace the static battle sprite.
    pub const fn has_battle_animations(self) -> bool {
        matches!(self, Self::Rpg2k3)
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Rule family used for curves and ceilings.
    pub variant: EngineVariant,
    /// Logical screen width battle coordinates are expressed in.
    pub screen_width: i32,
    /// Logical screen height battle coordinates are expressed in.
    pub screen_height: i32,
}

impl GameConfig {
    /// Resolution fixed battle coordinates are authored against.
    pub const REFERENCE_WIDTH: i32 = 320;
    pub const REFERENCE_HEIGHT: i32 = 240;

    pub fn new(variant: EngineVariant) -> Self {
        Self {
            variant,
            screen_width: Self::REFERENCE_WIDTH,
            screen_height: Self::REFERENCE_HEIGHT,
        }
    }

    pub fn with_screen_size(mut self, width: i32, height: i32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(EngineVariant::default())
    }
}
