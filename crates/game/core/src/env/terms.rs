/// Localized vocabulary used when composing notifications.
pub trait TermsOracle: Send + Sync {
    fn terms(&self) -> &Terms;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Terms {
    /// Word for "level", e.g. in "Alex Level 5".
    pub level: String,
    /// Suffix of the level-up line.
    pub level_up: String,
    /// Suffix of the skill-learned line.
    pub skill_learned: String,
}

impl Default for Terms {
    fn default() -> Self {
        Self {
            level: "Level".into(),
            level_up: " up!".into(),
            skill_learned: " learned!".into(),
        }
    }
}
