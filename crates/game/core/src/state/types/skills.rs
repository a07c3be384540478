use super::SkillId;

/// Skills an actor knows, unique and in ascending id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<SkillId>", into = "Vec<SkillId>"))]
pub struct LearnedSkills {
    skills: Vec<SkillId>,
}

impl LearnedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, skill: SkillId) -> bool {
        self.skills.binary_search(&skill).is_ok()
    }

    /// Inserts `skill` in order. Returns false for id 0 or a known skill.
    pub fn learn(&mut self, skill: SkillId) -> bool {
        if skill.get() == 0 {
            return false;
        }
        match self.skills.binary_search(&skill) {
            Ok(_) => false,
            Err(position) => {
                self.skills.insert(position, skill);
                true
            }
        }
    }

    /// Returns whether `skill` was known.
    pub fn unlearn(&mut self, skill: SkillId) -> bool {
        match self.skills.binary_search(&skill) {
            Ok(position) => {
                self.skills.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[SkillId] {
        &self.skills
    }

    pub fn iter(&self) -> impl Iterator<Item = SkillId> + '_ {
        self.skills.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl From<Vec<SkillId>> for LearnedSkills {
    /// Normalises persisted lists that may be unsorted or hold duplicates.
    fn from(mut skills: Vec<SkillId>) -> Self {
        skills.retain(|skill| skill.get() != 0);
        skills.sort_unstable();
        skills.dedup();
        Self { skills }
    }
}

impl From<LearnedSkills> for Vec<SkillId> {
    fn from(learned: LearnedSkills) -> Self {
        learned.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_keeps_ascending_unique_order() {
        let mut skills = LearnedSkills::new();
        assert!(skills.learn(SkillId(5)));
        assert!(skills.learn(SkillId(2)));
        assert!(skills.learn(SkillId(9)));
        assert!(!skills.learn(SkillId(5)));

        assert_eq!(skills.as_slice(), &[SkillId(2), SkillId(5), SkillId(9)]);
    }

    #[test]
    fn reserved_id_is_never_learned() {
        let mut skills = LearnedSkills::new();
        assert!(!skills.learn(SkillId(0)));
        assert!(skills.is_empty());
    }

    #[test]
    fn unlearn_reports_removal() {
        let mut skills = LearnedSkills::from(vec![SkillId(3), SkillId(1)]);
        assert!(skills.unlearn(SkillId(3)));
        assert!(!skills.unlearn(SkillId(3)));
        assert_eq!(skills.as_slice(), &[SkillId(1)]);
    }

    #[test]
    fn persisted_list_is_normalised() {
        let skills = LearnedSkills::from(vec![SkillId(4), SkillId(0), SkillId(2), SkillId(4)]);
        assert_eq!(skills.as_slice(), &[SkillId(2), SkillId(4)]);
    }
}
