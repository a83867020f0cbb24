//! Case-insensitive skill name handling shared by every component

use std::collections::HashSet;

/// Normalized lookup key for a skill name.
pub fn normalize_skill_name(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive set of skill names
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    keys: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when an equivalent name was already present
    pub fn insert(&mut self, name: &str) -> bool {
        self.keys.insert(normalize_skill_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&normalize_skill_name(name))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// Case-insensitive substring test
pub fn mentions_skill(text: &str, skill: &str) -> bool {
    normalize_skill_name(text).contains(&normalize_skill_name(skill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_ignores_case() {
        let set: SkillSet = ["Python", "Data Analysis"].into_iter().collect();
        assert!(set.contains("python"));
        assert!(set.contains("DATA ANALYSIS"));
        assert!(!set.contains("Rust"));
    }

    #[test]
    fn test_insert_collapses_case_variants() {
        let mut set = SkillSet::new();
        assert!(set.insert("React"));
        assert!(!set.insert("react"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_mentions_skill() {
        assert!(mentions_skill("Built responsive UI with React and Redux.", "react"));
        assert!(!mentions_skill("Wrote Go services", "Rust"));
    }
}
