//! Skill reference data: difficulty tiers and prerequisite graph

use crate::error::{Result, SkillGapError};
use crate::processing::normalize::normalize_skill_name;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use strsim::jaro_winkler;

const BUILTIN_SKILLS: &str = include_str!("../../data/skills.toml");

/// Similarity needed before a catalog name is offered as a suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Difficulty label used when a skill is not in the catalog
pub const UNKNOWN_DIFFICULTY: &str = "Unknown";

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub difficulty: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    skills: Vec<Skill>,
}

/// Immutable skill lookup keyed by lower-cased name.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    entries: HashMap<String, Skill>,
}

impl SkillCatalog {
    /// Build from ordered entries. When two names collapse to the same key the
    /// later entry replaces the earlier one.
    pub fn from_entries(skills: impl IntoIterator<Item = Skill>) -> Self {
        let mut entries = HashMap::new();
        for skill in skills {
            let key = normalize_skill_name(&skill.name);
            if let Some(previous) = entries.insert(key, skill) {
                warn!("Duplicate catalog entry '{}' replaced by a later definition", previous.name);
            }
        }
        debug!("Skill catalog built with {} entries", entries.len());
        Self { entries }
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SKILLS)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| SkillGapError::Catalog(format!("Failed to parse skill catalog: {}", e)))?;
        Ok(Self::from_entries(file.skills))
    }

    /// Accepts either a bare array of skills or `{ "skills": [...] }`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let skills: Vec<Skill> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            serde_json::from_value::<CatalogFile>(value)?.skills
        };
        Ok(Self::from_entries(skills))
    }

    /// Load a catalog file, choosing the parser by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_lowercase()) {
            Some(ext) if ext == "toml" => Self::from_toml_str(&content),
            Some(ext) if ext == "json" => Self::from_json_str(&content),
            _ => Err(SkillGapError::UnsupportedFormat(format!(
                "Skill catalog must be .toml or .json: {}",
                path.display()
            ))),
        }
    }

    /// Builtin catalog unless a replacement file is given
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Skill> {
        self.entries.get(&normalize_skill_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Difficulty label, or `Unknown` for skills outside the catalog
    pub fn difficulty_of(&self, name: &str) -> String {
        self.lookup(name)
            .map(|skill| skill.difficulty.clone())
            .unwrap_or_else(|| UNKNOWN_DIFFICULTY.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries sorted by name
    pub fn skills(&self) -> Vec<&Skill> {
        let mut entries: Vec<(&String, &Skill)> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, skill)| skill).collect()
    }

    /// Catalog names that look like `name`, best first
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&str> {
        let wanted = normalize_skill_name(name);
        let mut candidates: Vec<(f64, &str)> = self
            .entries
            .iter()
            .map(|(key, skill)| (jaro_winkler(&wanted, key), skill.name.as_str()))
            .filter(|(similarity, _)| *similarity >= SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        candidates.into_iter().take(limit).map(|(_, name)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, difficulty: &str, prerequisites: &[&str]) -> Skill {
        Skill {
            name: name.to_string(),
            difficulty: difficulty.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = SkillCatalog::builtin().unwrap();
        assert!(catalog.len() > 20);

        let vector_dbs = catalog.lookup("Vector Databases").unwrap();
        assert_eq!(vector_dbs.prerequisites, vec!["Data Analysis"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = SkillCatalog::from_entries(vec![skill("Kubernetes", "Hard", &["Docker"])]);
        assert!(catalog.lookup("kubernetes").is_some());
        assert!(catalog.lookup("KUBERNETES").is_some());
        assert!(catalog.lookup("Docker").is_none());
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let catalog = SkillCatalog::from_entries(vec![
            skill("React", "Easy", &[]),
            skill("react", "Hard", &["JavaScript"]),
        ]);
        assert_eq!(catalog.len(), 1);
        let react = catalog.lookup("React").unwrap();
        assert_eq!(react.difficulty, "Hard");
        assert_eq!(react.name, "react");
    }

    #[test]
    fn test_difficulty_of_unknown_skill() {
        let catalog = SkillCatalog::from_entries(vec![skill("SQL", "Easy", &[])]);
        assert_eq!(catalog.difficulty_of("sql"), "Easy");
        assert_eq!(catalog.difficulty_of("COBOL"), UNKNOWN_DIFFICULTY);
    }

    #[test]
    fn test_json_formats() {
        let bare = r#"[{"name": "Go", "difficulty": "Medium", "prerequisites": []}]"#;
        assert!(SkillCatalog::from_json_str(bare).unwrap().contains("go"));

        let wrapped = r#"{"skills": [{"name": "Rust", "difficulty": "Hard"}]}"#;
        let catalog = SkillCatalog::from_json_str(wrapped).unwrap();
        assert!(catalog.lookup("rust").unwrap().prerequisites.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_catalog_error() {
        let result = SkillCatalog::from_toml_str("[[skills]]\nname = 3\n");
        assert!(matches!(result, Err(SkillGapError::Catalog(_))));
    }

    #[test]
    fn test_skills_sorted_by_name() {
        let catalog = SkillCatalog::from_entries(vec![
            skill("SQL", "Easy", &[]),
            skill("AWS", "Medium", &[]),
            skill("docker", "Medium", &[]),
        ]);
        let names: Vec<&str> = catalog.skills().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["AWS", "docker", "SQL"]);
    }

    #[test]
    fn test_suggest_close_names() {
        let catalog = SkillCatalog::builtin().unwrap();
        let suggestions = catalog.suggest("Kubernetis", 3);
        assert_eq!(suggestions.first(), Some(&"Kubernetes"));
        assert!(catalog.suggest("zzzzzz", 3).is_empty());
    }
}
