//! Target roles and their required skills

use crate::error::{Result, SkillGapError};
use crate::processing::gap_analyzer::RoleRequirement;
use crate::processing::normalize::normalize_skill_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_ROLES: &str = include_str!("../../data/roles.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<RoleRequirement>,
}

#[derive(Debug, Deserialize)]
struct RolesFile {
    #[serde(default)]
    roles: Vec<RoleProfile>,
}

/// Ordered collection of target roles
#[derive(Debug, Clone, Default)]
pub struct RoleDirectory {
    roles: Vec<RoleProfile>,
}

impl RoleDirectory {
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ROLES)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RolesFile = toml::from_str(content)
            .map_err(|e| SkillGapError::RoleData(format!("Failed to parse roles: {}", e)))?;
        Ok(Self { roles: file.roles })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Case-insensitive lookup by role name
    pub fn find(&self, name: &str) -> Option<&RoleProfile> {
        let wanted = normalize_skill_name(name);
        self.roles.iter().find(|role| normalize_skill_name(&role.name) == wanted)
    }

    pub fn require(&self, name: &str) -> Result<&RoleProfile> {
        self.find(name).ok_or_else(|| {
            SkillGapError::UnknownRole(format!("{} (available: {})", name, self.role_names().join(", ")))
        })
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|role| role.name.as_str()).collect()
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roles() {
        let directory = RoleDirectory::builtin().unwrap();
        assert!(directory.role_names().contains(&"AI Engineer"));

        let ai = directory.find("ai engineer").unwrap();
        let vector = ai.requirements.iter().find(|r| r.name == "Vector Databases").unwrap();
        assert_eq!(vector.reason.as_deref(), Some("Critical for RAG"));
    }

    #[test]
    fn test_requirement_without_reason() {
        let directory = RoleDirectory::builtin().unwrap();
        let devops = directory.find("DevOps Engineer").unwrap();
        let linux = devops.requirements.iter().find(|r| r.name == "Linux").unwrap();
        assert!(linux.reason.is_none());
    }

    #[test]
    fn test_unknown_role() {
        let directory = RoleDirectory::builtin().unwrap();
        assert!(matches!(directory.require("Astronaut"), Err(SkillGapError::UnknownRole(_))));
    }

    #[test]
    fn test_malformed_roles() {
        assert!(matches!(
            RoleDirectory::from_toml_str("[[roles]]\nrequirements = 1\n"),
            Err(SkillGapError::RoleData(_))
        ));
    }
}
