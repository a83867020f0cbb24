//! Input manager for loading profiles, skill lists and role requirements

use crate::error::{Result, SkillGapError};
use crate::input::decoder::{JsonDecoder, RecordDecoder, TomlDecoder};
use crate::input::file_detector::FileType;
use crate::processing::gap_analyzer::{RoleRequirement, UserSkill};
use crate::processing::profile::ParsedProfile;
use crate::processing::roles::RoleProfile;
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Requirements may be a bare list or a named role
#[derive(Deserialize)]
#[serde(untagged)]
enum RequirementsFile {
    List(Vec<RoleRequirement>),
    Role {
        #[serde(default)]
        name: Option<String>,
        requirements: Vec<RoleRequirement>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsFile {
    List(Vec<UserSkill>),
    Wrapped { skills: Vec<UserSkill> },
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_profile(&mut self, path: &Path) -> Result<ParsedProfile> {
        let profile: ParsedProfile = self.load_records(path).await.map_err(|e| match e {
            SkillGapError::Serialization(e) => SkillGapError::Profile(format!("{}: {}", path.display(), e)),
            SkillGapError::InvalidInput(e) => SkillGapError::Profile(format!("{}: {}", path.display(), e)),
            other => other,
        })?;
        info!("Loaded profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    /// Load a requirement list; an unnamed list takes the file stem as role name
    pub async fn load_requirements(&mut self, path: &Path) -> Result<RoleProfile> {
        let file: RequirementsFile = self.load_records(path).await?;
        let fallback_name = || {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "Custom Role".to_string())
        };

        let role = match file {
            RequirementsFile::List(requirements) => RoleProfile { name: fallback_name(), requirements },
            RequirementsFile::Role { name, requirements } => RoleProfile {
                name: name.unwrap_or_else(fallback_name),
                requirements,
            },
        };
        info!("Loaded {} requirements for '{}'", role.requirements.len(), role.name);
        Ok(role)
    }

    pub async fn load_user_skills(&mut self, path: &Path) -> Result<Vec<UserSkill>> {
        let skills = match self.load_records::<SkillsFile>(path).await? {
            SkillsFile::List(skills) | SkillsFile::Wrapped { skills } => skills,
        };
        info!("Loaded {} current skills from {}", skills.len(), path.display());
        Ok(skills)
    }

    async fn load_records<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(SkillGapError::UnsupportedFormat(format!(
                "Unsupported file type for: {} (expected .json or .toml)",
                path.display()
            )));
        }

        let content = self.read_content(path).await?;
        match file_type {
            FileType::Toml => TomlDecoder.decode(&content),
            _ => JsonDecoder.decode(&content),
        }
    }

    async fn read_content(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached content for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(SkillGapError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, content.clone());
        }

        Ok(content)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| SkillGapError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
