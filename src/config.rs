//! Configuration management for the skill gap analyzer

use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub gap: GapConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Weights of the additive confidence heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub work_experience_weight: u32,
    pub sustained_use_bonus: u32,
    /// A matching role must last strictly longer than this to earn the bonus
    pub sustained_use_min_years: f64,
    pub project_weight: u32,
    pub claim_baseline: u32,
    pub max_score: u32,
    /// Scores strictly above this are confirmed
    pub confirmed_threshold: u32,
}

/// Criticality policy for missing skills
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    pub base_score: u32,
    pub critical_bonus: u32,
    pub blocker_bonus: u32,
    /// Case-sensitive substring searched for in requirement reasons
    pub critical_marker: String,
    pub default_reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Replaces the embedded skill catalog when set
    pub skills_path: Option<PathBuf>,
    /// Replaces the embedded role directory when set
    pub roles_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            work_experience_weight: 60,
            sustained_use_bonus: 20,
            sustained_use_min_years: 1.0,
            project_weight: 30,
            claim_baseline: 10,
            max_score: 100,
            confirmed_threshold: 65,
        }
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            critical_bonus: 30,
            blocker_bonus: 20,
            critical_marker: "Critical".to_string(),
            default_reason: "Required for this role.".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load from an explicit file. Missing sections fall back to defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-gap")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.scoring.max_score == 0 {
            return Err(SkillGapError::Configuration(
                "scoring.max_score must be greater than zero".to_string(),
            ));
        }
        if self.scoring.confirmed_threshold >= self.scoring.max_score {
            return Err(SkillGapError::Configuration(format!(
                "scoring.confirmed_threshold ({}) must be below scoring.max_score ({})",
                self.scoring.confirmed_threshold, self.scoring.max_score
            )));
        }
        if self.gap.critical_marker.is_empty() {
            return Err(SkillGapError::Configuration(
                "gap.critical_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
