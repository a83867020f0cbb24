//! Error handling for the skill gap analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Skill catalog error: {0}")]
    Catalog(String),

    #[error("Role data error: {0}")]
    RoleData(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillGapError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillGapError {
    fn from(err: anyhow::Error) -> Self {
        SkillGapError::InvalidInput(err.to_string())
    }
}

/// TOML parse failures surface as data errors of the file being read
impl From<toml::de::Error> for SkillGapError {
    fn from(err: toml::de::Error) -> Self {
        SkillGapError::InvalidInput(format!("TOML parse error: {}", err))
    }
}
