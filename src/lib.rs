//! Skill gap analyzer library
//!
//! Scores claimed skills against work and project evidence, then compares the
//! result with a target role's requirements and ranks the missing skills.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillGapError};
pub use processing::catalog::{Skill, SkillCatalog};
pub use processing::confidence::ConfidenceScorer;
pub use processing::experience::{infer_level, ExperienceLevel};
pub use processing::gap_analyzer::{GapAnalyzer, GapRecord, RoleRequirement, UserSkill};
pub use processing::profile::{ExperienceEntry, ParsedProfile, Project};
pub use processing::resume_analyzer::{ResumeAnalysis, ResumeAnalyzer, ScoredSkill, SkillStatus};
