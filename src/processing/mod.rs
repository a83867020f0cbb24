//! Skill scoring and gap analysis core

pub mod normalize;
pub mod profile;
pub mod catalog;
pub mod confidence;
pub mod experience;
pub mod resume_analyzer;
pub mod gap_analyzer;
pub mod role_match;
pub mod roles;
pub mod roadmap;
