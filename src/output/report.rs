//! Report structures combining resume analysis, role fit and roadmap

use crate::processing::gap_analyzer::{GapAnalyzer, UserSkill};
use crate::processing::resume_analyzer::ResumeAnalysis;
use crate::processing::role_match::RoleFit;
use crate::processing::roadmap::{RoadmapPlanner, RoadmapStep};
use crate::processing::roles::RoleProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one CLI run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReport {
    pub metadata: ReportMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ResumeAnalysis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<GapReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_file: Option<String>,
    pub catalog_skills: usize,
}

/// Fit of the candidate against one target role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    pub role: String,
    pub fit: RoleFit,
    pub roadmap: Vec<RoadmapStep>,
}

impl ReportMetadata {
    pub fn new(profile_file: Option<String>, catalog_skills: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            profile_file,
            catalog_skills,
        }
    }
}

impl ComprehensiveReport {
    pub fn new(metadata: ReportMetadata) -> Self {
        Self { metadata, analysis: None, gap: None }
    }

    pub fn with_analysis(mut self, analysis: ResumeAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn with_gap(mut self, gap: GapReport) -> Self {
        self.gap = Some(gap);
        self
    }
}

impl GapReport {
    /// Classify the role's requirements and plan the missing ones
    pub fn build(analyzer: &GapAnalyzer<'_>, role: &RoleProfile, user_skills: &[UserSkill]) -> Self {
        let fit = analyzer.classify_requirements(user_skills, &role.requirements);
        let roadmap = RoadmapPlanner::new(analyzer.catalog()).plan(&fit.missing, &role.name);
        Self {
            role: role.name.clone(),
            fit,
            roadmap,
        }
    }
}

/// Held skills as seen by gap analysis: every scored skill with its tier
pub fn user_skills_from_analysis(analysis: &ResumeAnalysis) -> Vec<UserSkill> {
    analysis.skill_profile.all_skills().map(UserSkill::from).collect()
}
