//! Missing-skill detection ranked by criticality

use crate::config::GapConfig;
use crate::processing::catalog::{SkillCatalog, UNKNOWN_DIFFICULTY};
use crate::processing::normalize::SkillSet;
use crate::processing::resume_analyzer::{ScoredSkill, SkillStatus};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-assessed or derived confidence attached to a held skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill the candidate currently holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSkill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl UserSkill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), confidence: None }
    }

    pub fn with_confidence(name: impl Into<String>, confidence: Confidence) -> Self {
        Self { name: name.into(), confidence: Some(confidence) }
    }
}

impl From<&ScoredSkill> for UserSkill {
    fn from(skill: &ScoredSkill) -> Self {
        let confidence = match skill.status {
            SkillStatus::Confirmed => Confidence::High,
            SkillStatus::Partial => Confidence::Low,
        };
        UserSkill::with_confidence(skill.name.clone(), confidence)
    }
}

/// One skill a target role asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RoleRequirement {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { name: name.into(), reason: Some(reason.into()) }
    }

    pub fn unexplained(name: impl Into<String>) -> Self {
        Self { name: name.into(), reason: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapStatus {
    Missing,
}

/// One missing skill with its blockers and urgency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRecord {
    pub name: String,
    pub status: GapStatus,
    pub reason: String,
    pub difficulty: String,
    pub blockers: Vec<String>,
    pub criticality_score: u32,
}

impl GapRecord {
    pub fn is_blocked(&self) -> bool {
        !self.blockers.is_empty()
    }
}

/// Compares held skills with role requirements using the catalog's
/// prerequisite graph
#[derive(Debug, Clone)]
pub struct GapAnalyzer<'a> {
    catalog: &'a SkillCatalog,
    policy: GapConfig,
}

impl<'a> GapAnalyzer<'a> {
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self::with_policy(catalog, GapConfig::default())
    }

    pub fn with_policy(catalog: &'a SkillCatalog, policy: GapConfig) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &'a SkillCatalog {
        self.catalog
    }

    /// Missing requirements, highest criticality first
    pub fn analyze_gap(&self, user_skills: &[UserSkill], requirements: &[RoleRequirement]) -> Vec<GapRecord> {
        let held: SkillSet = user_skills.iter().map(|s| s.name.as_str()).collect();
        self.analyze_gap_with(&held, requirements)
    }

    pub(crate) fn analyze_gap_with(&self, held: &SkillSet, requirements: &[RoleRequirement]) -> Vec<GapRecord> {
        let mut gaps: Vec<GapRecord> = requirements
            .iter()
            .filter(|req| !held.contains(&req.name))
            .map(|req| self.gap_record(req, held))
            .collect();

        gaps.sort_by(|a, b| b.criticality_score.cmp(&a.criticality_score));
        info!("{} of {} requirements missing", gaps.len(), requirements.len());
        gaps
    }

    fn gap_record(&self, requirement: &RoleRequirement, held: &SkillSet) -> GapRecord {
        let (difficulty, blockers) = match self.catalog.lookup(&requirement.name) {
            Some(skill) => {
                let blockers: Vec<String> = skill
                    .prerequisites
                    .iter()
                    .filter(|prereq| !held.contains(prereq))
                    .cloned()
                    .collect();
                (skill.difficulty.clone(), blockers)
            }
            None => {
                debug!("'{}' not in skill catalog", requirement.name);
                (UNKNOWN_DIFFICULTY.to_string(), Vec::new())
            }
        };

        let criticality_score = self.criticality(requirement.reason.as_deref(), !blockers.is_empty());
        let reason = match requirement.reason.as_deref() {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => self.policy.default_reason.clone(),
        };

        GapRecord {
            name: requirement.name.clone(),
            status: GapStatus::Missing,
            reason,
            difficulty,
            blockers,
            criticality_score,
        }
    }

    /// Base score plus bonuses for a critical reason and unmet prerequisites
    pub fn criticality(&self, reason: Option<&str>, blocked: bool) -> u32 {
        let mut score = self.policy.base_score;
        if reason.is_some_and(|r| r.contains(self.policy.critical_marker.as_str())) {
            score += self.policy.critical_bonus;
        }
        if blocked {
            score += self.policy.blocker_bonus;
        }
        score
    }
}
