//! Resume analysis: scores every claimed skill and tiers the results

use crate::config::ScoringConfig;
use crate::processing::confidence::ConfidenceScorer;
use crate::processing::experience::{infer_level, ExperienceLevel};
use crate::processing::profile::ParsedProfile;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONFIRMED_EVIDENCE: &str = "Verified via Work Experience";
pub const PARTIAL_EVIDENCE: &str = "Mentioned in Skills list only";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillStatus {
    Confirmed,
    #[serde(rename = "Partial/Weak")]
    Partial,
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => f.write_str("Confirmed"),
            Self::Partial => f.write_str("Partial/Weak"),
        }
    }
}

/// One claimed skill after scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSkill {
    pub name: String,
    pub confidence_score: u8,
    pub status: SkillStatus,
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMetadata {
    pub candidate_name: String,
    pub inferred_level: ExperienceLevel,
    pub total_experience_years: f64,
}

/// Confirmed and partial tiers, each sorted by descending confidence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfile {
    pub confirmed_skills: Vec<ScoredSkill>,
    pub partial_skills: Vec<ScoredSkill>,
}

impl SkillProfile {
    /// Every scored skill, confirmed tier first
    pub fn all_skills(&self) -> impl Iterator<Item = &ScoredSkill> {
        self.confirmed_skills.iter().chain(&self.partial_skills)
    }

    pub fn len(&self) -> usize {
        self.confirmed_skills.len() + self.partial_skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub metadata: CandidateMetadata,
    pub skill_profile: SkillProfile,
    pub analysis_timestamp: DateTime<Utc>,
}

/// Runs the confidence scorer over a whole profile. Holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct ResumeAnalyzer {
    scorer: ConfidenceScorer,
}

impl ResumeAnalyzer {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { scorer: ConfidenceScorer::new(weights) }
    }

    pub fn analyze(&self, profile: &ParsedProfile) -> ResumeAnalysis {
        self.analyze_at(profile, Utc::now())
    }

    /// Same as [`analyze`](Self::analyze) with a caller-supplied timestamp
    pub fn analyze_at(&self, profile: &ParsedProfile, timestamp: DateTime<Utc>) -> ResumeAnalysis {
        let claimed = profile.claimed_skills();
        info!("Analyzing {} claimed skills for '{}'", claimed.len(), profile.name);

        let mut skill_profile = SkillProfile::default();
        for skill in claimed {
            let scored = self.score_skill(skill, profile);
            debug!("{} -> {} ({})", scored.name, scored.confidence_score, scored.status);
            match scored.status {
                SkillStatus::Confirmed => skill_profile.confirmed_skills.push(scored),
                SkillStatus::Partial => skill_profile.partial_skills.push(scored),
            }
        }

        skill_profile.confirmed_skills.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
        skill_profile.partial_skills.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));

        let total_years = profile.total_experience_years();
        ResumeAnalysis {
            metadata: CandidateMetadata {
                candidate_name: profile.name.clone(),
                inferred_level: infer_level(total_years),
                total_experience_years: total_years,
            },
            skill_profile,
            analysis_timestamp: timestamp,
        }
    }

    fn score_skill(&self, name: String, profile: &ParsedProfile) -> ScoredSkill {
        let confidence_score = self.scorer.score(&name, &profile.experience, &profile.projects);
        let (status, evidence) = if self.scorer.is_confirmed(confidence_score) {
            (SkillStatus::Confirmed, CONFIRMED_EVIDENCE)
        } else {
            (SkillStatus::Partial, PARTIAL_EVIDENCE)
        };

        ScoredSkill {
            name,
            confidence_score,
            status,
            evidence: evidence.to_string(),
        }
    }
}

/// Analyze with the default weights
pub fn analyze(profile: &ParsedProfile) -> ResumeAnalysis {
    ResumeAnalyzer::default().analyze(profile)
}
