//! Role fit: matched, partial and missing requirements with a match score

use crate::processing::gap_analyzer::{Confidence, GapAnalyzer, GapRecord, RoleRequirement, UserSkill};
use crate::processing::normalize::{normalize_skill_name, SkillSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementStatus {
    Matched,
    Partial,
    Missing,
}

/// A requirement the candidate holds, fully or weakly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementMatch {
    pub name: String,
    pub status: RequirementStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFit {
    /// Share of requirements fully matched, 0-100
    pub match_score: u8,
    pub matched: Vec<RequirementMatch>,
    pub partial: Vec<RequirementMatch>,
    /// Ranked gap records
    pub missing: Vec<GapRecord>,
}

impl RoleFit {
    pub fn total_requirements(&self) -> usize {
        self.matched.len() + self.partial.len() + self.missing.len()
    }
}

impl<'a> GapAnalyzer<'a> {
    /// Classify every requirement. Low-confidence skills count as partial.
    pub fn classify_requirements(&self, user_skills: &[UserSkill], requirements: &[RoleRequirement]) -> RoleFit {
        let held: SkillSet = user_skills.iter().map(|s| s.name.as_str()).collect();
        let mut confidence_by_key: HashMap<String, Option<Confidence>> = HashMap::new();
        for skill in user_skills {
            confidence_by_key
                .entry(normalize_skill_name(&skill.name))
                .or_insert(skill.confidence);
        }

        let mut matched = Vec::new();
        let mut partial = Vec::new();
        for requirement in requirements {
            let Some(confidence) = confidence_by_key.get(&normalize_skill_name(&requirement.name)) else {
                continue;
            };
            let status = match confidence {
                Some(Confidence::Low) => RequirementStatus::Partial,
                _ => RequirementStatus::Matched,
            };
            let entry = RequirementMatch {
                name: requirement.name.clone(),
                status,
                confidence: *confidence,
                reason: requirement.reason.clone(),
            };
            match status {
                RequirementStatus::Partial => partial.push(entry),
                _ => matched.push(entry),
            }
        }

        let missing = self.analyze_gap_with(&held, requirements);
        RoleFit {
            match_score: match_score(matched.len(), requirements.len()),
            matched,
            partial,
            missing,
        }
    }
}

/// Floor of matched / total as a percentage; zero when nothing is required
pub fn match_score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (matched * 100 / total).min(100) as u8
}
