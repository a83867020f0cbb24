//! Evidence-weighted confidence scoring for claimed skills

use crate::config::ScoringConfig;
use crate::processing::normalize::mentions_skill;
use crate::processing::profile::{ExperienceEntry, Project};
use serde::{Deserialize, Serialize};

/// Which kinds of evidence back a claimed skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEvidence {
    /// Listed in a role's skills or mentioned in its description
    pub work_experience: bool,
    /// At least one of those roles lasted long enough to count as sustained use
    pub sustained_use: bool,
    pub project: bool,
}

/// Additive, capped confidence heuristic
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    weights: ScoringConfig,
}

impl ConfidenceScorer {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    /// Collect the evidence for one skill
    pub fn gather_evidence(
        &self,
        skill: &str,
        experience: &[ExperienceEntry],
        projects: &[Project],
    ) -> SkillEvidence {
        // Evidence lists are matched exactly as written; only descriptions are searched loosely
        let uses_skill = |names: &Vec<String>| names.iter().any(|n| n == skill);

        let mut evidence = SkillEvidence::default();
        for entry in experience {
            if uses_skill(&entry.skills_used) || mentions_skill(&entry.description, skill) {
                evidence.work_experience = true;
                if entry.duration_years > self.weights.sustained_use_min_years {
                    evidence.sustained_use = true;
                }
            }
        }
        evidence.project = projects.iter().any(|p| uses_skill(&p.tech_stack));
        evidence
    }

    /// Turn evidence into a score. The claim baseline is always granted.
    pub fn score_evidence(&self, evidence: &SkillEvidence) -> u8 {
        let w = &self.weights;
        let mut score = w.claim_baseline;
        if evidence.work_experience {
            score += w.work_experience_weight;
            if evidence.sustained_use {
                score += w.sustained_use_bonus;
            }
        }
        if evidence.project {
            score += w.project_weight;
        }
        score.min(w.max_score).min(u8::MAX as u32) as u8
    }

    /// Confidence in [0, max_score] for one claimed skill
    pub fn score(&self, skill: &str, experience: &[ExperienceEntry], projects: &[Project]) -> u8 {
        let evidence = self.gather_evidence(skill, experience, projects);
        self.score_evidence(&evidence)
    }

    pub fn is_confirmed(&self, score: u8) -> bool {
        u32::from(score) > self.weights.confirmed_threshold
    }
}

/// Score with the default weights
pub fn score(skill: &str, experience: &[ExperienceEntry], projects: &[Project]) -> u8 {
    ConfidenceScorer::default().score(skill, experience, projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(years: f64, description: &str, skills: &[&str]) -> ExperienceEntry {
        ExperienceEntry {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            duration_years: years,
            description: description.to_string(),
            skills_used: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn project(stack: &[&str]) -> Project {
        Project {
            name: "Side project".to_string(),
            tech_stack: stack.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_claim_only_scores_baseline() {
        let experience = vec![role(3.0, "Wrote Go services", &["Go"])];
        let projects = vec![project(&["Go"])];
        assert_eq!(score("Haskell", &experience, &projects), 10);
        assert_eq!(score("Haskell", &[], &[]), 10);
    }

    #[test]
    fn test_short_work_experience_scores_70() {
        let experience = vec![role(1.0, "Maintained the billing service", &["Java"])];
        assert_eq!(score("Java", &experience, &[]), 70);
    }

    #[test]
    fn test_sustained_work_experience_scores_90() {
        let experience = vec![role(1.5, "", &["Java"])];
        assert_eq!(score("Java", &experience, &[]), 90);
    }

    #[test]
    fn test_project_only_scores_40() {
        assert_eq!(score("CSS", &[], &[project(&["React", "CSS"])]), 40);
    }

    #[test]
    fn test_full_evidence_is_capped() {
        let experience = vec![role(2.5, "Built responsive UI", &["React"])];
        let projects = vec![project(&["React"])];
        assert_eq!(score("React", &experience, &projects), 100);
    }

    #[test]
    fn test_description_match_is_case_insensitive_substring() {
        let experience = vec![role(0.5, "Built responsive UI with React and Redux.", &[])];
        assert_eq!(score("redux", &experience, &[]), 70);
    }

    #[test]
    fn test_skills_used_match_is_exact() {
        let experience = vec![role(0.5, "Frontend work", &["react"])];
        assert_eq!(score("React", &experience, &[]), 10);
        assert_eq!(score("react", &experience, &[]), 70);
    }

    #[test]
    fn test_tech_stack_match_is_exact() {
        assert_eq!(score("CSS", &[], &[project(&["css"])]), 10);
        assert_eq!(score("CSS", &[], &[project(&["CSS"])]), 40);
    }

    #[test]
    fn test_sustained_bonus_needs_a_matching_role() {
        let experience = vec![
            role(0.5, "Python scripts", &[]),
            role(4.0, "Team lead", &["Management"]),
        ];
        assert_eq!(score("Python", &experience, &[]), 70);
    }

    #[test]
    fn test_evidence_breakdown() {
        let scorer = ConfidenceScorer::default();
        let experience = vec![role(3.0, "", &["Docker"])];
        let evidence = scorer.gather_evidence("Docker", &experience, &[]);
        assert_eq!(
            evidence,
            SkillEvidence { work_experience: true, sustained_use: true, project: false }
        );
    }

    #[test]
    fn test_confirmed_threshold_is_strict() {
        let scorer = ConfidenceScorer::default();
        assert!(!scorer.is_confirmed(65));
        assert!(scorer.is_confirmed(66));
    }

    #[test]
    fn test_custom_weights() {
        let scorer = ConfidenceScorer::new(ScoringConfig {
            claim_baseline: 0,
            project_weight: 50,
            ..Default::default()
        });
        assert_eq!(scorer.score("Rust", &[], &[project(&["Rust"])]), 50);
    }
}
