//! Structured candidate records handed over by the resume parser

use crate::processing::normalize::SkillSet;
use serde::{Deserialize, Serialize};

/// Already-extracted resume data for one candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProfile {
    pub name: String,
    #[serde(default)]
    pub skills: SkillLists,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Self-reported skill lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLists {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub duration_years: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills_used: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl ParsedProfile {
    /// Union of the language, framework and tool lists.
    ///
    /// Case variants collapse to the first spelling seen; list order is kept.
    pub fn claimed_skills(&self) -> Vec<String> {
        let mut seen = SkillSet::new();
        self.skills
            .languages
            .iter()
            .chain(&self.skills.frameworks)
            .chain(&self.skills.tools)
            .filter(|skill| seen.insert(skill))
            .cloned()
            .collect()
    }

    /// Sum of all role durations; overlapping roles are counted twice
    pub fn total_experience_years(&self) -> f64 {
        self.experience.iter().map(|e| e.duration_years).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claimed_skills_are_a_set() {
        let profile = ParsedProfile {
            name: "Alex".to_string(),
            skills: SkillLists {
                languages: vec!["Python".to_string(), "SQL".to_string()],
                frameworks: vec!["Django".to_string(), "python".to_string()],
                tools: vec!["SQL".to_string(), "Git".to_string()],
            },
            ..Default::default()
        };

        assert_eq!(profile.claimed_skills(), vec!["Python", "SQL", "Django", "Git"]);
    }

    #[test]
    fn test_total_years_sums_overlaps() {
        let profile = ParsedProfile {
            experience: vec![
                ExperienceEntry { role: "A".into(), duration_years: 2.5, ..Default::default() },
                ExperienceEntry { role: "B".into(), duration_years: 1.5, ..Default::default() },
            ],
            ..Default::default()
        };
        assert_eq!(profile.total_experience_years(), 4.0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "name": "Alex Doe",
            "skills": { "languages": ["JavaScript"], "frameworks": [], "tools": [] },
            "experience": [{
                "role": "Frontend Developer",
                "company": "TechCorp",
                "durationYears": 2.5,
                "description": "Built UI",
                "skillsUsed": ["React"]
            }],
            "projects": [{ "name": "Site", "techStack": ["CSS"] }]
        }"#;
        let profile: ParsedProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.experience[0].duration_years, 2.5);
        assert_eq!(profile.experience[0].skills_used, vec!["React"]);
        assert_eq!(profile.projects[0].tech_stack, vec!["CSS"]);
    }
}
