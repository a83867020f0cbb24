//! Ordered learning plan derived from ranked gaps

use crate::processing::catalog::SkillCatalog;
use crate::processing::gap_analyzer::GapRecord;
use crate::processing::normalize::{normalize_skill_name, SkillSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub id: usize,
    pub skill: Option<String>,
    pub title: String,
    pub timeline: String,
    pub difficulty: String,
    pub reason: String,
    /// Scheduled to unblock another missing skill
    pub prerequisite: bool,
}

pub struct RoadmapPlanner<'a> {
    catalog: &'a SkillCatalog,
}

impl<'a> RoadmapPlanner<'a> {
    pub fn new(catalog: &'a SkillCatalog) -> Self {
        Self { catalog }
    }

    /// Blockers of each gap come right before it, and a blocker that is itself
    /// a gap brings its own blockers along first. Every skill appears once.
    pub fn plan(&self, gaps: &[GapRecord], role: &str) -> Vec<RoadmapStep> {
        let by_key: HashMap<String, &GapRecord> = gaps
            .iter()
            .map(|gap| (normalize_skill_name(&gap.name), gap))
            .collect();
        let mut started = SkillSet::new();
        let mut steps = Vec::new();

        for gap in gaps {
            self.schedule(&gap.name, None, &by_key, &mut started, &mut steps);
        }

        if steps.is_empty() {
            steps.push(RoadmapStep {
                id: 1,
                skill: None,
                title: "Advanced Projects".to_string(),
                timeline: "Week 1-4".to_string(),
                difficulty: "Hard".to_string(),
                reason: format!("You have the core skills for {}! Build a portfolio piece.", role),
                prerequisite: false,
            });
        }
        steps
    }

    fn schedule(
        &self,
        skill: &str,
        unblocks: Option<&str>,
        by_key: &HashMap<String, &GapRecord>,
        started: &mut SkillSet,
        steps: &mut Vec<RoadmapStep>,
    ) {
        // Also stops prerequisite cycles in user-supplied catalogs
        if !started.insert(skill) {
            return;
        }

        let gap = by_key.get(&normalize_skill_name(skill)).copied();
        if let Some(gap) = gap {
            for blocker in &gap.blockers {
                self.schedule(blocker, Some(&gap.name), by_key, started, steps);
            }
        }

        let difficulty = match gap {
            Some(gap) => gap.difficulty.clone(),
            None => self.catalog.difficulty_of(skill),
        };
        let (reason, prerequisite) = match (unblocks, gap) {
            (Some(target), _) => (format!("Prerequisite for {}.", target), true),
            (None, Some(gap)) => (gap.reason.clone(), false),
            (None, None) => (String::new(), false),
        };
        steps.push(self.step(steps.len() + 1, skill, difficulty, reason, prerequisite));
    }

    fn step(&self, id: usize, skill: &str, difficulty: String, reason: String, prerequisite: bool) -> RoadmapStep {
        RoadmapStep {
            id,
            skill: Some(skill.to_string()),
            title: format!("Learn {}", skill),
            timeline: format!("Week {}-{}", id, id + 1),
            difficulty,
            reason,
            prerequisite,
        }
    }
}
