//! Seniority band inferred from total years of experience

use serde::{Deserialize, Serialize};
use std::fmt;

const MID_LEVEL_MIN_YEARS: f64 = 2.0;
const SENIOR_MIN_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-Level",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map summed years to a band: under 2 is junior, under 5 mid-level
pub fn infer_level(total_years: f64) -> ExperienceLevel {
    if total_years < MID_LEVEL_MIN_YEARS {
        ExperienceLevel::Junior
    } else if total_years < SENIOR_MIN_YEARS {
        ExperienceLevel::MidLevel
    } else {
        ExperienceLevel::Senior
    }
}
