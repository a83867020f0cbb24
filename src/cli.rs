//! CLI interface for the skill gap analyzer

use crate::processing::gap_analyzer::{Confidence, UserSkill};
use anyhow::{anyhow, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-gap")]
#[command(about = "Skill confidence scoring and role gap analysis")]
#[command(long_about = "Score claimed skills from a parsed resume against work and project evidence, then rank the skills a target role still needs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the claimed skills of a parsed resume
    Analyze {
        /// Parsed profile (JSON or TOML)
        #[arg(short, long)]
        profile: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Compare current skills with a target role
    Gap {
        /// Built-in role name (see `roles`)
        #[arg(short, long, conflicts_with = "requirements", required_unless_present = "requirements")]
        role: Option<String>,

        /// Requirements file (JSON or TOML) instead of a built-in role
        #[arg(long)]
        requirements: Option<PathBuf>,

        /// Parsed profile; its scored skills become the current skills
        #[arg(short, long, conflicts_with_all = ["skills", "skills_file"])]
        profile: Option<PathBuf>,

        /// Comma-separated current skills, optionally `name:confidence`
        #[arg(short, long)]
        skills: Option<String>,

        /// Current skills file (JSON or TOML)
        #[arg(long, conflicts_with = "skills")]
        skills_file: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// List built-in target roles
    Roles,

    /// Skill catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Options shared by report-producing commands
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Include evidence and roadmap reasons
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalog skills
    List,

    /// Show one skill and its prerequisites
    Show {
        /// Skill name (case-insensitive)
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Parse `Python:high, SQL, Docker:low` into current skills
pub fn parse_skill_list(input: &str) -> anyhow::Result<Vec<UserSkill>> {
    let mut skills = Vec::new();
    for item in input.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let skill = match item.rsplit_once(':') {
            Some((name, level)) => {
                let name = name.trim();
                if name.is_empty() {
                    bail!("Missing skill name in '{}'", item);
                }
                UserSkill::with_confidence(name, parse_confidence(level.trim())?)
            }
            None => UserSkill::new(item),
        };
        skills.push(skill);
    }
    Ok(skills)
}

fn parse_confidence(level: &str) -> anyhow::Result<Confidence> {
    match level.to_lowercase().as_str() {
        "high" => Ok(Confidence::High),
        "medium" => Ok(Confidence::Medium),
        "low" => Ok(Confidence::Low),
        other => Err(anyhow!("Invalid confidence '{}'. Supported: high, medium, low", other)),
    }
}
