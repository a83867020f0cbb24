//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::gap_analyzer::GapRecord;
use crate::processing::resume_analyzer::{ResumeAnalysis, ScoredSkill};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting comprehensive reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ComprehensiveReport) -> Result<String>;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("STRONG", Color::Green),
            66..=89 => ("SOLID", Color::BrightGreen),
            40..=65 => ("DEVELOPING", Color::Yellow),
            _ => ("EARLY", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn criticality_color(score: u32) -> Color {
        if score >= 90 {
            Color::Red
        } else if score >= 70 {
            Color::Yellow
        } else {
            Color::Blue
        }
    }

    fn format_skill_line(&self, skill: &ScoredSkill, color: Color) -> String {
        let mut line = format!(
            "  • {} {}",
            self.colorize(&skill.name, color),
            self.format_score_badge(skill.confidence_score)
        );
        line.push_str(&format!(" {}%", skill.confidence_score));
        if self.detailed {
            line.push_str(&format!(" - {}", skill.evidence));
        }
        line.push('\n');
        line
    }

    fn format_analysis(&self, analysis: &ResumeAnalysis, output: &mut String) {
        let meta = &analysis.metadata;
        output.push_str(&self.format_header("Candidate", 2));
        output.push_str(&format!("Name: {}\n", self.colorize(&meta.candidate_name, Color::Cyan)));
        output.push_str(&format!(
            "Level: {} ({:.1} years of experience)\n",
            meta.inferred_level, meta.total_experience_years
        ));
        output.push_str(&format!("Analyzed: {}\n", analysis.analysis_timestamp.to_rfc3339()));

        let profile = &analysis.skill_profile;
        output.push_str(&self.format_header(
            &format!("✅ Confirmed Skills ({})", profile.confirmed_skills.len()),
            3,
        ));
        if profile.confirmed_skills.is_empty() {
            output.push_str("  (none)\n");
        }
        for skill in &profile.confirmed_skills {
            output.push_str(&self.format_skill_line(skill, Color::Green));
        }

        output.push_str(&self.format_header(
            &format!("⚠️  Partial / Weak Skills ({})", profile.partial_skills.len()),
            3,
        ));
        if profile.partial_skills.is_empty() {
            output.push_str("  (none)\n");
        }
        for skill in &profile.partial_skills {
            output.push_str(&self.format_skill_line(skill, Color::Yellow));
        }
    }

    fn format_gap_line(&self, index: usize, gap: &GapRecord) -> String {
        let mut line = format!(
            "  {}. {} (criticality {}, difficulty {})\n",
            index,
            self.colorize(&gap.name, Self::criticality_color(gap.criticality_score)),
            gap.criticality_score,
            gap.difficulty
        );
        line.push_str(&format!("     {}\n", gap.reason));
        if gap.is_blocked() {
            line.push_str(&format!(
                "     {} {}\n",
                self.colorize("Blocked by:", Color::Red),
                gap.blockers.join(", ")
            ));
        }
        line
    }

    fn format_gap(&self, gap: &GapReport, output: &mut String) {
        let fit = &gap.fit;
        output.push_str(&self.format_header(&format!("🎯 Target Role: {}", gap.role), 2));
        output.push_str(&format!(
            "Match Score: {}% {} ({} of {} requirements met)\n",
            fit.match_score,
            self.format_score_badge(fit.match_score),
            fit.matched.len(),
            fit.total_requirements()
        ));

        if !fit.matched.is_empty() {
            output.push_str(&self.format_header("Matched", 3));
            for matched in &fit.matched {
                output.push_str(&format!("  • {}\n", self.colorize(&matched.name, Color::Green)));
            }
        }

        if !fit.partial.is_empty() {
            output.push_str(&self.format_header("Partial", 3));
            for partial in &fit.partial {
                output.push_str(&format!("  • {}\n", self.colorize(&partial.name, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("Missing (by criticality)", 3));
        if fit.missing.is_empty() {
            output.push_str("  (none)\n");
        }
        for (i, record) in fit.missing.iter().enumerate() {
            output.push_str(&self.format_gap_line(i + 1, record));
        }

        output.push_str(&self.format_header("🗺️  Learning Roadmap", 2));
        for step in &gap.roadmap {
            let marker = if step.prerequisite { " [prerequisite]" } else { "" };
            output.push_str(&format!(
                "  {}. {} - {} ({}){}\n",
                step.id,
                self.colorize(&step.title, Color::Cyan),
                step.timeline,
                step.difficulty,
                marker
            ));
            if self.detailed {
                output.push_str(&format!("     {}\n", step.reason));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ComprehensiveReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 SKILL GAP ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Catalog: {} skills\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.catalog_skills
        ));

        if let Some(analysis) = &report.analysis {
            self.format_analysis(analysis, &mut output);
        }
        if let Some(gap) = &report.gap {
            self.format_gap(gap, &mut output);
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ComprehensiveReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn skills_table(skills: &[ScoredSkill]) -> String {
        if skills.is_empty() {
            return "_None._\n\n".to_string();
        }
        let mut table = String::from("| Skill | Confidence | Evidence |\n|-------|------------|----------|\n");
        for skill in skills {
            table.push_str(&format!(
                "| {} | {}% | {} |\n",
                skill.name, skill.confidence_score, skill.evidence
            ));
        }
        table.push('\n');
        table
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ComprehensiveReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Skill Gap Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Version:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.analyzer_version
            ));
            if let Some(profile_file) = &report.metadata.profile_file {
                let file_name = Path::new(profile_file)
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| profile_file.clone());
                output.push_str(&format!("**Profile:** `{}`\n\n", file_name));
            }
        }

        if let Some(analysis) = &report.analysis {
            let meta = &analysis.metadata;
            output.push_str("## Candidate\n\n");
            output.push_str(&format!("- **Name:** {}\n", meta.candidate_name));
            output.push_str(&format!("- **Level:** {}\n", meta.inferred_level));
            output.push_str(&format!("- **Experience:** {:.1} years\n\n", meta.total_experience_years));

            output.push_str("### Confirmed Skills\n\n");
            output.push_str(&Self::skills_table(&analysis.skill_profile.confirmed_skills));
            output.push_str("### Partial / Weak Skills\n\n");
            output.push_str(&Self::skills_table(&analysis.skill_profile.partial_skills));
        }

        if let Some(gap) = &report.gap {
            let fit = &gap.fit;
            output.push_str(&format!("## Target Role: {}\n\n", gap.role));
            output.push_str(&format!("**Match Score:** {}%\n\n", fit.match_score));

            if !fit.matched.is_empty() {
                let names: Vec<&str> = fit.matched.iter().map(|m| m.name.as_str()).collect();
                output.push_str(&format!("**Matched:** `{}`\n\n", names.join("`, `")));
            }
            if !fit.partial.is_empty() {
                let names: Vec<&str> = fit.partial.iter().map(|m| m.name.as_str()).collect();
                output.push_str(&format!("**Partial:** `{}`\n\n", names.join("`, `")));
            }

            output.push_str("### Missing Skills\n\n");
            if fit.missing.is_empty() {
                output.push_str("_None._\n\n");
            } else {
                output.push_str("| Skill | Criticality | Difficulty | Blockers | Reason |\n");
                output.push_str("|-------|-------------|------------|----------|--------|\n");
                for record in &fit.missing {
                    let blockers = if record.blockers.is_empty() {
                        "-".to_string()
                    } else {
                        record.blockers.join(", ")
                    };
                    output.push_str(&format!(
                        "| {} | {} | {} | {} | {} |\n",
                        record.name, record.criticality_score, record.difficulty, blockers, record.reason
                    ));
                }
                output.push('\n');
            }

            output.push_str("### Roadmap\n\n");
            for step in &gap.roadmap {
                output.push_str(&format!(
                    "{}. **{}** ({}, {}) - {}\n",
                    step.id, step.title, step.timeline, step.difficulty, step.reason
                ));
            }
            output.push('\n');
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ComprehensiveReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, base: &str, timestamp: bool) -> String {
    let base_name = Path::new(base)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_skills{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_skills{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_skills{}.md", base_name, timestamp_suffix),
    }
}
