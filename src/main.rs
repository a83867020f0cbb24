//! skill-gap: skill confidence scoring and role gap analysis

use clap::Parser;
use log::{error, info};
use skill_gap_analyzer::cli::{self, CatalogAction, Cli, Commands, ConfigAction, ReportArgs};
use skill_gap_analyzer::config::{Config, OutputFormat};
use skill_gap_analyzer::error::{Result, SkillGapError};
use skill_gap_analyzer::input::manager::InputManager;
use skill_gap_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use skill_gap_analyzer::output::report::{user_skills_from_analysis, ComprehensiveReport, GapReport, ReportMetadata};
use skill_gap_analyzer::processing::catalog::SkillCatalog;
use skill_gap_analyzer::processing::gap_analyzer::GapAnalyzer;
use skill_gap_analyzer::processing::resume_analyzer::ResumeAnalyzer;
use skill_gap_analyzer::processing::roles::RoleDirectory;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze { profile, report } => {
            let catalog = SkillCatalog::load_or_builtin(config.catalog.skills_path.as_deref())?;
            let mut input_manager = InputManager::new();
            let parsed = input_manager.load_profile(&profile).await?;

            let analysis = ResumeAnalyzer::new(config.scoring.clone()).analyze(&parsed);
            info!(
                "{} confirmed, {} partial skills",
                analysis.skill_profile.confirmed_skills.len(),
                analysis.skill_profile.partial_skills.len()
            );

            let metadata = ReportMetadata::new(Some(profile.to_string_lossy().to_string()), catalog.len());
            let full_report = ComprehensiveReport::new(metadata).with_analysis(analysis);
            emit_report(&full_report, &report, &config)?;
        }

        Commands::Gap {
            role,
            requirements,
            profile,
            skills,
            skills_file,
            report,
        } => {
            let catalog = SkillCatalog::load_or_builtin(config.catalog.skills_path.as_deref())?;
            let mut input_manager = InputManager::new();

            let target = match (&role, &requirements) {
                (_, Some(path)) => input_manager.load_requirements(path).await?,
                (Some(name), None) => {
                    let directory = RoleDirectory::load_or_builtin(config.catalog.roles_path.as_deref())?;
                    directory.require(name)?.clone()
                }
                (None, None) => {
                    return Err(SkillGapError::InvalidInput(
                        "Either --role or --requirements is required".to_string(),
                    ))
                }
            };

            let mut analysis = None;
            let user_skills = if let Some(path) = &profile {
                let parsed = input_manager.load_profile(path).await?;
                let scored = ResumeAnalyzer::new(config.scoring.clone()).analyze(&parsed);
                let held = user_skills_from_analysis(&scored);
                analysis = Some(scored);
                held
            } else if let Some(list) = &skills {
                cli::parse_skill_list(list)?
            } else if let Some(path) = &skills_file {
                input_manager.load_user_skills(path).await?
            } else {
                Vec::new()
            };

            info!("Comparing {} current skills with '{}'", user_skills.len(), target.name);
            let analyzer = GapAnalyzer::with_policy(&catalog, config.gap.clone());
            let gap = GapReport::build(&analyzer, &target, &user_skills);

            let metadata = ReportMetadata::new(
                profile.as_ref().map(|p| p.to_string_lossy().to_string()),
                catalog.len(),
            );
            let mut full_report = ComprehensiveReport::new(metadata).with_gap(gap);
            if let Some(analysis) = analysis {
                full_report = full_report.with_analysis(analysis);
            }
            emit_report(&full_report, &report, &config)?;
        }

        Commands::Roles => {
            let directory = RoleDirectory::load_or_builtin(config.catalog.roles_path.as_deref())?;
            println!("🎯 Target Roles\n");
            for role in directory.roles() {
                println!("  • {} ({} requirements)", role.name, role.requirements.len());
                let names: Vec<&str> = role.requirements.iter().map(|r| r.name.as_str()).collect();
                println!("    {}", names.join(", "));
            }
        }

        Commands::Catalog { action } => {
            let catalog = SkillCatalog::load_or_builtin(config.catalog.skills_path.as_deref())?;
            match action {
                CatalogAction::List => {
                    println!("📚 Skill Catalog ({} skills)\n", catalog.len());
                    for skill in catalog.skills() {
                        if skill.prerequisites.is_empty() {
                            println!("  • {} [{}]", skill.name, skill.difficulty);
                        } else {
                            println!(
                                "  • {} [{}] requires {}",
                                skill.name,
                                skill.difficulty,
                                skill.prerequisites.join(", ")
                            );
                        }
                    }
                }

                CatalogAction::Show { name } => match catalog.lookup(&name) {
                    Some(skill) => {
                        println!("Name: {}", skill.name);
                        println!("Difficulty: {}", skill.difficulty);
                        if skill.prerequisites.is_empty() {
                            println!("Prerequisites: none");
                        } else {
                            println!("Prerequisites: {}", skill.prerequisites.join(", "));
                        }
                    }
                    None => {
                        let suggestions = catalog.suggest(&name, 3);
                        if !suggestions.is_empty() {
                            println!("💡 Did you mean: {}?", suggestions.join(", "));
                        }
                        return Err(SkillGapError::UnknownSkill(name));
                    }
                },
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Confidence Scoring:");
                println!("  Work experience: +{}", config.scoring.work_experience_weight);
                println!(
                    "  Sustained use (> {} years): +{}",
                    config.scoring.sustained_use_min_years, config.scoring.sustained_use_bonus
                );
                println!("  Project: +{}", config.scoring.project_weight);
                println!("  Claim baseline: +{}", config.scoring.claim_baseline);
                println!("  Confirmed above: {}", config.scoring.confirmed_threshold);
                println!("\nGap Criticality:");
                println!("  Base: {}", config.gap.base_score);
                println!("  Reason contains '{}': +{}", config.gap.critical_marker, config.gap.critical_bonus);
                println!("  Unmet prerequisites: +{}", config.gap.blocker_bonus);
                println!("\nOutput Format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Render a report in the requested format, print it and optionally save it
fn emit_report(report: &ComprehensiveReport, args: &ReportArgs, config: &Config) -> Result<()> {
    let format = match &args.output {
        Some(output) => cli::parse_output_format(output).map_err(SkillGapError::InvalidInput)?,
        None => config.output.format,
    };
    let detailed = args.detailed || config.output.detailed;

    let generator = ReportGenerator::with_options(config.output.color_output, detailed, true, true);
    let rendered = generator.generate_report(report, &format)?;
    println!("{}", rendered);

    if let Some(path) = &args.save {
        // Saved console output is always plain text
        let content = if format == OutputFormat::Console {
            ReportGenerator::with_options(false, detailed, true, true).generate_report(report, &format)?
        } else {
            rendered
        };
        let target = if path.is_dir() {
            let base = report.metadata.profile_file.as_deref().unwrap_or("report");
            path.join(suggest_filename(&format, base, true))
        } else {
            path.clone()
        };
        save_report_to_file(&content, &target)?;
        println!("💾 Report saved to {}", target.display());
    }

    Ok(())
}
