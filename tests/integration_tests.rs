//! Integration tests for the skill gap analyzer

use skill_gap_analyzer::input::manager::InputManager;
use skill_gap_analyzer::output::report::{user_skills_from_analysis, GapReport};
use skill_gap_analyzer::processing::catalog::{Skill, SkillCatalog};
use skill_gap_analyzer::processing::experience::ExperienceLevel;
use skill_gap_analyzer::processing::gap_analyzer::{Confidence, GapAnalyzer, RoleRequirement, UserSkill};
use skill_gap_analyzer::processing::resume_analyzer::ResumeAnalyzer;
use skill_gap_analyzer::processing::roles::RoleDirectory;
use skill_gap_analyzer::SkillGapError;
use std::path::Path;

#[tokio::test]
async fn test_profile_from_json() {
    let mut manager = InputManager::new();
    let profile = manager.load_profile(Path::new("tests/fixtures/alex_doe.json")).await.unwrap();

    assert_eq!(profile.name, "Alex Doe");
    assert_eq!(profile.claimed_skills().len(), 7);

    let analysis = ResumeAnalyzer::default().analyze(&profile);
    let confirmed: Vec<&str> = analysis
        .skill_profile
        .confirmed_skills
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(confirmed, vec!["React", "JavaScript"]);
    assert_eq!(analysis.metadata.inferred_level, ExperienceLevel::MidLevel);
}

#[tokio::test]
async fn test_profile_from_toml() {
    let mut manager = InputManager::new();
    let profile = manager.load_profile(Path::new("tests/fixtures/sam_lee.toml")).await.unwrap();
    let analysis = ResumeAnalyzer::default().analyze(&profile);

    let scores: Vec<(&str, u8)> = analysis
        .skill_profile
        .all_skills()
        .map(|s| (s.name.as_str(), s.confidence_score))
        .collect();
    // The project lists "python" and "pandas" in lower case, which is not project evidence
    assert_eq!(scores, vec![("Python", 70), ("SQL", 70), ("Pandas", 10), ("Git", 10)]);
    assert_eq!(analysis.metadata.total_experience_years, 1.5);
    assert_eq!(analysis.metadata.inferred_level, ExperienceLevel::Junior);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/alex_doe.json");

    let first = manager.load_profile(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_profile(path).await.unwrap();
    assert_eq!(first.name, second.name);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/alex_doe.json");

    manager.load_profile(path).await.unwrap();
    manager.load_profile(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.load_profile(Path::new("tests/fixtures/unsupported.yaml")).await;
    assert!(matches!(result, Err(SkillGapError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.load_profile(Path::new("tests/fixtures/nonexistent.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_requirements_files() {
    let mut manager = InputManager::new();

    let named = manager
        .load_requirements(Path::new("tests/fixtures/ai_engineer.json"))
        .await
        .unwrap();
    assert_eq!(named.name, "AI Engineer (custom)");
    assert_eq!(named.requirements.len(), 4);
    assert!(named.requirements[2].reason.is_none());

    let unnamed = manager
        .load_requirements(Path::new("tests/fixtures/backend.toml"))
        .await
        .unwrap();
    assert_eq!(unnamed.name, "backend");
    assert_eq!(unnamed.requirements[1].name, "Kubernetes");
}

#[tokio::test]
async fn test_user_skills_file() {
    let mut manager = InputManager::new();
    let skills = manager
        .load_user_skills(Path::new("tests/fixtures/current_skills.json"))
        .await
        .unwrap();
    assert_eq!(skills[0], UserSkill::with_confidence("Python", Confidence::High));
    assert_eq!(skills[1].confidence, Some(Confidence::Low));
}

#[tokio::test]
async fn test_gap_against_custom_requirements() {
    let mut manager = InputManager::new();
    let role = manager
        .load_requirements(Path::new("tests/fixtures/ai_engineer.json"))
        .await
        .unwrap();
    let skills = manager
        .load_user_skills(Path::new("tests/fixtures/current_skills.json"))
        .await
        .unwrap();

    let catalog = SkillCatalog::builtin().unwrap();
    let analyzer = GapAnalyzer::new(&catalog);
    let report = GapReport::build(&analyzer, &role, &skills);

    // Data Analysis is held, so Vector Databases is not blocked
    let names: Vec<(&str, u32)> = report
        .fit
        .missing
        .iter()
        .map(|g| (g.name.as_str(), g.criticality_score))
        .collect();
    assert_eq!(
        names,
        vec![("Vector Databases", 80), ("Prompt Engineering", 80), ("LangChain", 50)]
    );

    let prompt = &report.fit.missing[1];
    assert_eq!(prompt.difficulty, "Unknown");
    assert!(prompt.blockers.is_empty());
    assert_eq!(report.fit.missing[2].reason, "Required for this role.");
    assert_eq!(report.fit.match_score, 25);
}

#[test]
fn test_reference_example_with_blocker() {
    let catalog = SkillCatalog::from_entries(vec![Skill {
        name: "Vector Databases".to_string(),
        difficulty: "Medium".to_string(),
        prerequisites: vec!["Data Analysis".to_string()],
    }]);
    let analyzer = GapAnalyzer::new(&catalog);
    let requirement = [RoleRequirement::new("Vector Databases", "Critical for RAG")];

    let blocked = analyzer.analyze_gap(&[UserSkill::new("Python")], &requirement);
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].blockers, vec!["Data Analysis"]);
    assert_eq!(blocked[0].criticality_score, 100);

    let unblocked = analyzer.analyze_gap(
        &[UserSkill::new("Python"), UserSkill::new("Data Analysis")],
        &requirement,
    );
    assert!(unblocked[0].blockers.is_empty());
    assert_eq!(unblocked[0].criticality_score, 80);
}

#[tokio::test]
async fn test_profile_to_builtin_role() {
    let mut manager = InputManager::new();
    let profile = manager.load_profile(Path::new("tests/fixtures/sam_lee.toml")).await.unwrap();
    let analysis = ResumeAnalyzer::default().analyze(&profile);
    let skills = user_skills_from_analysis(&analysis);

    let directory = RoleDirectory::builtin().unwrap();
    let role = directory.require("data scientist").unwrap();
    let catalog = SkillCatalog::builtin().unwrap();
    let report = GapReport::build(&GapAnalyzer::new(&catalog), role, &skills);

    let matched: Vec<&str> = report.fit.matched.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(matched, vec!["Python", "SQL"]);
    assert!(report.fit.missing.iter().all(|g| g.name != "Python" && g.name != "SQL"));
    assert!(report
        .fit
        .missing
        .windows(2)
        .all(|w| w[0].criticality_score >= w[1].criticality_score));

    // Prerequisites are scheduled before the skills they unblock
    let position = |skill: &str| report.roadmap.iter().position(|s| s.skill.as_deref() == Some(skill));
    assert!(position("Statistics").unwrap() < position("Machine Learning").unwrap());
    assert!(position("Machine Learning").unwrap() < position("Deep Learning").unwrap());
}
