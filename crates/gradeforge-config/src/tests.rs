//! Tests for curriculum configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = CurriculumConfig::new();
    assert_eq!(config.thesis.credits, 30);
    assert_eq!(config.interdisciplinary_project.total_credits(), 16);
    assert_eq!(config.support_electives.credits, 6);
    assert_eq!(config.practical.credits, 10);
    assert_eq!(config.major.credits, 18);
    assert_eq!(config.minors, MinorConfig { credits: 8, count: 2 });
    assert_eq!(config.free_choice.credits, 19);
    assert_eq!(config.theory.credits, 10);
    assert_eq!(config.ungraded_score(), GradeScore::UNGRADED);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        ungraded_average = 4.0

        [interdisciplinary_project]
        project_credits = 10

        [minors]
        credits = 10

        [theory]
        credits = 12
    "#;

    let config = CurriculumConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.ungraded_average, 4.0);
    assert_eq!(config.interdisciplinary_project.project_credits, 10);
    assert_eq!(config.interdisciplinary_project.lecture_credits, 5);
    assert_eq!(config.minors.credits, 10);
    assert_eq!(config.minors.count, 2);
    assert_eq!(config.theory.credits, 12);
    assert_eq!(config.major.credits, 18);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        major:
          credits: 20
        minors:
          count: 3
        free_choice:
          credits: 15
    "#;

    let config = CurriculumConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.major.credits, 20);
    assert_eq!(config.minors.count, 3);
    assert_eq!(config.free_choice.credits, 15);
}

#[test]
fn test_empty_toml_is_default() {
    let config = CurriculumConfig::from_toml_str("").unwrap();
    assert_eq!(config.thesis.credits, 30);
    assert_eq!(config.max_exhaustive_items, 20);
}

#[test]
fn test_rejects_negative_sentinel() {
    let err = CurriculumConfig::from_toml_str("ungraded_average = -1.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_wide_exhaustive_limit() {
    let err = CurriculumConfig::from_toml_str("max_exhaustive_items = 64").unwrap_err();
    assert!(err.to_string().contains("max_exhaustive_items"));
}

#[test]
fn test_missing_file() {
    let err = CurriculumConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = CurriculumConfig::new()
        .with_major_credits(24)
        .with_minor_credits(6)
        .with_minor_count(1)
        .with_free_choice_credits(12)
        .with_theory_credits(0);

    assert_eq!(config.major.credits, 24);
    assert_eq!(config.minors, MinorConfig { credits: 6, count: 1 });
    assert_eq!(config.free_choice.credits, 12);
    assert_eq!(config.theory.credits, 0);
}
