// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Integration tests for the heuristic analysis pipeline.

use minhwa::prelude::*;

fn component(kind: ComponentType, content: &str) -> PromptComponent {
    PromptComponent::new(kind, content)
}

#[test]
fn test_valid_when_subject_present_and_no_high_warning() {
    let components = [
        component(ComponentType::Subject, "a red fox in fresh snow"),
        component(ComponentType::Style, "watercolor wash"),
        component(ComponentType::Mood, "serene"),
    ];
    let result = analyze_prompt(&components, &[], &[]);
    assert!(result.is_valid);
    assert!(result.score <= 100);
}

#[test]
fn test_empty_prompt_invalid_but_scored() {
    let result = analyze_prompt(&[], &[], &[]);
    assert!(!result.is_valid);
    assert!(result.score <= 100);
}

#[test]
fn test_overlong_component_high_severity_invalidates() {
    let content = "x".repeat(2000);
    let components = [component(ComponentType::Subject, &content)];
    let result = analyze_prompt(&components, &[], &[]);
    let length = result.warnings_of(WarningKind::Length).next().unwrap();
    assert_eq!(length.severity, Severity::High);
    assert!(!result.is_valid);
}

#[test]
fn test_contradiction_detected_across_components() {
    let components = [
        component(ComponentType::Subject, "a Realistic portrait"),
        component(ComponentType::Style, "cartoon outlines"),
    ];
    let result = analyze_prompt(&components, &[], &[]);
    let warning = result
        .warnings_of(WarningKind::Contradiction)
        .next()
        .expect("contradiction warning");
    assert!(warning.message.contains("realistic"));
    assert!(warning.message.contains("cartoon"));
}

#[test]
fn test_duplicate_case_insensitive_single_warning() {
    let components = [
        component(ComponentType::Subject, "Beautiful Woman"),
        component(ComponentType::Detail, "beautiful woman"),
    ];
    let result = analyze_prompt(&components, &[], &[]);
    assert_eq!(result.warnings_of(WarningKind::Duplicate).count(), 1);
}

#[test]
fn test_validation_through_engine_emits_and_reports() {
    let mut engine = PromptEngine::new(EngineConfig::default());
    engine
        .add_component(component(ComponentType::Subject, "a red fox"))
        .unwrap();
    let result = engine.validate();
    assert!(result.is_valid);
    assert!(result.analysis.estimated_tokens > 0);
}

#[test]
fn test_engine_max_prompt_length_ceiling() {
    let config = EngineConfig::default().with_max_prompt_length(20);
    let mut engine = PromptEngine::new(config);
    engine
        .add_component(component(
            ComponentType::Subject,
            "a subject comfortably longer than twenty characters",
        ))
        .unwrap();
    let result = engine.validate();
    assert!(!result.is_valid);
    assert!(result
        .warnings_of(WarningKind::Length)
        .any(|w| w.severity == Severity::High));
}

#[test]
fn test_optimizer_full_pass() {
    let components = vec![
        component(ComponentType::Detail, "ornate"),
        component(ComponentType::Subject, "a fox").with_weight(2.4),
        component(ComponentType::Subject, "A FOX"),
    ];
    let optimized = optimize_components(&components);
    // duplicate dropped, sorted subject-first, weight clamped
    assert_eq!(optimized.len(), 2);
    assert_eq!(optimized[0].kind, ComponentType::Subject);
    assert_eq!(optimized[0].weight, 1.5);
    assert_eq!(optimized[1].kind, ComponentType::Detail);
}

#[test]
fn test_syntax_checks_by_component() {
    let flagged = component(ComponentType::Subject, "(((( too much ))))");
    let warnings = validate_component_syntax(&flagged);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].component_id, Some(flagged.id));

    let clean = component(ComponentType::Subject, "(just enough)");
    assert!(validate_component_syntax(&clean).is_empty());
}

#[test]
fn test_contextual_suggestions_respect_threshold() {
    let engine = PromptEngine::new(EngineConfig::default().with_suggestion_threshold(0.7));
    let groups = engine.contextual_suggestions("a misty forest", None);
    // technical group (0.6) filtered out
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.confidence >= 0.7));
}

#[test]
fn test_analysis_metrics_shape() {
    let components = [
        component(ComponentType::Subject, "a lighthouse"),
        component(ComponentType::Camera, "85mm lens"),
        component(ComponentType::Lighting, "golden hour"),
    ];
    let result = analyze_prompt(&components, &[], &[]);
    let analysis = &result.analysis;
    assert!(analysis.complexity > 0.0 && analysis.complexity <= 100.0);
    assert!(analysis.technical >= 70.0);
    assert!(analysis.dominant_categories.len() <= 3);
    assert!(analysis.missing_components.len() <= 5);
    assert!(!analysis
        .missing_components
        .contains(&ComponentType::Subject));
}
