// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The heuristic analysis pipeline.
//!
//! [`analyze_prompt`] is a pure, total function from a component+modifier
//! snapshot to a [`ValidationResult`]. No input raises; out-of-range
//! numeric fields degrade to well-defined output. Every check is a
//! deterministic keyword, substring, or length heuristic over the fixed
//! tables in [`lexicon`](super::lexicon).
//!
//! # Examples
//!
//! ```
//! use minhwa::analysis::analyze_prompt;
//! use minhwa::component::{ComponentType, PromptComponent};
//!
//! let components = [
//!     PromptComponent::new(ComponentType::Subject, "a red fox in the snow"),
//!     PromptComponent::new(ComponentType::Style, "ukiyo-e woodblock print"),
//! ];
//! let result = analyze_prompt(&components, &[], &[]);
//! assert!(result.is_valid);
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use super::lexicon::{
    ANTONYM_PAIRS, GENERIC_TERMS, MISSING_PRIORITY, PAINTING_TERMS, PHOTOGRAPHY_TERMS,
    QUALITY_TERMS, ROLE_COUNT,
};
use super::report::{
    PromptAnalysis, PromptWarning, Severity, Suggestion, SuggestionKind, ValidationResult,
    WarningKind,
};
use crate::component::{ComponentType, PromptComponent};
use crate::modifier::StyleModifier;

/// Token estimate above which the prompt is considered too long.
const TOKEN_CEILING: usize = 75;
/// Token estimate below which the prompt is considered thin.
const TOKEN_FLOOR: usize = 40;
/// Enabled detail components beyond this count earn a warning.
const DETAIL_CEILING: usize = 5;
/// Example content offered by the add-subject suggestion.
const SUBJECT_EXAMPLE: &str = "a lone lighthouse on a rocky coast";
/// Example content offered by the add-quality suggestion.
const QUALITY_EXAMPLE: &str = "high quality, detailed";

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Estimate the backend token count of `text`.
///
/// Character-count heuristic: punctuation stripped, whitespace collapsed,
/// one token per 4 characters, rounded up. Emphasis wrapping is ignored,
/// so estimates run slightly low for heavily weighted prompts; the
/// assembly algorithm is the authority on emitted text.
pub fn estimate_tokens(text: &str) -> usize {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let cleaned = whitespace_re().replace_all(stripped.trim(), " ");
    if cleaned.is_empty() {
        return 0;
    }
    cleaned.len().div_ceil(4)
}

/// Score and validate a component+modifier snapshot.
///
/// The checks run in a fixed order (length, contradictions, duplicates,
/// quality, structure, style mixing), so warnings and suggestions are
/// deterministically ordered.
pub fn analyze_prompt(
    components: &[PromptComponent],
    negative_components: &[PromptComponent],
    modifiers: &[StyleModifier],
) -> ValidationResult {
    let enabled: Vec<&PromptComponent> = components.iter().filter(|c| c.enabled).collect();
    let enabled_negative: Vec<&PromptComponent> =
        negative_components.iter().filter(|c| c.enabled).collect();

    // Unassembled-trim text: enabled positive content plus modifier
    // additions, no weight formatting.
    let mut pieces: Vec<&str> = enabled.iter().map(|c| c.content.as_str()).collect();
    pieces.extend(
        modifiers
            .iter()
            .map(|m| m.prompt_addition.as_str())
            .filter(|s| !s.trim().is_empty()),
    );
    let text = pieces.join(", ");
    let lower_text = text.to_lowercase();

    let mut warnings: SmallVec<[PromptWarning; 8]> = SmallVec::new();
    let mut suggestions: SmallVec<[Suggestion; 8]> = SmallVec::new();

    // 1. Length / token budget.
    let estimated_tokens = estimate_tokens(&text);
    if estimated_tokens > TOKEN_CEILING {
        warnings.push(PromptWarning::new(
            WarningKind::Length,
            Severity::High,
            format!(
                "prompt is ~{estimated_tokens} tokens, above the ~{TOKEN_CEILING} token budget"
            ),
        ));
        suggestions.push(
            Suggestion::new(
                SuggestionKind::TrimPrompt,
                "trim low-priority components to fit the token budget",
            )
            .with_action("remove trailing detail components"),
        );
    } else if estimated_tokens < TOKEN_FLOOR {
        suggestions.push(Suggestion::new(
            SuggestionKind::AddDetails,
            "prompt is short; more descriptive detail usually improves results",
        ));
    }

    // 2. Contradictions, scanned over all enabled content.
    let combined: String = enabled
        .iter()
        .chain(enabled_negative.iter())
        .map(|c| c.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    for (a, b) in ANTONYM_PAIRS {
        if combined.contains(a) && combined.contains(b) {
            warnings.push(PromptWarning::new(
                WarningKind::Contradiction,
                Severity::Medium,
                format!("prompt contains both '{a}' and '{b}'"),
            ));
            suggestions.push(Suggestion::new(
                SuggestionKind::ResolveContradiction,
                format!("keep either '{a}' or '{b}', not both"),
            ));
        }
    }

    // 3. Duplicates among enabled positive components.
    let mut seen: HashSet<String> = HashSet::new();
    let mut any_duplicate = false;
    for component in &enabled {
        if !seen.insert(component.normalized_content()) {
            any_duplicate = true;
            warnings.push(
                PromptWarning::new(
                    WarningKind::Duplicate,
                    Severity::Low,
                    format!("duplicate content: '{}'", component.content.trim()),
                )
                .for_component(component.id),
            );
        }
    }
    if any_duplicate {
        suggestions.push(Suggestion::new(
            SuggestionKind::RemoveDuplicates,
            "remove duplicated components; repetition wastes tokens",
        ));
    }

    // 4. Quality and genericness.
    if !QUALITY_TERMS.iter().any(|t| lower_text.contains(t)) {
        suggestions.push(
            Suggestion::new(
                SuggestionKind::AddQualityTerms,
                "no quality terms found; backends respond well to explicit quality boosts",
            )
            .with_content(QUALITY_EXAMPLE),
        );
    }
    let generic_hits = GENERIC_TERMS
        .iter()
        .filter(|t| lower_text.contains(*t))
        .count();
    if generic_hits > 2 {
        suggestions.push(Suggestion::new(
            SuggestionKind::BeMoreSpecific,
            "several generic terms found; concrete nouns steer generation better",
        ));
    }

    // 5. Structure.
    let has_enabled_subject = enabled.iter().any(|c| c.kind == ComponentType::Subject);
    if !has_enabled_subject {
        warnings.push(PromptWarning::new(
            WarningKind::Structure,
            Severity::Medium,
            "no enabled subject component",
        ));
        suggestions.push(
            Suggestion::new(
                SuggestionKind::AddSubject,
                "add a subject component describing the main focus",
            )
            .with_content(SUBJECT_EXAMPLE),
        );
    }
    let detail_count = enabled
        .iter()
        .filter(|c| c.kind == ComponentType::Detail)
        .count();
    if detail_count > DETAIL_CEILING {
        warnings.push(PromptWarning::new(
            WarningKind::Structure,
            Severity::Low,
            format!("{detail_count} detail components; diminishing returns past {DETAIL_CEILING}"),
        ));
    }

    // 6. Style mixing.
    let photo_term = PHOTOGRAPHY_TERMS.iter().find(|t| lower_text.contains(*t));
    let paint_term = PAINTING_TERMS.iter().find(|t| lower_text.contains(*t));
    if let (Some(photo), Some(paint)) = (photo_term, paint_term) {
        warnings.push(PromptWarning::new(
            WarningKind::StyleMixing,
            Severity::Medium,
            format!("photography term '{photo}' mixed with painting term '{paint}'"),
        ));
    }

    let has_high = warnings.iter().any(|w| w.severity == Severity::High);
    let is_valid = !enabled.is_empty() && has_enabled_subject && !has_high;

    let score = compute_score(components, &warnings, enabled.len());
    let analysis = compute_analysis(&enabled, &text, estimated_tokens);

    ValidationResult {
        is_valid,
        score,
        warnings,
        suggestions,
        analysis,
    }
}

/// Start at 100 and apply the fixed deductions and the one bonus.
fn compute_score(
    components: &[PromptComponent],
    warnings: &[PromptWarning],
    enabled_count: usize,
) -> u8 {
    let mut score: i32 = 100;
    for warning in warnings {
        score -= match warning.severity {
            Severity::High => 15,
            Severity::Medium => 8,
            Severity::Low => 3,
        };
    }
    if !components.iter().any(|c| c.kind == ComponentType::Subject) {
        score -= 10;
    }
    if !components.iter().any(|c| c.kind == ComponentType::Style) {
        score -= 5;
    }
    if (3..=8).contains(&enabled_count) {
        score += 5;
    }
    score.clamp(0, 100) as u8
}

fn compute_analysis(
    enabled: &[&PromptComponent],
    text: &str,
    estimated_tokens: usize,
) -> PromptAnalysis {
    let count = enabled.len();

    let complexity = (count as f32 / 8.0 * 100.0).min(100.0);

    let style_count = enabled
        .iter()
        .filter(|c| c.kind == ComponentType::Style)
        .count();
    let mut coherence = 85.0_f32;
    if style_count > 3 {
        coherence -= 15.0;
    }
    let coherence = coherence.clamp(0.0, 100.0);

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let specificity = if tokens.is_empty() {
        0.0
    } else {
        let long = tokens.iter().filter(|t| t.chars().count() > 4).count();
        long as f32 / tokens.len() as f32 * 100.0
    };

    let distinct_kinds: HashSet<ComponentType> = enabled.iter().map(|c| c.kind).collect();
    let creativity = (distinct_kinds.len() as f32 / ROLE_COUNT as f32 * 100.0).min(100.0);

    let technical_present = enabled.iter().any(|c| {
        matches!(
            c.kind,
            ComponentType::Camera | ComponentType::Lighting | ComponentType::Composition
        )
    });
    let technical = if technical_present { 90.0 } else { 70.0_f32 }.min(100.0);

    // Frequency per kind in first-seen order; a stable sort keeps that
    // order for ties.
    let mut frequencies: Vec<(ComponentType, usize)> = Vec::new();
    for component in enabled {
        match frequencies.iter_mut().find(|(k, _)| *k == component.kind) {
            Some((_, n)) => *n += 1,
            None => frequencies.push((component.kind, 1)),
        }
    }
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    let dominant_categories = frequencies.iter().take(3).map(|(k, _)| *k).collect();

    let missing_components = MISSING_PRIORITY
        .iter()
        .filter(|kind| !distinct_kinds.contains(kind))
        .take(5)
        .copied()
        .collect();

    PromptAnalysis {
        complexity,
        coherence,
        specificity,
        creativity,
        technical,
        estimated_tokens,
        dominant_categories,
        missing_components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(content: &str) -> PromptComponent {
        PromptComponent::new(ComponentType::Subject, content)
    }

    #[test]
    fn test_estimate_tokens_strips_punctuation() {
        // "a cat, a hat" -> "a cat a hat" (12 chars) -> 3 tokens
        assert_eq!(estimate_tokens("a cat, a hat"), 3);
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens(",,,   !!!"), 0);
    }

    #[test]
    fn test_empty_input_is_invalid_but_scored() {
        let result = analyze_prompt(&[], &[], &[]);
        assert!(!result.is_valid);
        assert!(result.score <= 100);
        // -10 subject, -5 style, no warnings
        assert_eq!(result.score, 85);
        assert_eq!(result.analysis.estimated_tokens, 0);
        assert_eq!(result.analysis.missing_components.len(), 5);
        assert_eq!(
            result.analysis.missing_components[0],
            ComponentType::Subject
        );
    }

    #[test]
    fn test_long_prompt_high_warning() {
        let long = "x".repeat(2000);
        let result = analyze_prompt(&[subject(&long)], &[], &[]);
        let warning = result.warnings_of(WarningKind::Length).next().unwrap();
        assert_eq!(warning.severity, Severity::High);
        assert!(!result.is_valid);
        assert!(result
            .suggestions_of(SuggestionKind::TrimPrompt)
            .next()
            .is_some());
    }

    #[test]
    fn test_short_prompt_suggestion_only() {
        let result = analyze_prompt(&[subject("a cat")], &[], &[]);
        assert!(result.warnings_of(WarningKind::Length).next().is_none());
        assert!(result
            .suggestions_of(SuggestionKind::AddDetails)
            .next()
            .is_some());
        assert!(result.is_valid);
    }

    #[test]
    fn test_contradiction_names_both_terms() {
        let components = [
            subject("realistic portrait"),
            PromptComponent::new(ComponentType::Style, "Cartoon shading"),
        ];
        let result = analyze_prompt(&components, &[], &[]);
        let warning = result
            .warnings_of(WarningKind::Contradiction)
            .next()
            .unwrap();
        assert!(warning.message.contains("realistic"));
        assert!(warning.message.contains("cartoon"));
        assert!(result
            .suggestions_of(SuggestionKind::ResolveContradiction)
            .next()
            .is_some());
    }

    #[test]
    fn test_duplicate_detection_case_insensitive() {
        let components = [subject("Beautiful Woman"), subject("beautiful woman")];
        let result = analyze_prompt(&components, &[], &[]);
        assert_eq!(result.warnings_of(WarningKind::Duplicate).count(), 1);
        assert_eq!(
            result.suggestions_of(SuggestionKind::RemoveDuplicates).count(),
            1
        );
        // the repeat, not the original, is named
        assert_eq!(
            result
                .warnings_of(WarningKind::Duplicate)
                .next()
                .unwrap()
                .component_id,
            Some(components[1].id)
        );
    }

    #[test]
    fn test_disabled_components_ignored() {
        let components = [subject("a cat"), subject("a cat").disabled()];
        let result = analyze_prompt(&components, &[], &[]);
        assert_eq!(result.warnings_of(WarningKind::Duplicate).count(), 0);
    }

    #[test]
    fn test_quality_suggestion_absent_when_present() {
        let components = [subject("a cat, masterpiece, 8k")];
        let result = analyze_prompt(&components, &[], &[]);
        assert!(result
            .suggestions_of(SuggestionKind::AddQualityTerms)
            .next()
            .is_none());
    }

    #[test]
    fn test_generic_terms_suggestion() {
        let components = [subject("an image of a picture of a photo of art")];
        let result = analyze_prompt(&components, &[], &[]);
        assert!(result
            .suggestions_of(SuggestionKind::BeMoreSpecific)
            .next()
            .is_some());
    }

    #[test]
    fn test_missing_subject_structure_warning() {
        let components = [PromptComponent::new(ComponentType::Style, "oil painting")];
        let result = analyze_prompt(&components, &[], &[]);
        assert!(!result.is_valid);
        let warning = result.warnings_of(WarningKind::Structure).next().unwrap();
        assert_eq!(warning.severity, Severity::Medium);
        let suggestion = result.suggestions_of(SuggestionKind::AddSubject).next().unwrap();
        assert!(suggestion.suggested_content.is_some());
    }

    #[test]
    fn test_style_mixing_warning() {
        let components = [subject("bokeh background, oil on canvas")];
        let result = analyze_prompt(&components, &[], &[]);
        let warning = result.warnings_of(WarningKind::StyleMixing).next().unwrap();
        assert!(warning.message.contains("bokeh"));
        assert!(warning.message.contains("canvas") || warning.message.contains("oil"));
    }

    #[test]
    fn test_valid_composition_with_subject_and_no_high() {
        let components = [
            subject("a red fox"),
            PromptComponent::new(ComponentType::Style, "watercolor wash"),
            PromptComponent::new(ComponentType::Lighting, "soft morning light"),
        ];
        let result = analyze_prompt(&components, &[], &[]);
        assert!(result.is_valid);
        // 3 enabled components earn the balance bonus
        assert!(result.score > 85);
        assert_eq!(result.analysis.technical, 90.0);
    }

    #[test]
    fn test_modifier_additions_count_toward_length() {
        use crate::modifier::{ModifierCategory, StyleModifier};
        let filler = "volumetric light ".repeat(30);
        let modifier = StyleModifier::new("m", "M", ModifierCategory::LightingType, filler);
        let result = analyze_prompt(&[subject("a cat")], &[], &[modifier]);
        assert!(result.analysis.estimated_tokens > TOKEN_CEILING);
    }

    #[test]
    fn test_dominant_categories_tie_first_seen() {
        let components = [
            PromptComponent::new(ComponentType::Mood, "serene"),
            PromptComponent::new(ComponentType::Color, "teal and orange"),
            PromptComponent::new(ComponentType::Detail, "intricate"),
            PromptComponent::new(ComponentType::Detail, "filigree"),
        ];
        let result = analyze_prompt(&components, &[], &[]);
        assert_eq!(
            result.analysis.dominant_categories.as_slice(),
            &[
                ComponentType::Detail,
                ComponentType::Mood,
                ComponentType::Color
            ]
        );
    }
}
