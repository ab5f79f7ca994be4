// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The canonical prompt-assembly algorithm.
//!
//! Deterministic: the same state always yields the same strings. Enabled
//! components are stable-sorted by type priority, emphasis-wrapped from
//! their weights, joined with modifier additions, then normalized and
//! trimmed to the token budget.
//!
//! Weight-to-emphasis uses `N = min(floor(|weight - 1.0| * 10), 5)` nested
//! parentheses (weight above 1.0) or brackets (below). This formula is the
//! authority on emitted text; the analyzer's token estimator deliberately
//! ignores emphasis wrapping.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::state::EngineState;
use crate::component::PromptComponent;

/// Emphasis nesting cap.
const MAX_NESTING: usize = 5;
/// Characters per estimated token, mirroring the analyzer's heuristic.
const CHARS_PER_TOKEN: usize = 4;

/// The assembled prompt pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    /// The positive prompt.
    pub prompt: String,
    /// The negative prompt; empty when `include_negative` is off.
    pub negative_prompt: String,
}

fn comma_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*,[,\s]*").expect("static regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Wrap `content` in emphasis markers derived from `weight`.
///
/// Weights at or around 1.0 (close enough that the nesting count rounds
/// to zero) pass through unchanged. Out-of-range weights are tolerated;
/// nesting is capped rather than rejected.
pub(crate) fn format_weighted(content: &str, weight: f32) -> String {
    let nesting = if weight > 1.0 {
        (((weight - 1.0) * 10.0).floor() as usize).min(MAX_NESTING)
    } else {
        0
    };
    if nesting > 0 {
        return format!("{}{}{}", "(".repeat(nesting), content, ")".repeat(nesting));
    }

    let nesting = if weight < 1.0 {
        (((1.0 - weight) * 10.0).floor() as usize).min(MAX_NESTING)
    } else {
        0
    };
    if nesting > 0 {
        return format!("{}{}{}", "[".repeat(nesting), content, "]".repeat(nesting));
    }
    content.to_string()
}

/// Normalize separators for SD-style backends.
///
/// Collapses whitespace, merges comma runs into a single ", ", and strips
/// leading/trailing separators.
pub(crate) fn normalize_for_sd(text: &str) -> String {
    let collapsed = whitespace_re().replace_all(text, " ");
    let normalized = comma_run_re().replace_all(&collapsed, ", ");
    normalized
        .trim()
        .trim_start_matches([',', ' '])
        .trim_end_matches([',', ' '])
        .to_string()
}

/// Reserved emphasis post-processing hook; currently the identity.
#[inline]
pub(crate) fn apply_emphasis(text: String) -> String {
    text
}

/// Drop trailing comma-delimited segments until `prompt` fits the budget.
///
/// Only the positive prompt is ever trimmed. When no separator remains
/// the (single-segment) prompt is kept even if over budget.
pub(crate) fn trim_to_token_budget(prompt: &mut String, target_tokens: u32) {
    let budget = target_tokens as usize * CHARS_PER_TOKEN;
    while prompt.len() > budget {
        match prompt.rfind(", ") {
            Some(index) => prompt.truncate(index),
            None => break,
        }
    }
}

fn join_fragments(components: &[&PromptComponent], additions: &[&str]) -> String {
    let mut fragments: Vec<String> = components
        .iter()
        .map(|c| format_weighted(&c.content, c.weight))
        .collect();
    fragments.extend(additions.iter().map(|s| s.to_string()));
    fragments.join(", ")
}

/// Assemble the prompt pair from a state snapshot.
pub(crate) fn assemble(state: &EngineState) -> GeneratedPrompt {
    let options = &state.generation_options;

    let mut positive: Vec<&PromptComponent> =
        state.components.iter().filter(|c| c.enabled).collect();
    positive.sort_by_key(|c| c.kind.assembly_priority());

    let positive_additions: Vec<&str> = state
        .active_modifiers
        .iter()
        .map(|m| m.prompt_addition.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect();
    let mut prompt = join_fragments(&positive, &positive_additions);

    let mut negative_prompt = if options.include_negative {
        let negative: Vec<&PromptComponent> = state
            .negative_components
            .iter()
            .filter(|c| c.enabled)
            .collect();
        let negative_additions: Vec<&str> = state
            .active_modifiers
            .iter()
            .filter_map(|m| m.negative_prompt_addition.as_deref())
            .filter(|s| !s.trim().is_empty())
            .collect();
        join_fragments(&negative, &negative_additions)
    } else {
        String::new()
    };

    if options.optimize_for_sd {
        prompt = normalize_for_sd(&prompt);
        negative_prompt = normalize_for_sd(&negative_prompt);
    }

    if options.apply_emphasis {
        prompt = apply_emphasis(prompt);
        negative_prompt = apply_emphasis(negative_prompt);
    }

    if let Some(target) = options.target_token_count {
        trim_to_token_budget(&mut prompt, target);
    }

    GeneratedPrompt {
        prompt,
        negative_prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;
    use crate::config::EngineConfig;

    #[test]
    fn test_format_weighted_neutral() {
        assert_eq!(format_weighted("a cat", 1.0), "a cat");
        // nesting rounds to zero just above neutral
        assert_eq!(format_weighted("a cat", 1.05), "a cat");
    }

    #[test]
    fn test_format_weighted_emphasis() {
        let emphasized = format_weighted("beautiful woman", 1.2);
        assert!(emphasized.starts_with('('));
        assert!(emphasized.ends_with(')'));
        assert!(emphasized.contains("beautiful woman"));
    }

    #[test]
    fn test_format_weighted_deemphasis() {
        let dimmed = format_weighted("background", 0.8);
        assert!(dimmed.starts_with('['));
        assert!(dimmed.ends_with(']'));
    }

    #[test]
    fn test_format_weighted_nesting_capped() {
        let heavy = format_weighted("x", 3.0);
        assert_eq!(heavy, "(((((x)))))");
        let light = format_weighted("x", 0.0);
        assert_eq!(light, "[[[[[x]]]]]");
        // degenerate inputs degrade, never error
        let weird = format_weighted("x", -10.0);
        assert_eq!(weird, "[[[[[x]]]]]");
    }

    #[test]
    fn test_normalize_for_sd() {
        assert_eq!(normalize_for_sd("a cat,, oil  painting, "), "a cat, oil painting");
        assert_eq!(normalize_for_sd(", leading"), "leading");
        assert_eq!(normalize_for_sd(""), "");
    }

    #[test]
    fn test_trim_to_token_budget_drops_trailing_segments() {
        let mut prompt = "aaaa, bbbb, cccc".to_string();
        trim_to_token_budget(&mut prompt, 3);
        assert_eq!(prompt, "aaaa, bbbb");
        // single segment over budget is kept
        let mut prompt = "aaaaaaaaaaaaaaaa".to_string();
        trim_to_token_budget(&mut prompt, 1);
        assert_eq!(prompt, "aaaaaaaaaaaaaaaa");
    }

    #[test]
    fn test_assemble_orders_by_priority() {
        let config = EngineConfig::default();
        let mut state = EngineState::empty(&config);
        state.generation_options.target_token_count = None;
        state.components = vec![
            PromptComponent::new(ComponentType::Lighting, "soft lighting").with_weight(0.8),
            PromptComponent::new(ComponentType::Subject, "beautiful woman").with_weight(1.2),
            PromptComponent::new(ComponentType::Style, "oil painting"),
        ];
        state.negative_components =
            vec![PromptComponent::new(ComponentType::Negative, "low quality, blurry")];

        let generated = assemble(&state);
        let subject = generated.prompt.find("beautiful woman").unwrap();
        let style = generated.prompt.find("oil painting").unwrap();
        let lighting = generated.prompt.find("soft lighting").unwrap();
        assert!(subject < style && style < lighting);
        assert!(generated.negative_prompt.contains("low quality, blurry"));
    }

    #[test]
    fn test_assemble_skips_disabled_and_negative_flag() {
        let config = EngineConfig::default();
        let mut state = EngineState::empty(&config);
        state.components = vec![
            PromptComponent::new(ComponentType::Subject, "a cat"),
            PromptComponent::new(ComponentType::Style, "sumi-e").disabled(),
        ];
        state.negative_components =
            vec![PromptComponent::new(ComponentType::Negative, "blurry")];
        state.generation_options.include_negative = false;

        let generated = assemble(&state);
        assert!(!generated.prompt.contains("sumi-e"));
        assert!(generated.negative_prompt.is_empty());
    }
}
