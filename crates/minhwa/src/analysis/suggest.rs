// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Contextual prompt suggestions.
//!
//! Deliberately non-semantic: a fixed set of example groups plus literal
//! keyword tokenization of the input text. No LLM calls, no embeddings;
//! sub-millisecond and fully deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Minimum keyword token length.
const MIN_KEYWORD_LEN: usize = 3;
/// How many keywords are extracted before truncation.
const MAX_EXTRACTED: usize = 10;
/// How many keywords each group reports.
const MAX_REPORTED: usize = 3;

/// Which example group a suggestion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    /// Subject matter examples.
    Subject,
    /// Style and medium examples.
    Style,
    /// Camera / lighting / composition examples.
    Technical,
}

impl SuggestionCategory {
    /// The lowercase name used for category matching.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Style => "style",
            Self::Technical => "technical",
        }
    }
}

/// One group of contextual suggestions.
///
/// Serialize-only: the examples are static strings and never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionGroup {
    /// The group's category.
    pub category: SuggestionCategory,
    /// Static example prompts for this category.
    pub examples: Vec<&'static str>,
    /// Confidence in [0, 1]; hosts filter against their threshold.
    pub confidence: f32,
    /// Up to three literal keywords extracted from the input text.
    pub keywords: SmallVec<[String; 3]>,
}

const SUBJECT_EXAMPLES: &[&str] = &[
    "portrait of a young woman with flowing hair",
    "majestic mountain landscape at dawn",
    "futuristic city skyline at night",
];

const STYLE_EXAMPLES: &[&str] = &[
    "in the style of an impressionist oil painting",
    "cinematic photography with dramatic lighting",
    "soft watercolor illustration",
];

const TECHNICAL_EXAMPLES: &[&str] = &[
    "85mm lens, shallow depth of field",
    "volumetric lighting, golden hour",
    "rule of thirds composition, 8k detail",
];

/// Extract literal lowercase keyword tokens from `text`.
///
/// Tokens are alphanumeric runs longer than two characters; only the
/// first ten are kept. This is tokenization, not NLP.
pub fn extract_keywords(text: &str) -> SmallVec<[String; 10]> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_KEYWORD_LEN)
        .map(|t| t.to_lowercase())
        .take(MAX_EXTRACTED)
        .collect()
}

/// Suggest up to three groups of example prompts for `text`.
///
/// When `category` names a group ("subject", "style", "technical"), only
/// that group is returned; any other value returns all three. Confidence
/// is fixed per group; filtering against a threshold is the caller's
/// concern (see
/// [`PromptEngine::contextual_suggestions`](crate::engine::PromptEngine::contextual_suggestions)).
pub fn suggest_contextual_prompts(
    text: &str,
    category: Option<&str>,
) -> SmallVec<[SuggestionGroup; 3]> {
    let keywords = extract_keywords(text);
    let reported: SmallVec<[String; 3]> =
        keywords.iter().take(MAX_REPORTED).cloned().collect();

    let groups = [
        (SuggestionCategory::Subject, SUBJECT_EXAMPLES, 0.9_f32),
        (SuggestionCategory::Style, STYLE_EXAMPLES, 0.75),
        (SuggestionCategory::Technical, TECHNICAL_EXAMPLES, 0.6),
    ];

    let wanted = category.and_then(|c| {
        let name = c.trim().to_lowercase();
        groups
            .iter()
            .map(|(cat, _, _)| *cat)
            .find(|cat| cat.as_str() == name)
    });
    groups
        .into_iter()
        .filter(|(cat, _, _)| wanted.map_or(true, |w| w == *cat))
        .map(|(category, examples, confidence)| SuggestionGroup {
            category,
            examples: examples.to_vec(),
            confidence,
            keywords: reported.clone(),
        })
        .collect()
}
