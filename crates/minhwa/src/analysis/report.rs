// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Validation report types.
//!
//! [`ValidationResult`] is the analyzer's output: an overall verdict and
//! score, ordered warnings and suggestions, and a breakdown of analysis
//! metrics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::component::{ComponentId, ComponentType};

/// How serious a warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic; safe to ignore.
    Low,
    /// Worth addressing.
    Medium,
    /// Invalidates the composition.
    High,
}

/// What a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Prompt too long for the token budget.
    Length,
    /// Contradicting terms co-occur.
    Contradiction,
    /// Duplicate component content.
    Duplicate,
    /// Quality problem (denylisted content, excessive emphasis).
    Quality,
    /// Missing or unbalanced structure.
    Structure,
    /// Photography and painting vocabulary mixed.
    StyleMixing,
}

/// One validation warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptWarning {
    /// What the warning is about.
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
    /// How serious it is.
    pub severity: Severity,
    /// The offending component, when one can be named.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
}

impl PromptWarning {
    /// Create a warning without a component reference.
    pub fn new(kind: WarningKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
            component_id: None,
        }
    }

    /// Attach the offending component.
    pub fn for_component(mut self, id: ComponentId) -> Self {
        self.component_id = Some(id);
        self
    }
}

/// The action a suggestion proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Drop low-priority content to fit the token budget.
    TrimPrompt,
    /// The prompt is thin; add descriptive detail.
    AddDetails,
    /// Remove one side of a contradicting pair.
    ResolveContradiction,
    /// Remove duplicated components.
    RemoveDuplicates,
    /// Add quality-boosting terms.
    AddQualityTerms,
    /// Replace generic terms with specifics.
    BeMoreSpecific,
    /// Add a subject component.
    AddSubject,
}

/// One improvement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The proposed action.
    pub kind: SuggestionKind,
    /// Human-readable message.
    pub message: String,
    /// Optional concrete action label for UIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// The component the suggestion targets, when one can be named.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
    /// Example content a UI can insert directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_content: Option<String>,
}

impl Suggestion {
    /// Create a suggestion with just a message.
    pub fn new(kind: SuggestionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            component_id: None,
            suggested_content: None,
        }
    }

    /// Attach an action label.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attach insertable example content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.suggested_content = Some(content.into());
        self
    }
}

/// Metric breakdown of a composition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// How much is going on: component count against a nominal 8.
    pub complexity: f32,
    /// Internal consistency estimate.
    pub coherence: f32,
    /// Share of tokens longer than 4 characters.
    pub specificity: f32,
    /// Spread across component roles.
    pub creativity: f32,
    /// Presence of technical (camera/lighting/composition) direction.
    pub technical: f32,
    /// Character-heuristic token estimate (not true tokenization).
    pub estimated_tokens: usize,
    /// Up to three most frequent enabled types, first-seen order on ties.
    pub dominant_categories: SmallVec<[ComponentType; 3]>,
    /// Up to five absent roles, in fixed priority order.
    pub missing_components: SmallVec<[ComponentType; 5]>,
}

/// The analyzer's full output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Overall verdict: at least one enabled positive component, at least
    /// one enabled subject, and no high-severity warning.
    pub is_valid: bool,
    /// Score in [0, 100].
    pub score: u8,
    /// Ordered warnings.
    pub warnings: SmallVec<[PromptWarning; 8]>,
    /// Ordered suggestions.
    pub suggestions: SmallVec<[Suggestion; 8]>,
    /// Metric breakdown.
    pub analysis: PromptAnalysis,
}

impl ValidationResult {
    /// Whether any warning reaches the given severity.
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.warnings.iter().any(|w| w.severity >= severity)
    }

    /// Warnings of one kind.
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &PromptWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }

    /// Suggestions of one kind.
    pub fn suggestions_of(&self, kind: SuggestionKind) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(move |s| s.kind == kind)
    }
}
