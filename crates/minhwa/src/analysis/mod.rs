// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Heuristic prompt analysis.
//!
//! Pure, side-effect-free scoring and validation of a component+modifier
//! snapshot. All operations here are total: no input causes a failure, and
//! out-of-range numeric fields degrade gracefully instead of erroring.
//! That makes the analyzer safe to run on every state change, including
//! from interactive surfaces.
//!
//! ## Modules
//!
//! - [`analyze`] - the scoring/validation pipeline
//! - [`optimize`] - deterministic component-list cleanup
//! - [`syntax`] - per-component syntax checks
//! - [`suggest`] - static contextual suggestions
//! - [`lexicon`] - the fixed heuristic knowledge base
//! - [`report`] - result types

pub mod analyze;
pub mod lexicon;
pub mod optimize;
pub mod report;
pub mod suggest;
pub mod syntax;

pub use analyze::{analyze_prompt, estimate_tokens};
pub use optimize::optimize_components;
pub use report::{
    PromptAnalysis, PromptWarning, Severity, Suggestion, SuggestionKind, ValidationResult,
    WarningKind,
};
pub use suggest::{extract_keywords, suggest_contextual_prompts, SuggestionCategory, SuggestionGroup};
pub use syntax::validate_component_syntax;
