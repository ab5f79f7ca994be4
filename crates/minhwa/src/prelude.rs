// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Convenient imports for common usage.
//!
//! ```
//! use minhwa::prelude::*;
//!
//! let engine = PromptEngine::new(EngineConfig::default());
//! assert!(engine.state().components.is_empty());
//! ```

pub use crate::analysis::{
    analyze_prompt, optimize_components, suggest_contextual_prompts, validate_component_syntax,
    PromptAnalysis, PromptWarning, Severity, Suggestion, SuggestionKind, ValidationResult,
    WarningKind,
};
pub use crate::component::{ComponentId, ComponentType, MetadataValue, PromptComponent};
pub use crate::config::EngineConfig;
pub use crate::engine::{
    EngineEvent, EngineState, GeneratedPrompt, GenerationRecord, PromptEngine, SubscriptionId,
};
pub use crate::error::{Error, Result};
pub use crate::modifier::{ModifierCategory, StyleModifier};
pub use crate::options::{CreativityLevel, GenerationOptions, QualityFocus};
pub use crate::template::PromptTemplate;
