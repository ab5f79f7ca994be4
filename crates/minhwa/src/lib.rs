// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! # Minhwa - Deterministic Prompt Composition
//!
//! Library for composing and scoring structured text prompts for
//! image-generation backends. Given a set of weighted prompt components
//! (subject, style, lighting, ...) and reusable style modifiers, minhwa
//! deterministically assembles a positive/negative prompt pair and
//! independently scores the composition with keyword, substring, and
//! length heuristics over a fixed knowledge base.
//!
//! ## Architecture
//!
//! - **Component model** ([`component`], [`modifier`], [`options`]) -
//!   plain value types with no dependencies between them
//! - **Analyzer** ([`analysis`]) - pure, total functions from a
//!   component+modifier snapshot to a [`ValidationResult`](analysis::ValidationResult)
//! - **Engine** ([`engine`]) - the stateful orchestrator owning the
//!   working set, with deterministic assembly and synchronous events
//!
//! Transport to the backend, template storage/search, and presentation
//! are external collaborators; this crate performs no I/O.
//!
//! ## Quick Start
//!
//! ```
//! use minhwa::prelude::*;
//!
//! let mut engine = PromptEngine::new(EngineConfig::default());
//! engine
//!     .add_component(PromptComponent::new(ComponentType::Subject, "beautiful woman").with_weight(1.2))
//!     .unwrap();
//! engine
//!     .add_component(PromptComponent::new(ComponentType::Style, "oil painting"))
//!     .unwrap();
//!
//! let generated = engine.generate_prompt();
//! assert!(generated.prompt.contains("beautiful woman"));
//!
//! let report = engine.validate();
//! assert!(report.is_valid);
//! ```

#![warn(missing_docs)]
#![allow(clippy::new_ret_no_self)]
#![allow(clippy::too_many_arguments)]

pub mod analysis;
pub mod component;
pub mod config;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod options;
pub mod template;

pub mod prelude;

pub use analysis::{analyze_prompt, optimize_components, validate_component_syntax, ValidationResult};
pub use component::{ComponentId, ComponentType, MetadataValue, PromptComponent};
pub use config::EngineConfig;
pub use engine::{EngineEvent, EngineState, GeneratedPrompt, PromptEngine, SubscriptionId};
pub use error::{Error, Result};
pub use modifier::{ModifierCategory, StyleModifier};
pub use options::{CreativityLevel, GenerationOptions, QualityFocus};
pub use template::PromptTemplate;
