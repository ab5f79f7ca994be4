// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Engine configuration.
//!
//! Configuration is an explicit value passed at construction; there is no
//! process-wide mutable state. Partial configuration is expressed as
//! `Default` plus consuming `with_*` overrides.
//!
//! # Examples
//!
//! ```
//! use minhwa::config::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_max_components(20)
//!     .with_history(false);
//! assert_eq!(config.max_components, 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::options::GenerationOptions;

/// Construction-time configuration for a [`PromptEngine`](crate::engine::PromptEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Character ceiling for the assembled positive prompt; exceeding it
    /// earns a high-severity length warning during validation.
    pub max_prompt_length: usize,
    /// Maximum number of positive components; negative components are
    /// exempt from the bound.
    pub max_components: usize,
    /// Whether `validate` emits `ValidationCompleted` events.
    pub auto_validation: bool,
    /// Minimum confidence for contextual suggestion groups.
    pub suggestion_threshold: f32,
    /// Record generated prompts in a bounded history.
    pub enable_history: bool,
    /// History ring-buffer capacity.
    pub max_history_items: usize,
    /// Count engine operations in analytics counters.
    pub enable_analytics: bool,
    /// Options a fresh engine state starts with.
    pub default_generation_options: GenerationOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: 1500,
            max_components: 50,
            auto_validation: true,
            suggestion_threshold: 0.5,
            enable_history: true,
            max_history_items: 50,
            enable_analytics: false,
            default_generation_options: GenerationOptions::default(),
        }
    }
}

impl EngineConfig {
    /// Override the positive-component bound.
    pub fn with_max_components(mut self, max: usize) -> Self {
        self.max_components = max;
        self
    }

    /// Override the assembled-prompt character ceiling.
    pub fn with_max_prompt_length(mut self, max: usize) -> Self {
        self.max_prompt_length = max;
        self
    }

    /// Enable or disable validation events.
    pub fn with_auto_validation(mut self, enabled: bool) -> Self {
        self.auto_validation = enabled;
        self
    }

    /// Override the suggestion confidence threshold.
    pub fn with_suggestion_threshold(mut self, threshold: f32) -> Self {
        self.suggestion_threshold = threshold;
        self
    }

    /// Enable or disable generation history.
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.enable_history = enabled;
        self
    }

    /// Override the history capacity.
    pub fn with_max_history_items(mut self, max: usize) -> Self {
        self.max_history_items = max;
        self
    }

    /// Enable or disable analytics counters.
    pub fn with_analytics(mut self, enabled: bool) -> Self {
        self.enable_analytics = enabled;
        self
    }

    /// Override the default generation options.
    pub fn with_generation_options(mut self, options: GenerationOptions) -> Self {
        self.default_generation_options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.max_components, 50);
        assert_eq!(c.max_prompt_length, 1500);
        assert!(c.auto_validation);
        assert_eq!(c.max_history_items, 50);
        assert!(!c.enable_analytics);
    }

    #[test]
    fn test_builder_overrides() {
        let c = EngineConfig::default()
            .with_max_components(2)
            .with_analytics(true)
            .with_suggestion_threshold(0.8);
        assert_eq!(c.max_components, 2);
        assert!(c.enable_analytics);
        assert_eq!(c.suggestion_threshold, 0.8);
        // untouched fields keep their defaults
        assert_eq!(c.max_prompt_length, 1500);
    }
}
