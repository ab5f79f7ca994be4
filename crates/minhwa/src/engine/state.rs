// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The engine's working state.
//!
//! A single mutable record owned exclusively by one engine. Invariants:
//! component ids are unique within a state; negative-typed components live
//! only in `negative_components` (enforced at insertion); the
//! `max_components` bound applies to positive components only; the active
//! modifier set holds no duplicate ids.

use serde::{Deserialize, Serialize};

use crate::component::{ComponentId, PromptComponent};
use crate::config::EngineConfig;
use crate::modifier::StyleModifier;
use crate::options::GenerationOptions;
use crate::template::PromptTemplate;

/// Which sequence a component lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sequence {
    /// The positive prompt sequence.
    Positive,
    /// The negative prompt sequence.
    Negative,
}

/// The engine's single mutable working record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Ordered positive components.
    pub components: Vec<PromptComponent>,
    /// Ordered negative components.
    pub negative_components: Vec<PromptComponent>,
    /// Applied modifiers in application order; unique by id.
    pub active_modifiers: Vec<StyleModifier>,
    /// Options used by prompt assembly.
    pub generation_options: GenerationOptions,
    /// Whether validation passes emit events.
    pub validation_enabled: bool,
    /// Whether mutations trigger a validation pass.
    pub auto_optimize: bool,
    /// The last loaded template, kept as a value copy for reference only;
    /// the engine never mutates or persists it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_template: Option<PromptTemplate>,
}

impl EngineState {
    /// Empty default state for the given configuration.
    pub fn empty(config: &EngineConfig) -> Self {
        Self {
            components: Vec::new(),
            negative_components: Vec::new(),
            active_modifiers: Vec::new(),
            generation_options: config.default_generation_options.clone(),
            validation_enabled: config.auto_validation,
            auto_optimize: true,
            current_template: None,
        }
    }

    /// Locate a component by id in either sequence.
    pub(crate) fn locate(&self, id: ComponentId) -> Option<(Sequence, usize)> {
        if let Some(index) = self.components.iter().position(|c| c.id == id) {
            return Some((Sequence::Positive, index));
        }
        self.negative_components
            .iter()
            .position(|c| c.id == id)
            .map(|index| (Sequence::Negative, index))
    }

    /// Mutable access to one sequence.
    pub(crate) fn sequence_mut(&mut self, sequence: Sequence) -> &mut Vec<PromptComponent> {
        match sequence {
            Sequence::Positive => &mut self.components,
            Sequence::Negative => &mut self.negative_components,
        }
    }

    /// Total component count across both sequences.
    pub fn component_count(&self) -> usize {
        self.components.len() + self.negative_components.len()
    }
}
