// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The prompt composition engine.
//!
//! [`PromptEngine`] owns the working set of components and modifiers,
//! exposes the mutating operations, runs the deterministic assembly
//! algorithm, and notifies listeners of changes. Validation is delegated
//! to the [`analysis`](crate::analysis) module.
//!
//! The engine is single-threaded and run-to-completion: no suspension
//! points, no background work, no I/O. Concurrent owners each hold their
//! own instance, cheaply obtained via [`PromptEngine::deep_clone`].
//!
//! # Examples
//!
//! ```
//! use minhwa::component::{ComponentType, PromptComponent};
//! use minhwa::config::EngineConfig;
//! use minhwa::engine::PromptEngine;
//!
//! let mut engine = PromptEngine::new(EngineConfig::default());
//! engine
//!     .add_component(PromptComponent::new(ComponentType::Subject, "a red fox"))
//!     .unwrap();
//! let generated = engine.generate_prompt();
//! assert!(generated.prompt.contains("a red fox"));
//! ```

pub mod assemble;
pub mod events;
pub mod history;
pub mod state;

use tracing::debug;

pub use assemble::GeneratedPrompt;
pub use events::{EngineEvent, EventBus, SubscriptionId};
pub use history::{EngineAnalytics, GenerationRecord};
pub use state::EngineState;

use crate::analysis::{
    analyze_prompt, suggest_contextual_prompts, PromptWarning, Severity, SuggestionGroup,
    ValidationResult, WarningKind,
};
use crate::component::{ComponentId, PromptComponent};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::modifier::StyleModifier;
use crate::template::PromptTemplate;

use self::history::GenerationHistory;

use smallvec::SmallVec;

/// Stateful orchestrator for one prompt composition.
#[derive(Debug)]
pub struct PromptEngine {
    config: EngineConfig,
    state: EngineState,
    events: EventBus,
    history: GenerationHistory,
    analytics: EngineAnalytics,
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PromptEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        let state = EngineState::empty(&config);
        let history = GenerationHistory::new(config.max_history_items);
        Self {
            config,
            state,
            events: EventBus::new(),
            history,
            analytics: EngineAnalytics::default(),
        }
    }

    /// The construction-time configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A copy of the working state.
    ///
    /// Returning a copy keeps external code from aliasing into the
    /// engine's internal sequences.
    pub fn state(&self) -> EngineState {
        self.state.clone()
    }

    /// Replace the working state wholesale.
    ///
    /// Components are re-partitioned by type on the way in, so the
    /// negative-sequence invariant holds regardless of how the caller
    /// arranged the value.
    pub fn set_state(&mut self, state: EngineState) {
        let mut incoming = state;
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for component in incoming
            .components
            .drain(..)
            .chain(incoming.negative_components.drain(..))
        {
            if component.kind.is_negative() {
                negative.push(component);
            } else {
                positive.push(component);
            }
        }
        incoming.components = positive;
        incoming.negative_components = negative;
        self.state = incoming;
    }

    /// Reset to the empty default state.
    pub fn reset(&mut self) {
        debug!("engine reset");
        self.state = EngineState::empty(&self.config);
    }

    // ------------------------------------------------------------------
    // Component operations
    // ------------------------------------------------------------------

    /// Insert a component, assigning it a fresh id.
    ///
    /// Negative-typed components are routed to the negative sequence and
    /// are exempt from the positive-component bound. Fails only when the
    /// positive sequence is already at `max_components`.
    pub fn add_component(&mut self, component: PromptComponent) -> Result<ComponentId> {
        let mut component = component;
        if !component.kind.is_negative() && self.state.components.len() >= self.config.max_components
        {
            return Err(Error::capacity(self.config.max_components));
        }

        component.id = ComponentId::fresh();
        let id = component.id;
        debug!(kind = %component.kind, %id, "component added");

        if component.kind.is_negative() {
            self.state.negative_components.push(component.clone());
        } else {
            self.state.components.push(component.clone());
        }
        if self.config.enable_analytics {
            self.analytics.components_added += 1;
        }
        self.events.emit(&EngineEvent::ComponentAdded { component });

        // Bookkeeping only: a validation pass runs, but optimizer output
        // is never injected back into the working state.
        if self.state.auto_optimize {
            let _ = self.validate();
        }
        Ok(id)
    }

    /// Remove a component from whichever sequence holds it.
    pub fn remove_component(&mut self, id: ComponentId) -> bool {
        let Some((sequence, index)) = self.state.locate(id) else {
            return false;
        };
        self.state.sequence_mut(sequence).remove(index);
        debug!(%id, "component removed");
        self.events
            .emit(&EngineEvent::ComponentRemoved { component_id: id });
        true
    }

    /// Replace a component in place by id.
    ///
    /// The component stays in the sequence that holds it even if its type
    /// changed; to move across sequences, remove and re-add.
    pub fn update_component(&mut self, component: PromptComponent) -> bool {
        let Some((sequence, index)) = self.state.locate(component.id) else {
            return false;
        };
        self.state.sequence_mut(sequence)[index] = component.clone();
        self.events.emit(&EngineEvent::ComponentUpdated { component });
        true
    }

    /// Reposition a component within the positive sequence.
    ///
    /// No-op (false) when the id is absent from the positive sequence or
    /// the index is out of range.
    pub fn move_component(&mut self, id: ComponentId, new_index: usize) -> bool {
        let Some(index) = self.state.components.iter().position(|c| c.id == id) else {
            return false;
        };
        if new_index >= self.state.components.len() {
            return false;
        }
        let component = self.state.components.remove(index);
        self.state.components.insert(new_index, component);
        true
    }

    // ------------------------------------------------------------------
    // Modifier operations
    // ------------------------------------------------------------------

    /// Add a modifier to the active set; idempotent by id.
    ///
    /// Returns false (and emits nothing) when the id is already active.
    pub fn apply_modifier(&mut self, modifier: StyleModifier) -> bool {
        if self
            .state
            .active_modifiers
            .iter()
            .any(|m| m.id == modifier.id)
        {
            return false;
        }
        debug!(id = %modifier.id, "modifier applied");
        self.state.active_modifiers.push(modifier.clone());
        self.events.emit(&EngineEvent::ModifierApplied { modifier });
        true
    }

    /// Remove a modifier from the active set by id.
    pub fn remove_modifier(&mut self, id: &str) -> bool {
        let Some(index) = self
            .state
            .active_modifiers
            .iter()
            .position(|m| m.id == id)
        else {
            return false;
        };
        self.state.active_modifiers.remove(index);
        self.events.emit(&EngineEvent::ModifierRemoved {
            modifier_id: id.to_string(),
        });
        true
    }

    // ------------------------------------------------------------------
    // Templates
    // ------------------------------------------------------------------

    /// Replace the whole working set with a template's contents.
    ///
    /// Every component gets a fresh id, so repeated loads never collide.
    /// The loaded template is recorded for reference.
    pub fn load_template(&mut self, template: &PromptTemplate) {
        debug!(template = %template.name, "template loaded");
        self.state.components.clear();
        self.state.negative_components.clear();
        self.state.active_modifiers.clear();

        for component in &template.components {
            let mut component = component.clone();
            component.id = ComponentId::fresh();
            if component.kind.is_negative() {
                self.state.negative_components.push(component);
            } else {
                self.state.components.push(component);
            }
        }
        self.state.current_template = Some(template.clone());
        self.events.emit(&EngineEvent::TemplateLoaded {
            template: template.clone(),
        });
    }

    /// Bundle the current components into a new private template value.
    ///
    /// The template is returned, not stored anywhere; persisting it is the
    /// template store's concern.
    pub fn save_as_template(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> PromptTemplate {
        let components = self
            .state
            .components
            .iter()
            .chain(self.state.negative_components.iter())
            .cloned()
            .collect();
        PromptTemplate::new(name, description, category, tags, components)
    }

    // ------------------------------------------------------------------
    // Generation and validation
    // ------------------------------------------------------------------

    /// Assemble the prompt pair from the current state.
    ///
    /// Deterministic: two consecutive calls without a mutation in between
    /// return identical strings.
    pub fn generate_prompt(&mut self) -> GeneratedPrompt {
        let generated = assemble::assemble(&self.state);
        debug!(
            prompt_len = generated.prompt.len(),
            negative_len = generated.negative_prompt.len(),
            "prompt generated"
        );

        if self.config.enable_history {
            self.history.push(GenerationRecord {
                prompt: generated.prompt.clone(),
                negative_prompt: generated.negative_prompt.clone(),
                component_count: self.state.component_count(),
                created_at: chrono::Utc::now(),
            });
        }
        if self.config.enable_analytics {
            self.analytics.prompts_generated += 1;
        }
        self.events.emit(&EngineEvent::PromptGenerated {
            prompt: generated.prompt.clone(),
            negative_prompt: generated.negative_prompt.clone(),
        });
        generated
    }

    /// Run the analyzer over the current state.
    ///
    /// On top of the analyzer's own checks, the assembled positive prompt
    /// is checked against the configured `max_prompt_length` character
    /// ceiling. Emits `ValidationCompleted` when validation is enabled.
    pub fn validate(&mut self) -> ValidationResult {
        let mut result = analyze_prompt(
            &self.state.components,
            &self.state.negative_components,
            &self.state.active_modifiers,
        );

        let assembled = assemble::assemble(&self.state);
        if assembled.prompt.len() > self.config.max_prompt_length {
            result.warnings.push(PromptWarning::new(
                WarningKind::Length,
                Severity::High,
                format!(
                    "assembled prompt is {} characters, above the {} character limit",
                    assembled.prompt.len(),
                    self.config.max_prompt_length
                ),
            ));
            result.is_valid = false;
            result.score = result.score.saturating_sub(15);
        }

        if self.config.enable_analytics {
            self.analytics.validations_run += 1;
        }
        if self.state.validation_enabled {
            self.events.emit(&EngineEvent::ValidationCompleted {
                result: result.clone(),
            });
        }
        result
    }

    /// Replace the positive sequence with the optimizer's output.
    ///
    /// This is the explicit, opt-in counterpart to `auto_optimize`, which
    /// only triggers validation bookkeeping.
    pub fn optimize_in_place(&mut self) {
        self.state.components =
            crate::analysis::optimize_components(&self.state.components);
    }

    /// Contextual suggestion groups for `text`, filtered by the configured
    /// confidence threshold.
    pub fn contextual_suggestions(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> SmallVec<[SuggestionGroup; 3]> {
        suggest_contextual_prompts(text, category)
            .into_iter()
            .filter(|g| g.confidence >= self.config.suggestion_threshold)
            .collect()
    }

    // ------------------------------------------------------------------
    // Events, history, analytics
    // ------------------------------------------------------------------

    /// Register an event listener; the returned handle unsubscribes it.
    pub fn on(&mut self, listener: impl FnMut(&EngineEvent) + Send + 'static) -> SubscriptionId {
        self.events.on(listener)
    }

    /// Unsubscribe a listener by handle.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.events.off(id)
    }

    /// Recorded generations, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &GenerationRecord> {
        self.history.records().iter()
    }

    /// Drop all recorded generations.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Operation counters; all zero unless analytics is enabled.
    pub fn analytics(&self) -> EngineAnalytics {
        self.analytics
    }

    /// Deep value-copy into a new engine sharing this configuration.
    ///
    /// The clone starts with an empty listener registry and is fully
    /// independent thereafter.
    pub fn deep_clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            state: self.state.clone(),
            events: EventBus::new(),
            history: self.history.clone(),
            analytics: self.analytics,
        }
    }
}
