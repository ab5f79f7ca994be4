// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Engine event notification.
//!
//! Emission is synchronous and runs listeners in registration order. State
//! mutation always precedes the emit, so a panicking listener unwinds to
//! the caller of the triggering operation without rolling back an applied
//! mutation. Subscriptions are handle-based: [`EventBus::on`] returns a
//! [`SubscriptionId`] which is the only way to unsubscribe.

use std::fmt;

use crate::analysis::ValidationResult;
use crate::component::{ComponentId, PromptComponent};
use crate::modifier::StyleModifier;
use crate::template::PromptTemplate;

/// An engine notification with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A component was inserted.
    ComponentAdded {
        /// The inserted component, fresh id included.
        component: PromptComponent,
    },
    /// A component was removed.
    ComponentRemoved {
        /// Id of the removed component.
        component_id: ComponentId,
    },
    /// A component was replaced in place.
    ComponentUpdated {
        /// The new component value.
        component: PromptComponent,
    },
    /// A modifier joined the active set.
    ModifierApplied {
        /// The applied modifier.
        modifier: StyleModifier,
    },
    /// A modifier left the active set.
    ModifierRemoved {
        /// Id of the removed modifier.
        modifier_id: String,
    },
    /// A template fully replaced the working state.
    TemplateLoaded {
        /// The loaded template.
        template: PromptTemplate,
    },
    /// A prompt pair was assembled.
    PromptGenerated {
        /// The positive prompt.
        prompt: String,
        /// The negative prompt.
        negative_prompt: String,
    },
    /// A validation pass finished.
    ValidationCompleted {
        /// The analyzer's output.
        result: ValidationResult,
    },
}

/// Handle returned by [`EventBus::on`]; required to unsubscribe.
///
/// Closures have no stable identity in Rust, so unsubscription is by
/// handle rather than by the original callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Listener = Box<dyn FnMut(&EngineEvent) + Send>;

/// Synchronous listener registry.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; returns the handle needed to unsubscribe.
    pub fn on(&mut self, listener: impl FnMut(&EngineEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener by handle. Returns false for unknown handles.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke all listeners in registration order.
    pub fn emit(&mut self, event: &EngineEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = Arc::clone(&order);
        bus.on(move |_| first.lock().unwrap().push(1));
        let second = Arc::clone(&order);
        bus.on(move |_| second.lock().unwrap().push(2));

        bus.emit(&EngineEvent::ModifierRemoved {
            modifier_id: "m".into(),
        });
        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_off_removes_exactly_one() {
        let hits = Arc::new(Mutex::new(0));
        let mut bus = EventBus::new();

        let a = Arc::clone(&hits);
        let keep = bus.on(move |_| *a.lock().unwrap() += 1);
        let b = Arc::clone(&hits);
        let drop_me = bus.on(move |_| *b.lock().unwrap() += 10);

        assert!(bus.off(drop_me));
        assert!(!bus.off(drop_me));
        bus.emit(&EngineEvent::ModifierRemoved {
            modifier_id: "m".into(),
        });
        assert_eq!(*hits.lock().unwrap(), 1);
        assert!(bus.off(keep));
        assert!(bus.is_empty());
    }
}
