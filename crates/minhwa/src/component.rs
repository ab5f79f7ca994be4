// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Prompt component value types.
//!
//! A [`PromptComponent`] is one labeled fragment of a composition (subject,
//! style, lighting, ...) carrying an importance weight and an enabled flag.
//! Components are plain values; all mutation goes through explicit engine
//! operations.
//!
//! # Examples
//!
//! ```
//! use minhwa::component::{ComponentType, PromptComponent};
//!
//! let subject = PromptComponent::new(ComponentType::Subject, "beautiful woman")
//!     .with_weight(1.2);
//! assert!(subject.enabled);
//! assert_eq!(subject.kind, ComponentType::Subject);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The labeled role a component plays in the composition.
///
/// The variant order here is incidental; assembly ordering is defined by
/// [`ComponentType::assembly_priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// The main subject of the image.
    Subject,
    /// Artistic style (impressionist, cyberpunk, ...).
    Style,
    /// Medium (oil painting, photograph, 3d render, ...).
    Medium,
    /// Lighting description.
    Lighting,
    /// Camera / optics description.
    Camera,
    /// Mood or atmosphere.
    Mood,
    /// Color palette.
    Color,
    /// Compositional guidance (rule of thirds, close-up, ...).
    Composition,
    /// Detail boosters (high quality, intricate, ...).
    Detail,
    /// Negative-prompt content; routed to the negative sequence on insert.
    Negative,
    /// Free-form content with no fixed role.
    Custom,
}

impl ComponentType {
    /// Fixed assembly priority: lower sorts earlier in the final prompt.
    ///
    /// Subject leads, then style, medium, lighting, camera, mood, color,
    /// composition, detail, custom; negative content sorts last (it never
    /// appears in the positive prompt anyway).
    #[inline]
    pub const fn assembly_priority(self) -> u8 {
        match self {
            Self::Subject => 0,
            Self::Style => 1,
            Self::Medium => 2,
            Self::Lighting => 3,
            Self::Camera => 4,
            Self::Mood => 5,
            Self::Color => 6,
            Self::Composition => 7,
            Self::Detail => 8,
            Self::Custom => 9,
            Self::Negative => 10,
        }
    }

    /// Whether this type belongs in the negative sequence.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// The snake_case name used in messages and serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Style => "style",
            Self::Medium => "medium",
            Self::Lighting => "lighting",
            Self::Camera => "camera",
            Self::Mood => "mood",
            Self::Color => "color",
            Self::Composition => "composition",
            Self::Detail => "detail",
            Self::Negative => "negative",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque unique identifier for a component.
///
/// Ids are generated with enough entropy to be effectively unique within a
/// session; cross-session uniqueness is not guaranteed or required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Generate a fresh id.
    #[inline]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A metadata value restricted to a closed set of shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Num(f64),
    /// Text value.
    Str(String),
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Metadata key marking components appended by the optimizer.
pub const META_AUTO_ADDED: &str = "auto_added";

/// One weighted prompt fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptComponent {
    /// Unique id, assigned at creation.
    pub id: ComponentId,
    /// The role this fragment plays.
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// The fragment text.
    pub content: String,
    /// Importance weight; 1.0 is neutral, effective range ~[0.1, 3.0].
    pub weight: f32,
    /// Disabled components are skipped by assembly and analysis.
    pub enabled: bool,
    /// Open key/value bag with typed values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl PromptComponent {
    /// Create an enabled component with neutral weight and a fresh id.
    pub fn new(kind: ComponentType, content: impl Into<String>) -> Self {
        Self {
            id: ComponentId::fresh(),
            kind,
            content: content.into(),
            weight: 1.0,
            enabled: true,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Start disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Content normalized for duplicate comparison (lowercase, trimmed).
    #[inline]
    pub fn normalized_content(&self) -> String {
        self.content.trim().to_lowercase()
    }

    /// Whether the optimizer appended this component automatically.
    pub fn is_auto_added(&self) -> bool {
        matches!(
            self.metadata.get(META_AUTO_ADDED),
            Some(MetadataValue::Bool(true))
        )
    }
}
