// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Template value type.
//!
//! A [`PromptTemplate`] is a named preset bundle of components representing
//! a full composition. The engine consumes templates through
//! `load_template` and produces them through `save_as_template`; it never
//! fetches, searches, or persists them. Storage and search live in an
//! external collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::component::PromptComponent;

/// A named, reusable preset bundle of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Stable identifier assigned by whoever authored the template.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Category name (portrait, landscape, ...). Open set.
    pub category: String,
    /// Search tags.
    pub tags: Vec<String>,
    /// The bundled components, positive and negative mixed; the engine
    /// partitions them by type on load.
    pub components: Vec<PromptComponent>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Whether the template is publicly shared.
    pub public: bool,
    /// Community rating, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// How often the template has been used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u32>,
    /// Author handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Thumbnail reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl PromptTemplate {
    /// Create a private template with a fresh id and `now` timestamps.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
        components: Vec<PromptComponent>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            tags,
            components,
            created_at: now,
            updated_at: now,
            public: false,
            rating: None,
            usage_count: None,
            author: None,
            thumbnail: None,
        }
    }
}
