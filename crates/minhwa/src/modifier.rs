// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Reusable style modifiers.
//!
//! A [`StyleModifier`] is a named, globally applied text addition (and an
//! optional negative-prompt addition). Modifiers are authored outside the
//! engine (preset packs, template stores) and applied by id; application is
//! idempotent.

use serde::{Deserialize, Serialize};

/// The domain a modifier draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierCategory {
    /// Art movements (impressionism, bauhaus, ...).
    ArtMovement,
    /// Medium types (oil on canvas, 35mm film, ...).
    MediumType,
    /// Camera settings (aperture, focal length, ...).
    CameraSettings,
    /// Lighting setups.
    LightingType,
    /// Mood and tone.
    MoodTone,
    /// Color palettes.
    ColorPalette,
    /// Surface texture.
    Texture,
    /// Perspective and framing.
    Perspective,
    /// Generic quality boosters.
    Quality,
}

/// A named, reusable prompt addition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleModifier {
    /// Stable identifier; applying the same id twice is a no-op.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Category of the modifier.
    pub category: ModifierCategory,
    /// Text appended to the positive prompt.
    pub prompt_addition: String,
    /// Text appended to the negative prompt, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt_addition: Option<String>,
    /// Relative strength in [0, 1]; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f32>,
    /// Template category names this modifier pairs well with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatible_with: Option<Vec<String>>,
    /// Example prompts showing the modifier in use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl StyleModifier {
    /// Create a modifier with just the required fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ModifierCategory,
        prompt_addition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            prompt_addition: prompt_addition.into(),
            negative_prompt_addition: None,
            strength: None,
            compatible_with: None,
            examples: None,
        }
    }

    /// Set the negative-prompt addition.
    pub fn with_negative(mut self, addition: impl Into<String>) -> Self {
        self.negative_prompt_addition = Some(addition.into());
        self
    }

    /// Set the strength.
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = Some(strength);
        self
    }
}
