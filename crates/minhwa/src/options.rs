// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Generation options controlling prompt assembly.

use serde::{Deserialize, Serialize};

/// How adventurous the composition should be.
///
/// Informational for hosts choosing sampler settings; the assembly
/// algorithm itself is deterministic regardless of level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativityLevel {
    /// Stay close to well-known phrasings.
    Conservative,
    /// Balanced defaults.
    #[default]
    Balanced,
    /// Favor unusual combinations.
    Creative,
    /// Anything goes.
    Experimental,
}

/// Speed/quality trade-off hint for the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityFocus {
    /// Prefer fast generation.
    Speed,
    /// Balanced defaults.
    #[default]
    Balanced,
    /// Prefer output quality.
    Quality,
}

/// Options applied during [`generate_prompt`](crate::engine::PromptEngine::generate_prompt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Assemble the negative prompt; when false it is left empty.
    pub include_negative: bool,
    /// Reserved emphasis post-processing hook (currently identity).
    pub apply_emphasis: bool,
    /// Normalize separators and whitespace for Stable Diffusion.
    pub optimize_for_sd: bool,
    /// Approximate token ceiling; trims the positive prompt only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_token_count: Option<u32>,
    /// Creativity hint.
    pub creativity_level: CreativityLevel,
    /// Speed/quality hint.
    pub quality_focus: QualityFocus,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_negative: true,
            apply_emphasis: true,
            optimize_for_sd: true,
            target_token_count: Some(150),
            creativity_level: CreativityLevel::default(),
            quality_focus: QualityFocus::default(),
        }
    }
}

impl GenerationOptions {
    /// Remove the token ceiling.
    pub fn without_token_target(mut self) -> Self {
        self.target_token_count = None;
        self
    }

    /// Set the token ceiling.
    pub fn with_token_target(mut self, tokens: u32) -> Self {
        self.target_token_count = Some(tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GenerationOptions::default();
        assert!(opts.include_negative);
        assert!(opts.apply_emphasis);
        assert!(opts.optimize_for_sd);
        assert_eq!(opts.target_token_count, Some(150));
        assert_eq!(opts.creativity_level, CreativityLevel::Balanced);
        assert_eq!(opts.quality_focus, QualityFocus::Balanced);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CreativityLevel::Experimental).unwrap();
        assert_eq!(json, "\"experimental\"");
    }
}
