// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Fixed heuristic knowledge base.
//!
//! All text analysis in this crate is deterministic keyword, substring, and
//! length heuristics over these tables. There is no semantic understanding;
//! matches are literal and case-insensitive (callers lowercase first).

use crate::component::ComponentType;

/// Antonym pairs whose co-occurrence reads as a contradiction.
pub const ANTONYM_PAIRS: &[(&str, &str)] = &[
    ("realistic", "cartoon"),
    ("dark", "bright"),
    ("simple", "complex"),
    ("minimal", "detailed"),
    ("modern", "vintage"),
    ("abstract", "realistic"),
    ("blurry", "sharp"),
    ("photorealistic", "illustration"),
];

/// Terms that signal deliberate quality boosting.
pub const QUALITY_TERMS: &[&str] = &[
    "masterpiece",
    "best quality",
    "high quality",
    "ultra detailed",
    "extremely detailed",
    "8k",
    "4k",
    "professional",
    "award winning",
    "trending on artstation",
];

/// Generic terms that add nothing; more than two distinct hits reads as
/// an unspecific prompt.
pub const GENERIC_TERMS: &[&str] = &["image", "picture", "photo", "art", "drawing"];

/// Photography vocabulary, one half of the style-mixing check.
pub const PHOTOGRAPHY_TERMS: &[&str] = &[
    "camera",
    "lens",
    "aperture",
    "iso",
    "exposure",
    "bokeh",
    "depth of field",
];

/// Painting vocabulary, the other half of the style-mixing check.
pub const PAINTING_TERMS: &[&str] = &[
    "brushstroke",
    "canvas",
    "oil",
    "watercolor",
    "acrylic",
    "palette",
];

/// Denylisted terms; any hit is a high-severity quality warning.
pub const BLOCKED_TERMS: &[&str] = &["nsfw", "explicit", "nude", "gore", "graphic violence"];

/// Priority order used to report missing composition structure. At most
/// the first five absent entries are reported.
pub const MISSING_PRIORITY: &[ComponentType] = &[
    ComponentType::Subject,
    ComponentType::Style,
    ComponentType::Medium,
    ComponentType::Lighting,
    ComponentType::Camera,
    ComponentType::Mood,
    ComponentType::Color,
    ComponentType::Composition,
    ComponentType::Detail,
];

/// Number of non-negative component roles, the creativity denominator.
pub const ROLE_COUNT: usize = 9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for (a, b) in ANTONYM_PAIRS {
            assert_eq!(*a, a.to_lowercase());
            assert_eq!(*b, b.to_lowercase());
        }
        for t in QUALITY_TERMS
            .iter()
            .chain(GENERIC_TERMS)
            .chain(PHOTOGRAPHY_TERMS)
            .chain(PAINTING_TERMS)
            .chain(BLOCKED_TERMS)
        {
            assert_eq!(*t, t.to_lowercase());
        }
    }

    #[test]
    fn test_missing_priority_covers_roles() {
        assert_eq!(MISSING_PRIORITY.len(), ROLE_COUNT);
        assert_eq!(MISSING_PRIORITY[0], ComponentType::Subject);
    }
}
