// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Deterministic component-list optimization.
//!
//! A pure pass over a component list: duplicates dropped, fixed priority
//! order restored, weights clamped into a safe band, and a quality booster
//! appended when the composition has none. Running the pass twice yields
//! the same list as running it once.

use std::collections::HashSet;

use crate::component::{ComponentType, PromptComponent, META_AUTO_ADDED};

/// Weight band the optimizer clamps into.
const WEIGHT_BAND: (f32, f32) = (0.5, 1.5);
/// Content of the auto-appended quality booster.
const AUTO_DETAIL: &str = "high quality, detailed";
/// Weight of the auto-appended quality booster.
const AUTO_DETAIL_WEIGHT: f32 = 0.8;

/// Optimize a component list.
///
/// - drops case-insensitive content duplicates, keeping the first;
/// - clamps weights into [0.5, 1.5] (clamped, never rejected);
/// - appends an auto-generated detail component when no detail component
///   exists and no content mentions "quality" or "detailed" (the appended
///   component carries the `auto_added` metadata marker);
/// - stable-sorts by [`ComponentType::assembly_priority`].
pub fn optimize_components(components: &[PromptComponent]) -> Vec<PromptComponent> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut optimized: Vec<PromptComponent> = components
        .iter()
        .filter(|c| seen.insert(c.normalized_content()))
        .cloned()
        .collect();

    for component in &mut optimized {
        component.weight = component.weight.clamp(WEIGHT_BAND.0, WEIGHT_BAND.1);
    }

    let has_detail = optimized.iter().any(|c| c.kind == ComponentType::Detail);
    let mentions_quality = optimized.iter().any(|c| {
        let lower = c.content.to_lowercase();
        lower.contains("quality") || lower.contains("detailed")
    });
    if !has_detail && !mentions_quality {
        optimized.push(
            PromptComponent::new(ComponentType::Detail, AUTO_DETAIL)
                .with_weight(AUTO_DETAIL_WEIGHT)
                .with_metadata(META_AUTO_ADDED, true),
        );
    }

    // Sort last so the appended booster lands in priority position and a
    // second pass reproduces the same order.
    optimized.sort_by_key(|c| c.kind.assembly_priority());

    optimized
}
