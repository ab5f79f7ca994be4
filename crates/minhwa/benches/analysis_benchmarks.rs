// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Benchmarks for the analysis pipeline and prompt assembly.
//!
//! Both paths run on every keystroke in interactive hosts, so the core
//! loop is expected to stay well under a millisecond.

use criterion::{criterion_group, criterion_main, Criterion};

use minhwa::analysis::analyze_prompt;
use minhwa::component::{ComponentType, PromptComponent};
use minhwa::config::EngineConfig;
use minhwa::engine::PromptEngine;

fn sample_components() -> Vec<PromptComponent> {
    vec![
        PromptComponent::new(ComponentType::Subject, "portrait of a young woman").with_weight(1.2),
        PromptComponent::new(ComponentType::Style, "impressionist oil painting"),
        PromptComponent::new(ComponentType::Medium, "oil on canvas"),
        PromptComponent::new(ComponentType::Lighting, "soft window light").with_weight(0.8),
        PromptComponent::new(ComponentType::Camera, "85mm lens, shallow depth of field"),
        PromptComponent::new(ComponentType::Mood, "quiet, contemplative"),
        PromptComponent::new(ComponentType::Detail, "intricate brushstrokes, masterpiece"),
    ]
}

fn bench_analyze(c: &mut Criterion) {
    let components = sample_components();
    let negatives = vec![PromptComponent::new(
        ComponentType::Negative,
        "low quality, blurry, deformed",
    )];

    c.bench_function("analyze_7_components", |b| {
        b.iter(|| analyze_prompt(&components, &negatives, &[]))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut engine = PromptEngine::new(EngineConfig::default().with_history(false));
    for component in sample_components() {
        engine.add_component(component).expect("under capacity");
    }

    c.bench_function("generate_7_components", |b| b.iter(|| engine.generate_prompt()));
}

criterion_group!(benches, bench_analyze, bench_generate);
criterion_main!(benches);
