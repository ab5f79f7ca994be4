// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Bounded generation history and analytics counters.
//!
//! Both are in-memory only; nothing here persists or exports anything.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// The assembled positive prompt.
    pub prompt: String,
    /// The assembled negative prompt.
    pub negative_prompt: String,
    /// How many components (both sequences) the state held.
    pub component_count: usize,
    /// When the prompt was generated.
    pub created_at: DateTime<Utc>,
}

/// Ring buffer of generation records, oldest evicted first.
#[derive(Debug, Clone, Default)]
pub(crate) struct GenerationHistory {
    records: VecDeque<GenerationRecord>,
    capacity: usize,
}

impl GenerationHistory {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, record: GenerationRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub(crate) fn records(&self) -> &VecDeque<GenerationRecord> {
        &self.records
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

/// Plain operation counters, collected only when analytics is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineAnalytics {
    /// Prompts assembled.
    pub prompts_generated: u64,
    /// Validation passes run.
    pub validations_run: u64,
    /// Components inserted.
    pub components_added: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prompt: &str) -> GenerationRecord {
        GenerationRecord {
            prompt: prompt.to_string(),
            negative_prompt: String::new(),
            component_count: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = GenerationHistory::new(2);
        history.push(record("one"));
        history.push(record("two"));
        history.push(record("three"));
        let prompts: Vec<&str> = history.records().iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut history = GenerationHistory::new(0);
        history.push(record("one"));
        assert!(history.records().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = GenerationHistory::new(4);
        history.push(record("one"));
        history.clear();
        assert!(history.records().is_empty());
    }
}
