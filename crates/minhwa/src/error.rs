// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Error types.
//!
//! The core is deliberately hard to fail: analysis is total, and mutators
//! report not-found through `bool` returns. The only operation that can
//! fail outright is `add_component` when the positive-component bound is
//! reached.

use thiserror::Error;

/// Result type alias for minhwa operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Main error type for the minhwa library.
#[derive(Error, Debug)]
pub enum Error {
    /// The positive-component bound was reached.
    #[error("component capacity reached: limit is {limit}")]
    CapacityExceeded {
        /// The configured `max_components` bound.
        limit: usize,
    },

    /// JSON errors from host-side serialization helpers.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a capacity error carrying the configured limit.
    pub fn capacity(limit: usize) -> Self {
        Self::CapacityExceeded { limit }
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Whether this is the capacity error.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}
