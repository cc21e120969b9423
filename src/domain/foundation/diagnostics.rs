//! Diagnostics channel for content-level fallbacks.
//!
//! Rendering never fails on a missing piece of content; it substitutes a
//! default and keeps going. This collector is the observable side of that
//! contract: every substitution is recorded so content gaps can be tested
//! and monitored without changing what the user sees.

use serde::Serialize;

/// A single field that was filled from a default during composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultedField {
    /// Where the fallback happened (section or component name).
    pub location: String,
    /// Which lookup missed.
    pub field: String,
}

/// Ordered record of every defaulted field in one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    defaulted: Vec<DefaultedField>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a defaulted field.
    pub fn record(&mut self, location: impl Into<String>, field: impl Into<String>) {
        let entry = DefaultedField {
            location: location.into(),
            field: field.into(),
        };
        tracing::debug!(location = %entry.location, field = %entry.field, "content fallback");
        self.defaulted.push(entry);
    }

    /// Returns all defaulted fields in the order they were recorded.
    pub fn defaulted(&self) -> &[DefaultedField] {
        &self.defaulted
    }

    /// Returns true when composition used no fallbacks.
    pub fn is_clean(&self) -> bool {
        self.defaulted.is_empty()
    }

    /// Returns true if any fallback was recorded at the given location.
    pub fn has_location(&self, location: &str) -> bool {
        self.defaulted.iter().any(|d| d.location == location)
    }
}
