//! Calculation tape
//!
//! Records every completed computation so frontends can show what was
//! worked out, the way a desk calculator prints a paper tape.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::format::format_result;
use super::state::Computation;

/// A single line on the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The expression that was computed, e.g. `6 ÷ 3`
    pub expression: String,
    /// The rounded result as shown on the display
    pub result: String,
}

impl TapeEntry {
    /// Creates a tape entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Creates an entry from a computation
    #[must_use]
    pub fn from_computation(computation: &Computation, precision: usize) -> Self {
        Self::new(
            computation.expression(precision),
            format_result(computation.result, precision),
        )
    }

    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded tape; the oldest entry is dropped once capacity is reached
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a tape with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape with custom capacity (at least one entry)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Appends an entry
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a computation
    pub fn record(&mut self, computation: &Computation, precision: usize) {
        self.push(TapeEntry::from_computation(computation, precision));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears the tape
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Serializes the tape to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Restores a tape from JSON, keeping at most `capacity` newest entries
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::with_capacity(capacity);
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }

    /// One `expression = result` line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(TapeEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
