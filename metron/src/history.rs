//! Session conversion history
//!
//! An append-only list of successful conversions, owned by the presentation
//! layer (one per session, never shared). The full list persists for the
//! session; only the [`RECENT_WINDOW`] newest records are displayed.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// How many records the rolling history view shows
pub const RECENT_WINDOW: usize = 5;

/// One successful conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Local>,
    pub value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
    pub category: String,
}

impl ConversionRecord {
    /// Create a record stamped with the current local time
    pub fn new(value: f64, from_unit: &str, result: f64, to_unit: &str, category: &str) -> Self {
        ConversionRecord {
            timestamp: Local::now(),
            value,
            from_unit: from_unit.to_string(),
            result,
            to_unit: to_unit.to_string(),
            category: category.to_string(),
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} -> {:.8} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.value,
            self.from_unit,
            self.result,
            self.to_unit
        )
    }
}

/// Append-only, session-scoped conversion list
#[derive(Debug, Default)]
pub struct History {
    records: Vec<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Append a record (successful conversions only)
    pub fn push(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full session list, oldest first
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    /// The displayed view: newest first, at most [`RECENT_WINDOW`] records
    pub fn recent(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter().rev().take(RECENT_WINDOW)
    }
}
