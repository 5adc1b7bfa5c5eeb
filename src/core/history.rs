//! Undo history for executed commands.
//!
//! History entries name the slot that ran, not the command itself. The
//! remote owns the command table, so an entry is an index into it and can
//! never dangle.

use super::command::Slot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed command.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{HistoryEntry, Slot};
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     slot: Slot::FanOn,
///     executed_at: Utc::now(),
/// };
/// assert_eq!(entry.slot, Slot::FanOn);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The slot whose command ran
    pub slot: Slot,
    /// When the command ran
    pub executed_at: DateTime<Utc>,
}

/// Last-in, first-out stack of executed commands.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{CommandHistory, Slot};
///
/// let mut history = CommandHistory::new();
/// history.push(Slot::LightOn);
/// history.push(Slot::FanOff);
///
/// assert_eq!(history.slots(), vec![Slot::LightOn, Slot::FanOff]);
/// assert_eq!(history.pop().map(|e| e.slot), Some(Slot::FanOff));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
}

impl CommandHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record that `slot` ran now.
    pub fn push(&mut self, slot: Slot) {
        self.record(HistoryEntry {
            slot,
            executed_at: Utc::now(),
        });
    }

    /// Record an entry with an explicit timestamp.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The most recent entry, if any.
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Slots in execution order, oldest first.
    pub fn slots(&self) -> Vec<Slot> {
        self.entries.iter().map(|e| e.slot).collect()
    }

    /// Time between the oldest and newest entry.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.executed_at.signed_duration_since(first.executed_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
