//! # Calculation History
//!
//! A bounded, most-recent-first list of formatted records. Both the keypad
//! evaluator and the quadratic solver own one and push to it after every
//! successful computation.
//!
//! ```rust
//! use calc_core::history::History;
//!
//! let mut history = History::with_capacity(2);
//! history.push("1 + 1 = 2");
//! history.push("2 + 2 = 4");
//! history.push("3 + 3 = 6");
//!
//! let texts: Vec<&str> = history.iter().map(|e| e.text()).collect();
//! assert_eq!(texts, ["3 + 3 = 6", "2 + 2 = 4"]);
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of entries kept by a history buffer
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One completed computation.
///
/// Entries are immutable once created; the fields are only readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: Uuid,
    text: String,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(text: String) -> Self {
        HistoryEntry {
            id: Uuid::new_v4(),
            text,
            recorded_at: Utc::now(),
        }
    }

    /// Unique id, stable for the lifetime of the entry (used as a list key)
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Formatted record, e.g. `"5 + 3 = 8"`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the computation completed
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Bounded history buffer, newest entry first.
///
/// Deserialized buffers are normalized like [`History::with_capacity`]: the
/// capacity is at least one and the oldest surplus entries are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

/// Serialized shape of [`History`], before its bounds are enforced
#[derive(Deserialize)]
struct StoredHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl From<StoredHistory> for History {
    fn from(stored: StoredHistory) -> Self {
        let mut history = History::with_capacity(stored.capacity);
        history.entries = stored.entries;
        history.entries.truncate(history.capacity);
        history
    }
}

impl Default for History {
    fn default() -> Self {
        History::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a computation at the front, evicting the oldest entry when full.
    pub fn push(&mut self, text: impl Into<String>) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry::new(text.into()));
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entry by position, `0` being the newest
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Formatted records, newest first
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }
}
