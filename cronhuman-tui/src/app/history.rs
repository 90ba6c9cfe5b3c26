//! Bounded history of submitted expressions
//!
//! Newest-first ring with a navigation cursor. Appending the same text the
//! ring already has on top is a no-op (adjacent de-duplication only); once
//! full, each insertion evicts exactly the oldest entry.

use std::time::SystemTime;

/// Maximum number of retained entries.
pub const HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub expression: String,
    pub created_at: SystemTime,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryRing {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression, newest first.
    ///
    /// Rejects input that trims to empty and input equal to the current
    /// newest entry. Returns whether an entry was added.
    pub fn append(&mut self, expression: &str) -> bool {
        if expression.trim().is_empty() {
            return false;
        }
        if self.entries.first().map(|e| e.expression.as_str()) == Some(expression) {
            return false;
        }

        self.entries.insert(
            0,
            HistoryEntry {
                expression: expression.to_string(),
                created_at: SystemTime::now(),
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor into the newest-first order; always within `[0, len-1]` for a
    /// non-empty ring.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping at both ends (no wraparound).
    pub fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = (self.entries.len() - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    /// The entry under the cursor, if any.
    pub fn selected(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }
}
