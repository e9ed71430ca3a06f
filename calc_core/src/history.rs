//! # Calculation History
//!
//! Completed calculations, most recent first. The list is bounded: once it
//! holds `capacity` entries, recording another evicts the oldest.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operand::format_number;
use crate::operation::Operation;

/// Default number of calculations kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One completed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub prev: f64,
    pub operation: Operation,
    pub current: f64,
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(prev: f64, operation: Operation, current: f64, result: f64) -> Self {
        HistoryEntry {
            prev,
            operation,
            current,
            result,
        }
    }
}

/// Renders as `"5 + 3 = 8"`.
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.prev),
            self.operation.symbol(),
            format_number(self.current),
            format_number(self.result)
        )
    }
}

/// Bounded, most-recent-first list of calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a calculation at the front, evicting the oldest past capacity.
    ///
    /// Returns the evicted entry, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::history::{History, HistoryEntry};
    /// use calc_core::operation::Operation;
    ///
    /// let mut history = History::with_capacity(2);
    /// history.record(HistoryEntry::new(1.0, Operation::Add, 1.0, 2.0));
    /// history.record(HistoryEntry::new(2.0, Operation::Add, 2.0, 4.0));
    /// let evicted = history.record(HistoryEntry::new(4.0, Operation::Add, 4.0, 8.0));
    ///
    /// assert_eq!(evicted.unwrap().to_string(), "1 + 1 = 2");
    /// assert_eq!(history.lines(), ["4 + 4 = 8", "2 + 2 = 4"]);
    /// ```
    pub fn record(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries rendered as display lines, most recent first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        History::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
