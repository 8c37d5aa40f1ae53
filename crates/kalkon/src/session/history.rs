//! Ordered history of committed evaluations.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// A single committed evaluation.
///
/// Entries are immutable once created; the session only ever appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonic insertion index. Survives eviction, so the first entry in a
    /// bounded history is not necessarily index 0.
    pub index: u64,
    /// The expression text as entered.
    pub expression: String,
    /// The numeric result.
    pub value: Value,
    /// The result as rendered at evaluation time.
    pub display: String,
}

/// Retention policy for the history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep every entry.
    Unbounded,
    /// Keep at most this many entries, evicting the oldest.
    Bounded(usize),
}

impl RetentionPolicy {
    /// Default bounded capacity.
    pub const DEFAULT_CAPACITY: usize = 100;
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        RetentionPolicy::Bounded(Self::DEFAULT_CAPACITY)
    }
}

/// Append-only store of past evaluations, in insertion order.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_index: u64,
    policy: RetentionPolicy,
}

impl History {
    /// Create an empty history with the default retention policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with the given retention policy.
    pub fn with_policy(policy: RetentionPolicy) -> Self {
        Self {
            entries: VecDeque::new(),
            next_index: 0,
            policy,
        }
    }

    /// Append an evaluation, evicting the oldest entry if the policy is
    /// bounded and full. Returns the new entry's index.
    pub fn append(
        &mut self,
        expression: impl Into<String>,
        value: Value,
        display: impl Into<String>,
    ) -> u64 {
        let index = self.next_index;
        self.next_index += 1;
        self.entries.push_back(HistoryEntry {
            index,
            expression: expression.into(),
            value,
            display: display.into(),
        });
        if let RetentionPolicy::Bounded(capacity) = self.policy {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }
        index
    }

    /// All retained entries, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured retention policy.
    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Remove all entries. The insertion counter keeps running.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
