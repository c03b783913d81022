//! # Order Number Sequencer
//!
//! Issues human-readable order numbers, restarting the counter each day.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Number Anatomy                                │
//! │                                                                         │
//! │       C - 15 - 26 - 3                                                   │
//! │       │   │    │    └── counter within the day (starts at 1)           │
//! │       │   │    └─────── two-digit year (2026)                          │
//! │       │   └──────────── two-digit day of month                         │
//! │       └──────────────── fixed prefix                                   │
//! │                                                                         │
//! │  Counters are keyed by the FULL day key "YYYY-MM-DD" (UTC), so the     │
//! │  15th of two different months never share a counter even though the    │
//! │  printed number only shows day and year.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fallback
//! If persisting the bumped counter fails, the sequencer still returns a
//! usable number: `C-{DD}-{YY}-{millis}` with the current Unix-epoch
//! milliseconds in the counter slot. Unique enough for receipts, and the
//! register keeps selling while the disk misbehaves.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::blob::{BlobStore, DAILY_COUNTERS};

/// Date-scoped order number source backed by the `daily_counters` collection.
///
/// Read-modify-write on the counter map is not atomic across processes; the
/// store assumes a single register instance owns the data directory.
#[derive(Debug, Clone)]
pub struct OrderSequencer {
    blob: BlobStore,
}

impl OrderSequencer {
    pub fn new(blob: BlobStore) -> Self {
        OrderSequencer { blob }
    }

    /// Issues the next order number for today (UTC).
    pub fn next_order_number(&self) -> String {
        self.next_order_number_at(Utc::now())
    }

    /// Issues the next order number as of `now`. Exposed for deterministic
    /// tests; production callers use [`next_order_number`].
    ///
    /// [`next_order_number`]: OrderSequencer::next_order_number
    pub fn next_order_number_at(&self, now: DateTime<Utc>) -> String {
        let day_key = now.format("%Y-%m-%d").to_string();
        let day = now.format("%d");
        let year = now.format("%y");

        let mut counters: BTreeMap<String, u64> = self.blob.read(DAILY_COUNTERS);
        let next = counters.get(&day_key).copied().unwrap_or(0) + 1;
        counters.insert(day_key, next);

        match self.blob.write(DAILY_COUNTERS, &counters) {
            Ok(()) => format!("C-{day}-{year}-{next}"),
            Err(err) => {
                warn!(
                    error = %err,
                    "failed to persist order counter, falling back to timestamp suffix"
                );
                format!("C-{day}-{year}-{}", now.timestamp_millis())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
