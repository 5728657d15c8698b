//! Timestamp-derived identifiers.

use chrono::{DateTime, Utc};

/// Issues ids of the form `<prefix>-<millis>`.
///
/// The numeric part is the creation time in epoch milliseconds, bumped past
/// the last issued value so two files created in the same millisecond still
/// get distinct ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        let stamp = now.timestamp_millis().max(self.last + 1);
        self.last = stamp;
        format!("{prefix}-{stamp}")
    }
}
