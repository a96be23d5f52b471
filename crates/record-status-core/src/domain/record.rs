//! Stored record and its status.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordKey;

/// Record status value.
///
/// Stored as a free-form string; only `"OK"` carries meaning for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStatus(String);

impl RecordStatus {
    /// Notes are only exposed for records in this status.
    pub const OK: &'static str = "OK";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive match against `"OK"`.
    pub fn is_ok(&self) -> bool {
        self.0 == Self::OK
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record as read from the store.
///
/// This system never writes records; they are created and mutated by a
/// separate write path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub key: RecordKey,
    pub status: RecordStatus,
    pub notes: Option<String>,
}

impl StoredRecord {
    pub fn new(key: RecordKey, status: RecordStatus, notes: Option<String>) -> Self {
        Self { key, status, notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::ok("OK", true)]
    #[case::draft("DRAFT", false)]
    #[case::lowercase("ok", false)]
    #[case::padded(" OK", false)]
    #[case::empty("", false)]
    fn only_exact_ok_is_ok(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(RecordStatus::new(raw).is_ok(), expected);
    }
}
