//! Lookup request / outcome / result.
//!
//! # 形の決まり方
//! - ストアに行がない → `LookupOutcome::NotFound`
//! - 行がある → `LookupOutcome::Found`、ただし `notes` は status が `"OK"` のときだけ `Some`
//!
//! `LookupResult` は呼び出し元に返す JSON body です。
//! `Notes` は `null` ではなく「キーごと存在しない」ことに意味があるため、
//! `skip_serializing_if` で省略します。

use serde::{Deserialize, Serialize};

use super::errors::LookupError;
use super::ids::RecordId;
use super::record::{RecordStatus, StoredRecord};

/// Invocation input: `{"RecordId": "..."}`.
///
/// The runtime hands the handler a raw `serde_json::Value`; `from_value`
/// turns any decoding problem (wrong type, non-object payload) into
/// `LookupError::InvalidRequest`. A missing or `null` `RecordId` decodes to
/// `None` and is rejected by the handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEvent {
    #[serde(rename = "RecordId", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl LookupEvent {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
        }
    }

    pub fn from_value(payload: serde_json::Value) -> Result<Self, LookupError> {
        serde_json::from_value(payload)
            .map_err(|e| LookupError::InvalidRequest(format!("malformed event: {e}")))
    }
}

/// 読み取り結果（NotFound を含むタグ付き variant）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found {
        record_id: RecordId,
        status: RecordStatus,
        notes: Option<String>,
    },
    NotFound,
}

impl LookupOutcome {
    /// StoredRecord から Found を作る。status が OK でなければ notes は捨てる。
    pub fn from_record(record: StoredRecord) -> Self {
        let notes = if record.status.is_ok() {
            record.notes
        } else {
            None
        };
        Self::Found {
            record_id: record.key.record_id,
            status: record.status,
            notes,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// `Found` を `LookupResult` に変換（`NotFound` なら `None`）
    pub fn into_result(self) -> Option<LookupResult> {
        match self {
            Self::Found {
                record_id,
                status,
                notes,
            } => Some(LookupResult {
                record_id,
                status,
                notes,
            }),
            Self::NotFound => None,
        }
    }
}

impl From<Option<StoredRecord>> for LookupOutcome {
    fn from(record: Option<StoredRecord>) -> Self {
        record.map_or(Self::NotFound, Self::from_record)
    }
}

/// Response body of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(rename = "RecordId")]
    pub record_id: RecordId,

    #[serde(rename = "Status")]
    pub status: RecordStatus,

    /// Present only when `status == "OK"`.
    #[serde(rename = "Notes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::RecordKey;
    use serde_json::json;

    fn stored(id: &str, status: &str, notes: Option<&str>) -> StoredRecord {
        StoredRecord::new(
            RecordKey::global(RecordId::new(id).unwrap()),
            RecordStatus::new(status),
            notes.map(str::to_string),
        )
    }

    #[test]
    fn ok_record_keeps_notes() {
        let outcome = LookupOutcome::from_record(stored("DonOfDen002", "OK", Some("hello")));
        let result = outcome.into_result().unwrap();
        assert_eq!(result.notes.as_deref(), Some("hello"));
    }

    #[test]
    fn non_ok_record_drops_notes() {
        let outcome = LookupOutcome::from_record(stored("DonOfDen008", "DRAFT", Some("hidden")));
        match outcome {
            LookupOutcome::Found { status, notes, .. } => {
                assert_eq!(status.as_str(), "DRAFT");
                assert_eq!(notes, None);
            }
            LookupOutcome::NotFound => panic!("expected Found"),
        }
    }

    #[test]
    fn ok_record_without_notes_has_no_notes() {
        let result = LookupOutcome::from_record(stored("DonOfDen003", "OK", None))
            .into_result()
            .unwrap();
        assert_eq!(result.notes, None);
    }

    #[test]
    fn missing_record_is_not_found() {
        let outcome = LookupOutcome::from(None::<StoredRecord>);
        assert!(!outcome.is_found());
        assert_eq!(outcome.into_result(), None);
    }

    #[test]
    fn result_omits_notes_key_instead_of_null() {
        let result = LookupOutcome::from_record(stored("DonOfDen008", "DRAFT", Some("hidden")))
            .into_result()
            .unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({ "RecordId": "DonOfDen008", "Status": "DRAFT" }));
        assert!(value.get("Notes").is_none());
    }

    #[test]
    fn event_without_record_id_still_deserializes() {
        let event: LookupEvent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(event.record_id, None);

        let event: LookupEvent = serde_json::from_value(json!({ "RecordId": "DonOfDen001" })).unwrap();
        assert_eq!(event, LookupEvent::new("DonOfDen001"));
    }

    #[test]
    fn non_string_record_id_is_invalid_request() {
        let err = LookupEvent::from_value(json!({ "RecordId": 5 })).unwrap_err();
        assert!(matches!(err, LookupError::InvalidRequest(_)));
        assert!(err.to_string().starts_with("invalid request: malformed event: invalid type: integer `5`"));

        let err = LookupEvent::from_value(json!("DonOfDen001")).unwrap_err();
        assert!(matches!(err, LookupError::InvalidRequest(_)));
    }
}
