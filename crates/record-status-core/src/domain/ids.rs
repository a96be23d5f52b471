//! Record identifiers (strongly-typed keys).
//!
//! # 複合キー
//! テーブルは `RecordId`（partition key）と `RecordType`（sort key）の
//! 複合キーで管理されています。
//!
//! このシステムが読むのは常に `RecordType = "global"` の行だけです。
//! 文字列をそのまま渡すのではなく newtype で包むことで、
//! partition key と sort key を取り違えるミスをコンパイル時に防ぎます。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 検証済みのレコード識別子
///
/// 中身は呼び出し元が決める不透明な文字列です。
/// 空文字列だけは受け付けません（それ以上の検証はストア側に任せる）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

/// RecordId の生成に失敗したときのエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    #[error("RecordId must not be empty")]
    Empty,
}

impl RecordId {
    pub fn new(value: impl Into<String>) -> Result<Self, RecordIdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(RecordIdError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Sort key category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    /// The only category this system reads.
    pub const GLOBAL: &'static str = "global";

    pub fn global() -> Self {
        Self(Self::GLOBAL.to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite key of a stored record: (RecordId, RecordType).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub record_id: RecordId,
    pub record_type: RecordType,
}

impl RecordKey {
    pub fn new(record_id: RecordId, record_type: RecordType) -> Self {
        Self {
            record_id,
            record_type,
        }
    }

    /// `(record_id, "global")` のキーを作成
    pub fn global(record_id: RecordId) -> Self {
        Self::new(record_id, RecordType::global())
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.record_id, self.record_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_id_is_rejected() {
        assert_eq!(RecordId::new(""), Err(RecordIdError::Empty));
        assert_eq!(RecordId::try_from(String::new()), Err(RecordIdError::Empty));
    }

    #[test]
    fn record_id_is_opaque() {
        // 空でなければ何でも通す（空白だけでも拒否しない）
        let id = RecordId::new("  DonOfDen/001 ").unwrap();
        assert_eq!(id.as_str(), "  DonOfDen/001 ");
    }

    #[test]
    fn global_key_uses_global_category() {
        let key = RecordKey::global(RecordId::new("DonOfDen002").unwrap());
        assert_eq!(key.record_type.as_str(), "global");
        assert_eq!(key.to_string(), "DonOfDen002/global");
    }

    #[test]
    fn record_id_serializes_as_plain_string() {
        let id = RecordId::new("DonOfDen002").unwrap();
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"DonOfDen002\"");
    }
}
