//! RecordStore port - 複合キーによる一貫性読み取り（DynamoDB または InMemory）
//!
//! # 設計原則
//! - 読み取り専用（書き込みは別システムの責務）
//! - 1 回の lookup につき 1 回の point read
//! - 再試行・ページング・バッチはしない

use async_trait::async_trait;

use crate::domain::{RecordKey, StoredRecord};

/// Attribute names of the backing table.
pub mod attributes {
    pub const RECORD_ID: &str = "RecordId";
    pub const RECORD_TYPE: &str = "RecordType";
    pub const STATUS: &str = "Status";
    pub const NOTES: &str = "Notes";
}

/// Point-read options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Strongly-consistent read (reflects the most recent write).
    pub consistent: bool,

    /// Attributes to project; everything else is left out of the item.
    pub projection: Vec<&'static str>,
}

impl ReadOptions {
    /// lookup が使う読み取り設定: consistent read + `RecordId, Notes, Status`
    pub fn status_lookup() -> Self {
        Self {
            consistent: true,
            projection: vec![attributes::RECORD_ID, attributes::NOTES, attributes::STATUS],
        }
    }
}

/// StoreError はストア層の失敗
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("malformed item: attribute {attribute} {reason}")]
    MalformedItem {
        attribute: &'static str,
        reason: String,
    },
}

/// RecordStore は StoredRecord の読み取り口
///
/// 行が存在しない場合は `Ok(None)`。NotFound への変換は app 層の責務です。
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_record(
        &self,
        key: &RecordKey,
        options: &ReadOptions,
    ) -> Result<Option<StoredRecord>, StoreError>;
}
