//! InMemoryRecordStore - テスト専用のレコードストア
//!
//! # 実装詳細
//! - HashMap<RecordKey, StoredRecord> を RwLock で保護
//! - 受け付けた読み取り（キーと ReadOptions）をすべて記録し、テストから検証できるようにする
//! - `insert` はテストのシード用で、RecordStore の書き込み API ではありません
//!
//! 読み取りログは上限なく増えるので、長く生きるプロセスでは使わないこと。
//! 本番・開発環境では `DynamoRecordStore`（ローカルなら `DYNAMODB_ENDPOINT_URL`）を使う。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::{RecordKey, StoredRecord};
use crate::ports::{ReadOptions, RecordStore, StoreError, attributes};

/// A read served by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedRead {
    pub key: RecordKey,
    pub options: ReadOptions,
}

/// InMemoryRecordStore はテスト用のレコードストア（1 テスト = 1 インスタンス）
///
/// # 使用例
/// ```ignore
/// let store = InMemoryRecordStore::new();
/// store.insert(record).await;
/// let found = store.get_record(&key, &ReadOptions::status_lookup()).await?;
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<RecordKey, StoredRecord>>>,
    reads: Arc<Mutex<Vec<ServedRead>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, replacing any record under the same key.
    pub async fn insert(&self, record: StoredRecord) {
        let mut records = self.records.write().await;
        records.insert(record.key.clone(), record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Reads served so far, oldest first.
    pub async fn reads(&self) -> Vec<ServedRead> {
        self.reads.lock().await.clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_record(
        &self,
        key: &RecordKey,
        options: &ReadOptions,
    ) -> Result<Option<StoredRecord>, StoreError> {
        self.reads.lock().await.push(ServedRead {
            key: key.clone(),
            options: options.clone(),
        });

        let records = self.records.read().await;
        let Some(record) = records.get(key) else {
            return Ok(None);
        };

        // projection に含まれない属性は返さない
        let mut record = record.clone();
        if !options.projection.contains(&attributes::NOTES) {
            record.notes = None;
        }
        Ok(Some(record))
    }
}
