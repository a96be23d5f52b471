//! RecordStatusLookup - 1 件のレコードの status を引く
//!
//! # フロー
//! 1. identifier を検証（空文字列は InvalidRequest）
//! 2. `(identifier, "global")` で consistent read を 1 回
//! 3. 行がなければ NotFound、あれば status に応じて notes を絞り込む

use tracing::{debug, instrument};

use crate::domain::{LookupError, LookupOutcome, LookupResult, RecordId, RecordKey};
use crate::ports::{ReadOptions, RecordStore};

pub struct RecordStatusLookup<S> {
    store: S,
    options: ReadOptions,
}

impl<S: RecordStore> RecordStatusLookup<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            options: ReadOptions::status_lookup(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the record and keep the tagged outcome (`NotFound` is not an error here).
    #[instrument(skip_all, fields(record_id = %identifier))]
    pub async fn resolve(&self, identifier: &str) -> Result<LookupOutcome, LookupError> {
        let record_id = RecordId::new(identifier)?;
        let key = RecordKey::global(record_id);

        let record = self.store.get_record(&key, &self.options).await?;
        debug!(found = record.is_some(), "point read finished");
        Ok(LookupOutcome::from(record))
    }

    /// `resolve` with `NotFound` turned into `LookupError::NotFound`.
    pub async fn lookup(&self, identifier: &str) -> Result<LookupResult, LookupError> {
        self.resolve(identifier)
            .await?
            .into_result()
            .ok_or(LookupError::NotFound)
    }
}
