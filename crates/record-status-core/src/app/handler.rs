//! RecordStatusHandler - invocation event を HTTP 風の envelope に変換する
//!
//! # 変換ルール
//! - 成功: `{"statusCode": 200, "body": "<LookupResult の JSON 文字列>"}`
//! - 失敗: `{"statusCode": 500, "error": "<エラーメッセージ>"}`
//!
//! NotFound も 500 になります（呼び出し元はメッセージで判別する）。

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::lookup::RecordStatusLookup;
use crate::domain::{LookupError, LookupEvent};
use crate::ports::RecordStore;

pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

/// Response envelope returned to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Success {
        #[serde(rename = "statusCode")]
        status_code: u16,
        body: String,
    },
    Failure {
        #[serde(rename = "statusCode")]
        status_code: u16,
        error: String,
    },
}

impl ResponseEnvelope {
    pub fn success(body: String) -> Self {
        Self::Success {
            status_code: STATUS_OK,
            body,
        }
    }

    pub fn failure(error: &LookupError) -> Self {
        Self::Failure {
            status_code: STATUS_ERROR,
            error: error.to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { status_code, .. } | Self::Failure { status_code, .. } => *status_code,
        }
    }
}

pub struct RecordStatusHandler<S> {
    lookup: RecordStatusLookup<S>,
}

impl<S: RecordStore> RecordStatusHandler<S> {
    pub fn new(store: S) -> Self {
        Self {
            lookup: RecordStatusLookup::new(store),
        }
    }

    pub fn lookup(&self) -> &RecordStatusLookup<S> {
        &self.lookup
    }

    /// Handle one invocation. Never fails; errors become a 500 envelope.
    pub async fn handle(&self, event: LookupEvent) -> ResponseEnvelope {
        Self::respond(self.try_handle(event).await)
    }

    /// Same as `handle`, for the raw payload as delivered by the runtime.
    /// Payloads that do not decode as `LookupEvent` also become a 500 envelope.
    pub async fn handle_value(&self, payload: serde_json::Value) -> ResponseEnvelope {
        let result = match LookupEvent::from_value(payload) {
            Ok(event) => self.try_handle(event).await,
            Err(err) => Err(err),
        };
        Self::respond(result)
    }

    fn respond(result: Result<String, LookupError>) -> ResponseEnvelope {
        match result {
            Ok(body) => {
                info!(status_code = STATUS_OK, "record status returned");
                ResponseEnvelope::success(body)
            }
            Err(err) => {
                warn!(status_code = STATUS_ERROR, kind = ?err.kind(), error = %err, "record lookup failed");
                ResponseEnvelope::failure(&err)
            }
        }
    }

    async fn try_handle(&self, event: LookupEvent) -> Result<String, LookupError> {
        let identifier = event
            .record_id
            .ok_or_else(|| LookupError::InvalidRequest("missing field RecordId".to_string()))?;
        let result = self.lookup.lookup(&identifier).await?;
        Ok(serde_json::to_string(&result)?)
    }
}
