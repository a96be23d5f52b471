//! Errors - エラー型と分類
//!
//! 境界ではすべて 500 + メッセージ文字列に落ちますが、
//! 内部では NotFound（想定内・利用者向け）とそれ以外（想定外）を区別します。

use crate::ports::StoreError;

use super::ids::RecordIdError;

/// ErrorKind は lookup エラーの分類
///
/// - Expected: 行が存在しない（利用者向けのメッセージ）
/// - Unexpected: ストア障害・不正な入力・シリアライズ失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Expected,
    Unexpected,
}

/// LookupError は RecordStatusLookup の失敗
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No Records Found.")]
    NotFound,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to serialize lookup result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::Expected,
            Self::InvalidRequest(_) | Self::Store(_) | Self::Serialization(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    /// メッセージをパースせずに NotFound を判別するためのヘルパー
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<RecordIdError> for LookupError {
    fn from(err: RecordIdError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}
