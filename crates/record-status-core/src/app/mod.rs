//! App - アプリケーション層
//!
//! ports を組み合わせて lookup のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **RecordStatusLookup**: 1 回の consistent read と notes の絞り込み
//! - **RecordStatusHandler**: invocation event → ResponseEnvelope

pub mod handler;
pub mod lookup;

pub use self::handler::{RecordStatusHandler, ResponseEnvelope};
pub use self::lookup::RecordStatusLookup;
