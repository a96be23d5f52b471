//! Ports - 抽象化レイヤー
//!
//! 外部システム（DynamoDB）へのインターフェースを trait として定義し、
//! 実装の詳細を隠蔽します。実装は `impls` にあります。

pub mod record_store;

pub use self::record_store::{ReadOptions, RecordStore, StoreError, attributes};
