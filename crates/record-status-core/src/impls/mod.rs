//! Impls - RecordStore の実装
//!
//! # 含まれる実装
//! - **InMemoryRecordStore**: テスト用（読み取りログ付き）
//! - **DynamoRecordStore**: 本番用（aws-sdk-dynamodb）

pub mod dynamo_store;
pub mod inmem_store;

pub use self::dynamo_store::DynamoRecordStore;
pub use self::inmem_store::{InMemoryRecordStore, ServedRead};
