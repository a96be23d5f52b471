//! record-status-core
//!
//! Record status lookup against a composite-key store.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, record, lookup, errors）
//! - **ports**: 抽象化レイヤー（RecordStore）
//! - **impls**: 実装（InMemoryRecordStore, DynamoRecordStore）
//! - **app**: アプリケーションロジック（RecordStatusLookup, RecordStatusHandler）
//! - **config**: 起動時に解決するストア設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{RecordStatusHandler, RecordStatusLookup, ResponseEnvelope};
pub use config::StoreConfig;
pub use domain::{LookupError, LookupEvent, LookupOutcome, LookupResult};
