use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

use record_status_core::impls::DynamoRecordStore;
use record_status_core::{RecordStatusHandler, ResponseEnvelope, StoreConfig};

type Handler = RecordStatusHandler<DynamoRecordStore>;

/// 1 invocation 分の処理。エラーは envelope の中に入るので、ここでは失敗しない
///
/// payload は `Value` のまま受け取り、デコードは handler 側で行う
/// （`RecordId` の型違いも 500 の envelope にするため）。
async fn invoke(
    handler: Arc<Handler>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "invocation received");
    Ok(handler.handle_value(payload).await)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "record_status_core=info,record_status_lambda=info".into()),
        )
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // (A) 環境変数から設定を解決（ここ以外では環境変数を読まない）
    let config = StoreConfig::from_env()?;
    info!(
        table = %config.table_name,
        development = config.stage.is_development(),
        "configuration resolved"
    );

    // (B) client は起動時に 1 回だけ作り、invocation 間で共有する
    let store = DynamoRecordStore::connect(&config).await;
    let handler = Arc::new(RecordStatusHandler::new(store));

    // (C) Lambda runtime に登録
    lambda_runtime::run(service_fn(move |event| invoke(handler.clone(), event))).await
}
