//! DynamoRecordStore - 本番用のレコードストア（aws-sdk-dynamodb）
//!
//! `GetItem` を 1 回だけ発行します:
//! - Key: `RecordId` (S) + `RecordType` (S)
//! - ProjectionExpression: `RecordId, Notes, Status`（`Status` は予約語なので、属性名はすべて `#a0` などの別名で渡す）
//! - ConsistentRead: true

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use crate::config::{CredentialSource, StoreConfig};
use crate::domain::{RecordId, RecordKey, RecordStatus, StoredRecord};
use crate::ports::{ReadOptions, RecordStore, StoreError, attributes};

/// Placeholder prefix for attribute names in projection expressions.
const NAME_PLACEHOLDER_PREFIX: &str = "#a";

#[derive(Clone, Debug)]
pub struct DynamoRecordStore {
    client: Client,
    table_name: String,
}

impl DynamoRecordStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build the SDK client from a resolved `StoreConfig`.
    pub async fn connect(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let CredentialSource::Profile(profile) = config.credential_source() {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        debug!(
            table = %config.table_name,
            credentials = ?config.credential_source(),
            "dynamodb client configured"
        );
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn get_record(
        &self,
        key: &RecordKey,
        options: &ReadOptions,
    ) -> Result<Option<StoredRecord>, StoreError> {
        let (projection, names) = projection_expression(&options.projection);

        let mut request = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                attributes::RECORD_ID,
                AttributeValue::S(key.record_id.as_str().to_string()),
            )
            .key(
                attributes::RECORD_TYPE,
                AttributeValue::S(key.record_type.as_str().to_string()),
            )
            .consistent_read(options.consistent);
        if !projection.is_empty() {
            request = request.projection_expression(projection);
            for (placeholder, name) in names {
                request = request.expression_attribute_names(placeholder, name);
            }
        }

        let output = request
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(&e).to_string()))?;

        match output.item() {
            Some(item) => decode_item(key, item).map(Some),
            None => Ok(None),
        }
    }
}

/// Build `"#a0, #a1, ..."` plus its placeholder map.
///
/// Every attribute goes through a placeholder so reserved words such as
/// `Status` never reach the expression verbatim.
fn projection_expression(attributes: &[&'static str]) -> (String, Vec<(String, &'static str)>) {
    let names: Vec<(String, &'static str)> = attributes
        .iter()
        .enumerate()
        .map(|(i, name)| (format!("{NAME_PLACEHOLDER_PREFIX}{i}"), *name))
        .collect();
    let expression = names
        .iter()
        .map(|(placeholder, _)| placeholder.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    (expression, names)
}

/// Decode a projected item into a `StoredRecord`.
///
/// `Status` is required. `RecordId` falls back to the requested key when it
/// was projected away; `RecordType` is never projected and always comes from
/// the key.
pub fn decode_item(
    key: &RecordKey,
    item: &HashMap<String, AttributeValue>,
) -> Result<StoredRecord, StoreError> {
    let record_id = match optional_string(item, attributes::RECORD_ID)? {
        Some(raw) => RecordId::new(raw).map_err(|e| StoreError::MalformedItem {
            attribute: attributes::RECORD_ID,
            reason: e.to_string(),
        })?,
        None => key.record_id.clone(),
    };
    let status = optional_string(item, attributes::STATUS)?.ok_or_else(|| {
        StoreError::MalformedItem {
            attribute: attributes::STATUS,
            reason: "is missing".to_string(),
        }
    })?;
    let notes = optional_string(item, attributes::NOTES)?;

    Ok(StoredRecord::new(
        RecordKey::new(record_id, key.record_type.clone()),
        RecordStatus::new(status),
        notes,
    ))
}

fn optional_string(
    item: &HashMap<String, AttributeValue>,
    attribute: &'static str,
) -> Result<Option<String>, StoreError> {
    match item.get(attribute) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
        Some(other) => Err(StoreError::MalformedItem {
            attribute,
            reason: format!("is not a string: {other:?}"),
        }),
    }
}
