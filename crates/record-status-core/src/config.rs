//! Store configuration resolved once at process startup.
//!
//! # 環境変数
//! - `TableName` (必須): DynamoDB のテーブル名
//! - `STAGE` (必須): `DEVELOPMENT` のときは名前付きプロファイルの認証情報を使う
//! - `AWS_PROFILE_NAME`: 開発時に使うプロファイル（デフォルト `default`）
//! - `AWS_REGION`: リージョンの上書き
//! - `DYNAMODB_ENDPOINT_URL`: ローカル DynamoDB などへのエンドポイント上書き
//!
//! コアロジックは環境変数を直接読みません。エントリポイントが
//! `StoreConfig::from_env()` で解決し、ストアの構築時に注入します。

pub const TABLE_NAME_VAR: &str = "TableName";
pub const STAGE_VAR: &str = "STAGE";
pub const PROFILE_VAR: &str = "AWS_PROFILE_NAME";
pub const REGION_VAR: &str = "AWS_REGION";
pub const ENDPOINT_VAR: &str = "DYNAMODB_ENDPOINT_URL";

const DEFAULT_PROFILE: &str = "default";

/// Deployment stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Local development: credentials come from a named profile.
    Development,
    /// Anything else: the default credential chain.
    Deployed(String),
}

impl Stage {
    pub fn parse(raw: &str) -> Self {
        if raw == "DEVELOPMENT" {
            Self::Development
        } else {
            Self::Deployed(raw.to_string())
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// How the SDK should pick credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Profile(String),
    DefaultChain,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} must not be empty")]
    EmptyVar(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub table_name: String,
    pub stage: Stage,
    pub profile: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    pub fn new(table_name: impl Into<String>, stage: Stage) -> Self {
        Self {
            table_name: table_name.into(),
            stage,
            profile: DEFAULT_PROFILE.to_string(),
            region: None,
            endpoint_url: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve from an arbitrary variable lookup (used by `from_env` and tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                None => Err(ConfigError::MissingVar(name)),
                Some(value) if value.is_empty() => Err(ConfigError::EmptyVar(name)),
                Some(value) => Ok(value),
            }
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let table_name = required(TABLE_NAME_VAR)?;
        let stage = Stage::parse(&required(STAGE_VAR)?);

        Ok(Self {
            table_name,
            stage,
            profile: optional(PROFILE_VAR).unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
            region: optional(REGION_VAR),
            endpoint_url: optional(ENDPOINT_VAR),
        })
    }

    pub fn credential_source(&self) -> CredentialSource {
        if self.stage.is_development() {
            CredentialSource::Profile(self.profile.clone())
        } else {
            CredentialSource::DefaultChain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn resolves_minimal_config() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("TableName", "lambda-table-for-blog"),
            ("STAGE", "PRODUCTION"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "lambda-table-for-blog");
        assert_eq!(config.stage, Stage::Deployed("PRODUCTION".to_string()));
        assert_eq!(config.credential_source(), CredentialSource::DefaultChain);
        assert_eq!(config.region, None);
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn development_uses_profile() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("TableName", "t"),
            ("STAGE", "DEVELOPMENT"),
        ]))
        .unwrap();
        assert_eq!(
            config.credential_source(),
            CredentialSource::Profile("default".to_string())
        );

        let config = StoreConfig::from_lookup(lookup_from(&[
            ("TableName", "t"),
            ("STAGE", "DEVELOPMENT"),
            ("AWS_PROFILE_NAME", "blog"),
            ("AWS_REGION", "eu-west-2"),
            ("DYNAMODB_ENDPOINT_URL", "http://localhost:8000"),
        ]))
        .unwrap();
        assert_eq!(
            config.credential_source(),
            CredentialSource::Profile("blog".to_string())
        );
        assert_eq!(config.region.as_deref(), Some("eu-west-2"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
    }

    #[rstest]
    #[case::no_table(&[("STAGE", "DEVELOPMENT")], ConfigError::MissingVar("TableName"))]
    #[case::no_stage(&[("TableName", "t")], ConfigError::MissingVar("STAGE"))]
    #[case::empty_table(&[("TableName", ""), ("STAGE", "DEVELOPMENT")], ConfigError::EmptyVar("TableName"))]
    fn missing_required_vars_fail(#[case] pairs: &[(&str, &str)], #[case] expected: ConfigError) {
        let err = StoreConfig::from_lookup(lookup_from(pairs)).unwrap_err();
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case::development("DEVELOPMENT", true)]
    #[case::lowercase("development", false)]
    #[case::production("PRODUCTION", false)]
    fn only_exact_development_stage_is_development(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(Stage::parse(raw).is_development(), expected);
    }
}
