use crate::domain::repositories::BoxError;
use aws_config::BehaviorVersion;

const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Where feedback documents are kept, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackDatabaseSettings {
    DynamoDb {
        table_name: String,
        endpoint_url: Option<String>,
    },
    Memory,
}

impl FeedbackDatabaseSettings {
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "dynamodb".to_string());

        match backend.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "dynamodb" => {
                let table_name = lookup(TABLE_NAME_VAR)
                    .filter(|name| !name.is_empty())
                    .ok_or(format!("{} is not set", TABLE_NAME_VAR))?;
                let endpoint_url = lookup("DYNAMODB_ENDPOINT_URL").filter(|url| !url.is_empty());

                Ok(Self::DynamoDb {
                    table_name,
                    endpoint_url,
                })
            }
            other => Err(format!("Unknown STORE_BACKEND: {}", other).into()),
        }
    }
}

pub async fn dynamodb_client(endpoint_url: Option<&str>) -> aws_sdk_dynamodb::Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&config);
    if let Some(endpoint_url) = endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }
    aws_sdk_dynamodb::Client::from_conf(builder.build())
}
