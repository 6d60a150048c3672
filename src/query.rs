use crate::types::ProductRecord;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Transport failure or non-success status.
    #[error("Search backend unreachable: {0}")]
    Network(String),

    /// Body was not JSON or did not carry a `response` array.
    #[error("Malformed search response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Network(err.to_string())
    }
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Anything that can answer a free-text product query.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    async fn query(&self, text: &str) -> QueryResult<Vec<ProductRecord>>;
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    response: Option<serde_json::Value>,
}

/// Parse a search backend body. An absent or `null` `response` means no results.
pub fn parse_query_response(body: &str) -> QueryResult<Vec<ProductRecord>> {
    let parsed: QueryResponse =
        serde_json::from_str(body).map_err(|e| QueryError::Malformed(e.to_string()))?;
    match parsed.response {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(value @ serde_json::Value::Array(_)) => {
            serde_json::from_value(value).map_err(|e| QueryError::Malformed(e.to_string()))
        }
        Some(other) => Err(QueryError::Malformed(format!(
            "expected `response` to be an array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Joins the backend base URL and the fixed `/query/` path.
pub fn query_endpoint(base_url: &str) -> String {
    format!("{}/query/", base_url.trim_end_matches('/'))
}

#[cfg(not(target_arch = "wasm32"))]
fn with_timeout(builder: ClientBuilder, timeout: Option<Duration>) -> ClientBuilder {
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

// Browser fetch has no client-level timeout
#[cfg(target_arch = "wasm32")]
fn with_timeout(builder: ClientBuilder, _timeout: Option<Duration>) -> ClientBuilder {
    builder
}

pub struct HttpProductSearch {
    client: Client,
    endpoint: String,
}

impl HttpProductSearch {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> QueryResult<Self> {
        let client = with_timeout(Client::builder(), timeout).build()?;
        Ok(Self {
            client,
            endpoint: query_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProductSearch for HttpProductSearch {
    async fn query(&self, text: &str) -> QueryResult<Vec<ProductRecord>> {
        tracing::debug!(endpoint = %self.endpoint, "sending product query");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query: text })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(QueryError::Network(format!(
                "search backend error {status}: {body}"
            )));
        }

        let records = parse_query_response(&body)?;
        tracing::debug!(count = records.len(), "product query answered");
        Ok(records)
    }
}
