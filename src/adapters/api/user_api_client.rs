use error_stack::{report, ResultExt};
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::adapters::config::api_config::ApiConfig;
use crate::domain::user::User;
use crate::ports::user_sink::UserSink;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("HTTP request failed")]
    Request,

    #[error("HTTP status error: {status}")]
    Status { status: u16, body: String },

    #[error("Failed to read response body")]
    Body,
}

/// Posts users, one JSON object per request, to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    client: Client,
    endpoint: Url,
}

impl UserApiClient {
    /// Uses the HTTP client defaults, timeouts included.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint,
        }
    }

    async fn post_user(&self, user: &User) -> error_stack::Result<serde_json::Value, UploadError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(user)
            .send()
            .await
            .change_context(UploadError::Request)
            .attach_printable_lazy(|| format!("POST {}", self.endpoint))?;

        let status = response.status();
        let body = response.text().await.change_context(UploadError::Body)?;
        debug!(status = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(report!(UploadError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        Ok(parse_response_body(&body))
    }
}

#[async_trait::async_trait]
impl UserSink for UserApiClient {
    type Error = UploadError;

    #[instrument(name = "UserApiClient::add_user", skip(self))]
    async fn add_user(&self, user: &User) -> error_stack::Result<serde_json::Value, UploadError> {
        let result = self.post_user(user).await;
        if let Err(report) = &result {
            error!("Error adding user: {:?}", report);
        }
        result
    }
}

/// Empty bodies become `null`; bodies that are not JSON are kept as text.
pub fn parse_response_body(body: &str) -> serde_json::Value {
    if body.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}
