//! HTTP client for the LeetCode stats API (`GET <base>/<username>`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::profile::ProfileStats;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("Profile lookup rejected: {0}")]
    Rejected(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of coding statistics for a username.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_stats(&self, username: &str) -> Result<ProfileStats, ProfileError>;
}

/// The stats API answers unknown users with 200 and `"status": "error"`.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: Option<String>,
    message: Option<String>,
}

#[derive(Clone)]
pub struct LeetCodeClient {
    client: Client,
    base_url: String,
}

impl LeetCodeClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ProfileError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProfileSource for LeetCodeClient {
    async fn fetch_stats(&self, username: &str) -> Result<ProfileStats, ProfileError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ProfileError::Rejected(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ProfileError::Rejected("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(username);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;

        let envelope: StatusEnvelope = serde_json::from_slice(&body)?;
        if envelope.status.as_deref() == Some("error") {
            return Err(ProfileError::Rejected(
                envelope.message.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
