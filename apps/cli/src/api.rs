//! HTTP client for the character assignment endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Shown for every failed submission; the server message is appended when present.
pub const GENERIC_ERROR: &str = "Failed to fetch data";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API URL: {0}")]
    Url(String),

    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },
}

impl ClientError {
    /// The single user-facing message for any failure kind.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } => format!("{GENERIC_ERROR}: {message}"),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeData {
    pub total_solved: u64,
    pub hard_solved: u64,
    pub ranking: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentResult {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub recommendation: String,
    #[serde(rename = "leetcodeData")]
    pub leetcode_data: LeetCodeData,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Url(format!("{base_url} cannot be a base URL")));
        }

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            base_url,
        })
    }

    fn assign_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "assign-character"]);
        }
        url.query_pairs_mut().append_pair("username", username);
        url
    }

    /// GET /api/assign-character?username=<username>
    pub async fn assign(&self, username: &str) -> Result<AssignmentResult, ClientError> {
        let url = self.assign_url(username);
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.error);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Best-effort check that an image URL actually loads.
    pub async fn image_loads(&self, image_url: &str) -> bool {
        match self.client.get(image_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("image {image_url} failed to load: {e}");
                false
            }
        }
    }
}
