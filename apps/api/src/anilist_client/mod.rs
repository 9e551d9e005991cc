//! GraphQL client for AniList character search.
//!
//! A search with no match is a normal outcome (`Ok(None)`), not an error.
//! AniList reports it as a 404 with `data.Character = null`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::character::CharacterRecord;

const CHARACTER_QUERY: &str = r#"
query ($search: String) {
    Character(search: $search) {
        name {
            full
        }
        description
        image {
            large
        }
    }
}
"#;

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Character metadata lookup keyed by name.
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn find_character(&self, name: &str) -> Result<Option<CharacterRecord>, EntityError>;
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: SearchVariables<'a>,
}

#[derive(Debug, Serialize)]
struct SearchVariables<'a> {
    search: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<CharacterData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct CharacterData {
    #[serde(rename = "Character")]
    character: Option<CharacterNode>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CharacterNode {
    name: Option<CharacterName>,
    description: Option<String>,
    image: Option<CharacterImage>,
}

#[derive(Debug, Deserialize)]
struct CharacterName {
    full: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CharacterImage {
    large: Option<String>,
}

impl CharacterNode {
    /// A node without a full name can't be displayed, so it counts as no match.
    fn into_record(self) -> Option<CharacterRecord> {
        let full_name = self.name.and_then(|n| n.full)?;
        Some(CharacterRecord {
            full_name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            image_url: self.image.and_then(|i| i.large).filter(|u| !u.is_empty()),
        })
    }
}

#[derive(Clone)]
pub struct AniListClient {
    client: Client,
    endpoint: String,
}

impl AniListClient {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, EntityError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl EntitySource for AniListClient {
    async fn find_character(&self, name: &str) -> Result<Option<CharacterRecord>, EntityError> {
        let request_body = GraphQlRequest {
            query: CHARACTER_QUERY,
            variables: SearchVariables { search: name },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<GraphQlResponse>(&body).ok();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let message = parsed
                .and_then(|p| p.errors.into_iter().next())
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(EntityError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = parsed.ok_or_else(|| EntityError::Api {
            status: status.as_u16(),
            message: "unparseable GraphQL response".to_string(),
        })?;

        Ok(parsed
            .data
            .and_then(|d| d.character)
            .and_then(CharacterNode::into_record))
    }
}
