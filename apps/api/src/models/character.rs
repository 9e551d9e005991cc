use serde::Serialize;

use crate::models::profile::ProfileStats;

/// Shown when the lookup service has no description for the character.
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Character metadata from the lookup service.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRecord {
    pub full_name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Response payload of `GET /api/assign-character`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentResult {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub recommendation: String,
    #[serde(rename = "leetcodeData")]
    pub leetcode_data: ProfileStats,
}

impl AssignmentResult {
    /// Combines the pipeline outputs. A missing record falls back to the
    /// normalized name and the fixed description.
    pub fn assemble(
        character_name: String,
        record: Option<CharacterRecord>,
        recommendation: String,
        leetcode_data: ProfileStats,
    ) -> Self {
        match record {
            None => Self {
                name: character_name,
                description: FALLBACK_DESCRIPTION.to_string(),
                image_url: None,
                recommendation,
                leetcode_data,
            },
            Some(record) => Self {
                name: record.full_name,
                description: record
                    .description
                    .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
                image_url: record.image_url,
                recommendation,
                leetcode_data,
            },
        }
    }
}
