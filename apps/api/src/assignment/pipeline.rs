//! Character assignment — orchestrates the full request pipeline.
//!
//! Flow: validate username → fetch LeetCode stats → build prompt → generate
//!       recommendation → extract + normalize name → look up character → assemble.
//!
//! Calls are strictly sequential and never retried. Only the character lookup
//! is allowed to fail softly.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::anilist_client::EntitySource;
use crate::assignment::extract::{extract_character_name, normalize_character_name};
use crate::assignment::prompts::build_recommendation_prompt;
use crate::errors::AppError;
use crate::leetcode_client::ProfileSource;
use crate::llm_client::TextGenerator;
use crate::models::character::AssignmentResult;

/// Runs the assignment pipeline for one username.
///
/// Steps:
/// 1. reject blank usernames before touching any collaborator
/// 2. profiles.fetch_stats() → ProfileStats (any failure → ProfileNotFound)
/// 3. build_recommendation_prompt()
/// 4. generator.generate() → recommendation (any failure → GenerationFailed)
/// 5. extract_character_name() (missing label → ExtractionFailed)
/// 6. normalize_character_name()
/// 7. characters.find_character() → Option<CharacterRecord> (failure → None)
/// 8. AssignmentResult::assemble()
#[tracing::instrument(
    name = "assign_character",
    skip_all,
    fields(assignment_id = %Uuid::new_v4(), username = %username.trim())
)]
pub async fn assign_character(
    profiles: &dyn ProfileSource,
    generator: &dyn TextGenerator,
    characters: &dyn EntitySource,
    username: &str,
) -> Result<AssignmentResult, AppError> {
    // Step 1: Validate input
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }

    // Step 2: LeetCode stats
    let stats = profiles.fetch_stats(username).await.map_err(|e| {
        error!("LeetCode API error: {e}");
        AppError::ProfileNotFound
    })?;

    // Step 3 + 4: Recommendation
    let prompt = build_recommendation_prompt(&stats);
    let recommendation = generator.generate(&prompt).await.map_err(|e| {
        error!("Gemini API error: {e}");
        AppError::GenerationFailed
    })?;
    let recommendation = recommendation.trim().to_string();
    if recommendation.is_empty() {
        error!("Gemini API returned an empty recommendation");
        return Err(AppError::GenerationFailed);
    }
    info!("Recommendation: {recommendation}");

    // Step 5 + 6: Character name
    let raw_name = extract_character_name(&recommendation).ok_or_else(|| {
        warn!("No 'Character Name:' line in recommendation");
        AppError::ExtractionFailed
    })?;
    let character_name = normalize_character_name(&raw_name);
    info!("Character Name: {character_name}");

    // Step 7: Character lookup (soft failure)
    let record = match characters.find_character(&character_name).await {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            warn!("AniList has no match for '{character_name}'");
            None
        }
        Err(e) => {
            warn!("AniList API error for '{character_name}': {e}");
            None
        }
    };

    // Step 8: Assemble
    Ok(AssignmentResult::assemble(
        character_name,
        record,
        recommendation,
        stats,
    ))
}
