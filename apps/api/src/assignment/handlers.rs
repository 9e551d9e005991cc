//! Axum route handlers for the assignment API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::assignment::pipeline::assign_character;
use crate::errors::AppError;
use crate::models::character::AssignmentResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignQuery {
    pub username: Option<String>,
}

/// GET /api/assign-character?username=<name>
///
/// Picks an anime character for a LeetCode user and returns it with the
/// generated recommendation and the raw stats.
///
/// A query string that doesn't yield a single username (e.g. `username`
/// repeated) is answered like a missing one.
pub async fn handle_assign_character(
    State(state): State<AppState>,
    params: Result<Query<AssignQuery>, QueryRejection>,
) -> Result<Json<AssignmentResult>, AppError> {
    let username = match params {
        Ok(Query(params)) => params.username.unwrap_or_default(),
        Err(rejection) => {
            warn!("Rejected query string: {rejection}");
            return Err(AppError::Validation("Username is required".to_string()));
        }
    };

    let result = assign_character(
        state.profiles.as_ref(),
        state.generator.as_ref(),
        state.characters.as_ref(),
        &username,
    )
    .await?;

    Ok(Json(result))
}
