use std::sync::Arc;

use crate::anilist_client::EntitySource;
use crate::leetcode_client::ProfileSource;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Collaborators are built once in `main` and live for the whole process.
/// Each is a trait object so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    /// LeetCode stats API.
    pub profiles: Arc<dyn ProfileSource>,
    /// Gemini text generation.
    pub generator: Arc<dyn TextGenerator>,
    /// AniList character search.
    pub characters: Arc<dyn EntitySource>,
}
