//! Submission state machine and result rendering.
//!
//! `Idle → Submitting → {Success, Failure}`; the next submit goes back through
//! `Idle`. `submit` borrows the session mutably, so only one submission can be
//! in flight.

use tracing::info;

use crate::api::{ApiClient, AssignmentResult};

/// Displayed in place of an image that failed to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const VALIDATION_MESSAGE: &str = "Username is required";

/// A successful result plus what the image slot should show.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub result: AssignmentResult,
    /// `None` when the server sent no image; the placeholder when it didn't load.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Submitting { username: String },
    Success(Assignment),
    Failure(String),
}

/// Blank input never reaches the server.
pub fn is_submittable(username: &str) -> bool {
    !username.trim().is_empty()
}

pub struct Session<'a> {
    api: &'a ApiClient,
    state: ViewState,
}

impl<'a> Session<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The currently displayed result, if the last submit succeeded.
    pub fn assignment(&self) -> Option<&Assignment> {
        match &self.state {
            ViewState::Success(assignment) => Some(assignment),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
    }

    pub async fn submit(&mut self, username: &str) -> &ViewState {
        self.reset();

        let username = username.trim();
        if !is_submittable(username) {
            self.state = ViewState::Failure(VALIDATION_MESSAGE.to_string());
            return &self.state;
        }

        self.state = ViewState::Submitting {
            username: username.to_string(),
        };
        info!("Submitting {username}");

        self.state = match self.api.assign(username).await {
            Ok(result) => {
                let image = match &result.image_url {
                    Some(url) if self.api.image_loads(url).await => Some(url.clone()),
                    Some(_) => Some(PLACEHOLDER_IMAGE.to_string()),
                    None => None,
                };
                ViewState::Success(Assignment { result, image })
            }
            Err(e) => {
                info!("Submission failed: {e}");
                ViewState::Failure(e.user_message())
            }
        };

        &self.state
    }
}

/// Renders the result card shown on success.
pub fn render_assignment(assignment: &Assignment) -> String {
    let result = &assignment.result;
    let stats = &result.leetcode_data;
    let ranking = stats
        .ranking
        .map_or_else(|| "-".to_string(), |r| r.to_string());

    let image = assignment
        .image
        .as_ref()
        .map(|image| format!("\nImage: {image}\n"))
        .unwrap_or_default();

    format!(
        "Your Anime Character:\n  {name}\n\nReason: {reason}\n\nAbout: {about}\n{image}\n  \
         Total Solved  {total}\n  Hard Solved   {hard}\n  Ranking       {ranking}\n",
        name = result.name,
        reason = result.recommendation,
        about = result.description,
        total = stats.total_solved,
        hard = stats.hard_solved,
    )
}

/// Renders whatever the session currently shows.
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "Enter your LeetCode username!\n".to_string(),
        ViewState::Submitting { username } => format!("Loading {username}...\n"),
        ViewState::Success(assignment) => render_assignment(assignment),
        ViewState::Failure(message) => format!("Error: {message}\n"),
    }
}
