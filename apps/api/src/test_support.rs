//! In-memory collaborators for pipeline and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::anilist_client::{EntityError, EntitySource};
use crate::leetcode_client::{ProfileError, ProfileSource};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::character::CharacterRecord;
use crate::models::profile::ProfileStats;
use crate::state::AppState;

#[derive(Default)]
struct Calls {
    count: AtomicUsize,
    last: Mutex<Option<String>>,
}

impl Calls {
    fn record(&self, arg: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(arg.to_string());
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn last(&self) -> Option<String> {
        self.last.lock().unwrap().clone()
    }
}

pub struct FakeProfiles {
    stats: Option<ProfileStats>,
    calls: Calls,
}

impl FakeProfiles {
    pub fn found(stats: ProfileStats) -> Self {
        Self {
            stats: Some(stats),
            calls: Calls::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            stats: None,
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.count()
    }

    pub fn last_username(&self) -> Option<String> {
        self.calls.last()
    }
}

#[async_trait]
impl ProfileSource for FakeProfiles {
    async fn fetch_stats(&self, username: &str) -> Result<ProfileStats, ProfileError> {
        self.calls.record(username);
        self.stats
            .clone()
            .ok_or_else(|| ProfileError::Rejected("user does not exist".to_string()))
    }
}

pub struct FakeGenerator {
    reply: Option<String>,
    calls: Calls,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: Calls::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.count()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.calls.last()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.record(prompt);
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

pub struct FakeCharacters {
    outcome: Result<Option<CharacterRecord>, ()>,
    calls: Calls,
}

impl FakeCharacters {
    pub fn found(record: CharacterRecord) -> Self {
        Self {
            outcome: Ok(Some(record)),
            calls: Calls::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            outcome: Ok(None),
            calls: Calls::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: Err(()),
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.count()
    }

    pub fn last_search(&self) -> Option<String> {
        self.calls.last()
    }
}

#[async_trait]
impl EntitySource for FakeCharacters {
    async fn find_character(&self, name: &str) -> Result<Option<CharacterRecord>, EntityError> {
        self.calls.record(name);
        self.outcome.clone().map_err(|()| EntityError::Api {
            status: 500,
            message: "upstream exploded".to_string(),
        })
    }
}

/// Builds router state around the given fakes, keeping handles for assertions.
pub fn state_with(
    profiles: Arc<FakeProfiles>,
    generator: Arc<FakeGenerator>,
    characters: Arc<FakeCharacters>,
) -> AppState {
    AppState {
        profiles,
        generator,
        characters,
    }
}
