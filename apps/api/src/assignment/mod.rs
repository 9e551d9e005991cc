// Character assignment: profile stats → generated recommendation → character lookup.
// All generation goes through llm_client; all upstream lookups through their clients.

pub mod extract;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
