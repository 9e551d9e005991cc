use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coding statistics for one LeetCode user, as returned by the stats API.
///
/// Only the three fields the prompt needs are typed. Everything else the
/// upstream sends is kept in `extra` and echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_solved: u64,
    pub hard_solved: u64,
    pub ranking: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileStats {
    pub fn new(total_solved: u64, hard_solved: u64, ranking: Option<u64>) -> Self {
        Self {
            total_solved,
            hard_solved,
            ranking,
            extra: Map::new(),
        }
    }
}
