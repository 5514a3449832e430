// src/activity_log/model.rs

use serde::{Deserialize, Serialize};

pub const LOG_FILE_NAME: &str = "activity.log.jsonl";

/// Kept in memory and on disk; the dashboard shows the newest few.
pub const MAX_LOG_EVENTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityClass {
    Session,
    Draft,
    Seal,
    /// Something persisted could not be used and was recovered from.
    Storage,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: u64,
    pub ts_ms: i64,
    pub class: ActivityClass,
    pub kind: String,
    pub context: String,
    pub msg: String,
}
