// src/types.rs

use std::sync::Mutex;

use crate::activity_log::ActivityLog;
use crate::draft::DraftStore;
use crate::session::SessionStore;

#[derive(Debug, Default)]
pub struct SealState {
    pub in_flight: bool,
}

pub struct AppState {
    pub session: Mutex<SessionStore>,
    pub draft: Mutex<DraftStore>,
    pub seal: Mutex<SealState>,

    // persistent + in-memory activity log
    pub activity_log: Mutex<ActivityLog>,
}
