// src/activity_log/api.rs

use crate::types::AppState;

use super::model::{ActivityClass, ActivityEvent};

pub fn record_activity(state: &AppState, class: ActivityClass, context: &str, kind: &str, msg: &str) {
    let mut alog = match state.activity_log.lock() {
        Ok(g) => g,
        Err(_) => return,
    };

    alog.record(class, kind, context, msg);
}

pub fn recent_activity(state: &AppState) -> Vec<ActivityEvent> {
    state
        .activity_log
        .lock()
        .map(|g| g.recent())
        .unwrap_or_default()
}

pub fn take_storage_warn_pending(state: &AppState) -> bool {
    match state.activity_log.lock() {
        Ok(mut alog) => alog.take_storage_warn_pending(),
        Err(_) => false,
    }
}
