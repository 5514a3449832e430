// src/lib.rs

pub mod activity_log;
pub mod command;
pub mod command_state;
pub mod context;
pub mod draft;
pub mod error;
pub mod ledger;
pub mod route;
pub mod session;
pub mod types;
pub mod wizard;

use crate::activity_log::{ActivityClass, ActivityLog};
use crate::context::SESSION_FILE_NAME;
use crate::draft::DraftStore;
use crate::error::{AppError, AppResult};
use crate::session::SessionStore;
use crate::types::{AppState, SealState};
use std::path::Path;
use std::sync::Mutex;

pub fn init_state(app_data_dir: &Path) -> AppResult<AppState> {
    std::fs::create_dir_all(app_data_dir)
        .map_err(|e| AppError::Msg(format!("Failed to create app data dir: {e}")))?;

    let mut activity_log = ActivityLog::init(app_data_dir)?;

    let (session, load_issue) = SessionStore::load(&app_data_dir.join(SESSION_FILE_NAME));
    if let Some(e) = load_issue {
        activity_log.record(
            ActivityClass::Storage,
            "session_unreadable",
            "startup",
            &e.to_string(),
        );
    }

    Ok(AppState {
        session: Mutex::new(session),
        draft: Mutex::new(DraftStore::new()),
        seal: Mutex::new(SealState::default()),
        activity_log: Mutex::new(activity_log),
    })
}

impl AppState {
    pub fn new_for_tests(app_data_dir: &Path) -> AppResult<Self> {
        crate::init_state(app_data_dir)
    }
}
