// src/command_state.rs

use crate::{
    draft::DraftStore,
    error::{AppError, AppResult},
    session::{SessionStore, User},
    types::{AppState, SealState},
};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_session<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, SessionStore>> {
    state
        .session
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_draft<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, DraftStore>> {
    state.draft.lock().map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_seal<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, SealState>> {
    state.seal.lock().map_err(|_| AppError::StateLockPoisoned)
}

// ======================================================
// session access helpers
// ======================================================

/// Snapshot of the signed-in user, or `NotSignedIn`.
pub fn require_user(state: &AppState) -> AppResult<User> {
    lock_session(state)?
        .current()
        .cloned()
        .ok_or(AppError::NotSignedIn)
}

pub fn with_draft<T>(state: &AppState, f: impl FnOnce(&mut DraftStore) -> T) -> AppResult<T> {
    let mut guard = lock_draft(state)?;
    Ok(f(&mut guard))
}

pub fn seal_in_flight(state: &AppState) -> bool {
    lock_seal(state).map(|g| g.in_flight).unwrap_or(false)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::demo_user;
    use tempfile::tempdir;

    fn mk_state(dir: &std::path::Path) -> AppState {
        AppState::new_for_tests(dir).expect("state")
    }

    #[test]
    fn require_user_fails_when_signed_out() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());

        match require_user(&state) {
            Err(AppError::NotSignedIn) => {}
            other => panic!("expected NotSignedIn, got {:?}", other),
        }
    }

    #[test]
    fn require_user_returns_snapshot() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());
        state.session.lock().unwrap().login(demo_user()).unwrap();

        let u = require_user(&state).unwrap();
        assert_eq!(u.name, "Kayode");
    }

    #[test]
    fn with_draft_mutates_shared_draft() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());

        with_draft(&state, |d| d.set_instructions("keep the house")).unwrap();
        assert_eq!(state.draft.lock().unwrap().instructions(), "keep the house");
    }

    #[test]
    fn seal_in_flight_reads_flag() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());
        assert!(!seal_in_flight(&state));

        state.seal.lock().unwrap().in_flight = true;
        assert!(seal_in_flight(&state));
    }
}
