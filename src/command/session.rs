// src/command/session.rs

use crate::activity_log::{record_activity, ActivityClass};
use crate::command_state::*;
use crate::error::AppResult;
use crate::route::RouteCtx;
use crate::session::{demo_user, User};
use crate::types::AppState;

pub fn current_user(state: &AppState) -> AppResult<Option<User>> {
    Ok(lock_session(state)?.current().cloned())
}

pub fn route_ctx(state: &AppState) -> RouteCtx {
    match lock_session(state) {
        Ok(s) => RouteCtx {
            signed_in: s.is_signed_in(),
            verified: s.is_verified(),
        },
        Err(_) => RouteCtx {
            signed_in: false,
            verified: false,
        },
    }
}

pub fn login(user: User, state: &AppState) -> AppResult<()> {
    let id = user.id;
    lock_session(state)?.login(user)?;

    record_activity(
        state,
        ActivityClass::Session,
        "login",
        "signed_in",
        &format!("user id={id}"),
    );
    Ok(())
}

/// What the "Continue" button on the sign-in page does once its delay has passed.
pub fn sign_in_demo(state: &AppState) -> AppResult<User> {
    let user = demo_user();
    login(user.clone(), state)?;
    Ok(user)
}

/// Clears the saved session and throws the in-progress draft away.
pub fn logout(state: &AppState) -> AppResult<()> {
    lock_session(state)?.logout()?;
    lock_draft(state)?.reset_will();

    record_activity(state, ActivityClass::Session, "logout", "signed_out", "");
    Ok(())
}

pub fn verify_user(state: &AppState) -> AppResult<()> {
    let changed = {
        let mut session = lock_session(state)?;
        let was_verified = session.is_verified();
        session.verify_user()?;
        session.is_signed_in() && !was_verified
    };

    if changed {
        record_activity(state, ActivityClass::Session, "verify_user", "verified", "");
    }
    Ok(())
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_log::recent_activity;
    use crate::draft::AssetDraft;
    use tempfile::tempdir;

    fn mk_state(dir: &std::path::Path) -> AppState {
        AppState::new_for_tests(dir).expect("state")
    }

    #[test]
    fn sign_in_demo_persists_unverified_user() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());

        let u = sign_in_demo(&state).unwrap();
        assert_eq!(u.id, 1);
        assert!(!u.is_verified);

        let rctx = route_ctx(&state);
        assert!(rctx.signed_in);
        assert!(!rctx.verified);
        assert!(td.path().join(crate::context::SESSION_FILE_NAME).exists());
    }

    #[test]
    fn verify_logs_once() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());
        sign_in_demo(&state).unwrap();

        verify_user(&state).unwrap();
        verify_user(&state).unwrap();

        let kinds: Vec<String> = recent_activity(&state)
            .into_iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(kinds.iter().filter(|k| *k == "verified").count(), 1);
        assert!(current_user(&state).unwrap().unwrap().is_verified);
    }

    #[test]
    fn verify_without_user_is_noop() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());

        verify_user(&state).unwrap();
        assert!(current_user(&state).unwrap().is_none());
        assert!(recent_activity(&state).is_empty());
    }

    #[test]
    fn logout_discards_draft() {
        let td = tempdir().unwrap();
        let state = mk_state(td.path());
        sign_in_demo(&state).unwrap();

        state.draft.lock().unwrap().add_asset(AssetDraft {
            asset_type: "Vehicle".into(),
            description: "Car".into(),
            value: String::new(),
            document_proof_url: "ipfs://not_provided".into(),
        });

        logout(&state).unwrap();

        assert!(current_user(&state).unwrap().is_none());
        assert!(state.draft.lock().unwrap().assets().is_empty());
        assert!(!route_ctx(&state).signed_in);
    }
}
