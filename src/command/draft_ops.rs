// src/command/draft_ops.rs

use crate::command_state::*;
use crate::draft::{toggled, AssetForm, AssetId, DraftStore, PartyForm, PartyId};
use crate::error::AppResult;
use crate::types::AppState;

// ======================================================
// records
// ======================================================

/// Validates the form and adds a new asset, or merges it into `editing`.
/// Editing an id that has since been removed is a silent no-op.
pub fn save_asset(form: &AssetForm, editing: Option<&str>, state: &AppState) -> AppResult<AssetId> {
    let draft = form.validate()?;
    let mut store = lock_draft(state)?;

    match editing {
        Some(id) => {
            if !store.update_asset(id, draft.into()) {
                log::debug!("draft: update of missing asset {id} ignored");
            }
            Ok(id.to_string())
        }
        None => {
            let id = store.add_asset(draft);
            log::debug!("draft: added asset {id}");
            Ok(id)
        }
    }
}

pub fn remove_asset(id: &str, state: &AppState) -> AppResult<bool> {
    let removed = lock_draft(state)?.remove_asset(id);
    log::debug!("draft: remove asset {id} -> {removed}");
    Ok(removed)
}

pub fn save_party(form: &PartyForm, editing: Option<&str>, state: &AppState) -> AppResult<PartyId> {
    let draft = form.validate()?;
    let mut store = lock_draft(state)?;

    match editing {
        Some(id) => {
            if !store.update_party(id, draft.into()) {
                log::debug!("draft: update of missing party {id} ignored");
            }
            Ok(id.to_string())
        }
        None => {
            let id = store.add_party(draft);
            log::debug!("draft: added party {id}");
            Ok(id)
        }
    }
}

pub fn remove_party(id: &str, state: &AppState) -> AppResult<bool> {
    let removed = lock_draft(state)?.remove_party(id);
    log::debug!("draft: remove party {id} -> {removed}");
    Ok(removed)
}

// ======================================================
// selections
// ======================================================

pub fn toggle_asset(id: &str, state: &AppState) -> AppResult<()> {
    let mut store = lock_draft(state)?;
    let next = toggled(store.selected_asset_ids(), id);
    store.set_selected_asset_ids(next);
    Ok(())
}

pub fn toggle_beneficiary(id: &str, state: &AppState) -> AppResult<()> {
    let mut store = lock_draft(state)?;
    let next = toggled(store.selected_beneficiary_ids(), id);
    store.set_selected_beneficiary_ids(next);
    Ok(())
}

pub fn toggle_witness(id: &str, state: &AppState) -> AppResult<()> {
    let mut store = lock_draft(state)?;
    let next = toggled(store.selected_witness_ids(), id);
    store.set_selected_witness_ids(next);
    Ok(())
}

pub fn set_lawyer(id: Option<PartyId>, state: &AppState) -> AppResult<()> {
    lock_draft(state)?.set_lawyer_id(id);
    Ok(())
}

pub fn set_instructions(text: &str, state: &AppState) -> AppResult<()> {
    lock_draft(state)?.set_instructions(text);
    Ok(())
}

/// Copy of the draft for rendering a frame without holding the lock.
pub fn draft_snapshot(state: &AppState) -> AppResult<DraftStore> {
    Ok(lock_draft(state)?.clone())
}

// ======================================================
// Unit Tests
// ======================================================
