// src/command/mod.rs

pub mod draft_ops;
pub mod ledger_ops;
pub mod seal;
pub mod session;

// --- Public façade ---

pub use draft_ops::{
    draft_snapshot, remove_asset, remove_party, save_asset, save_party, set_instructions,
    set_lawyer, toggle_asset, toggle_beneficiary, toggle_witness,
};
pub use ledger_ops::{ledger_summary, publish_asset, publish_party, LedgerSummary};
pub use seal::{begin_seal, poll_seal, wait_for_seal, SealPoll, SealReceipt, SealTicket};
pub use session::{current_user, login, logout, route_ctx, sign_in_demo, verify_user};
