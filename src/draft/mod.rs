// src/draft/mod.rs

pub mod form;
pub mod select;
pub mod store;
pub mod types;

pub use form::{format_naira, strip_naira, AssetForm, PartyForm};
pub use select::{is_selected, toggled};
pub use store::DraftStore;
pub use types::*;
