// src/session/mod.rs

mod io;
mod model;
mod store;

pub use model::{avatar_initial, demo_user, User, DEMO_WALLET_ADDRESS};
pub use store::SessionStore;
