// src/session/model.rs

use serde::{Deserialize, Serialize};

/// Address the sign-in stub hands out.
pub const DEMO_WALLET_ADDRESS: &str =
    "0x92b564a804d86cd74d2d13324de568ba89cd3ad9825aa655e959acee229742ef";

/// Persisted session record. Field names match the stored JSON
/// (`{id, name, isVerified, avatarInitial, address, email?}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub is_verified: bool,
    pub avatar_initial: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// New unverified user; the avatar initial is the upper-cased first letter of the name.
    pub fn new(id: u64, name: impl Into<String>, address: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            avatar_initial: avatar_initial(&name),
            name,
            is_verified: false,
            address: address.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// The identity fabricated by the sign-in stub.
pub fn demo_user() -> User {
    User::new(1, "Kayode", DEMO_WALLET_ADDRESS)
}

pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
