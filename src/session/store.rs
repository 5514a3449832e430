// src/session/store.rs

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::io;
use super::model::User;

/// Current signed-in identity, mirrored to one JSON record on disk after every mutation.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    current: Option<User>,
}

impl SessionStore {
    /// Loads a previously saved user. A read or parse failure never fails startup:
    /// the store comes up signed out and the error is handed back for logging.
    pub fn load(path: &Path) -> (Self, Option<AppError>) {
        let (current, issue) = match io::read_user(path) {
            Ok(user) => (user, None),
            Err(e) => {
                log::warn!("failed to load saved session from {}: {e}", path.display());
                (None, Some(e))
            }
        };

        let store = Self {
            path: path.to_path_buf(),
            current,
        };
        (store, issue)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_verified(&self) -> bool {
        self.current.as_ref().map(|u| u.is_verified).unwrap_or(false)
    }

    /// Replaces whoever is signed in. Disk first, memory second.
    pub fn login(&mut self, user: User) -> AppResult<()> {
        io::write_user(&self.path, &user)?;
        log::info!("session: signed in user id={}", user.id);
        self.current = Some(user);
        Ok(())
    }

    pub fn logout(&mut self) -> AppResult<()> {
        io::remove_user(&self.path)?;
        if let Some(u) = self.current.take() {
            log::info!("session: signed out user id={}", u.id);
        }
        Ok(())
    }

    /// One-way. Silent no-op when nobody is signed in.
    pub fn verify_user(&mut self) -> AppResult<()> {
        let Some(current) = self.current.as_ref() else {
            return Ok(());
        };

        let mut updated = current.clone();
        updated.is_verified = true;

        io::write_user(&self.path, &updated)?;
        self.current = Some(updated);
        Ok(())
    }
}

// ======================================================
// Unit Tests
// ======================================================
