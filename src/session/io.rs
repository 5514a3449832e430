// src/session/io.rs

use crate::error::{AppError, AppResult};
use crate::session::model::User;

use rand::rngs::OsRng;
use rand::RngCore;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

const SESSION_MAX_BYTES: u64 = 64 * 1024;

/// Reads the persisted record. `Ok(None)` when nothing was saved.
pub(crate) fn read_user(path: &Path) -> AppResult<Option<User>> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::SessionReadFailed(e.to_string())),
    };

    let bytes = meta.len();
    if bytes > SESSION_MAX_BYTES {
        return Err(AppError::SessionTooLarge {
            bytes,
            max: SESSION_MAX_BYTES,
        });
    }

    let text =
        fs::read_to_string(path).map_err(|e| AppError::SessionReadFailed(e.to_string()))?;

    let user: User =
        serde_json::from_str(&text).map_err(|e| AppError::SessionInvalidJson(e.to_string()))?;

    Ok(Some(user))
}

/// Whole-record replace: temp file in the same directory, fsync, rename.
pub(crate) fn write_user(path: &Path, user: &User) -> AppResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| AppError::SessionWriteFailed("invalid session path".to_string()))?;

    fs::create_dir_all(parent).map_err(|e| AppError::SessionWriteFailed(e.to_string()))?;

    let json =
        serde_json::to_vec_pretty(user).map_err(|e| AppError::SessionWriteFailed(e.to_string()))?;

    let mut rnd = [0u8; 12];
    OsRng.fill_bytes(&mut rnd);
    let tmp = parent.join(format!(".session.{}.tmp", hex::encode(rnd)));

    let mut opts = OpenOptions::new();
    opts.create_new(true).write(true);
    #[cfg(unix)]
    {
        opts.mode(0o600);
    }

    let mut f = opts
        .open(&tmp)
        .map_err(|e| AppError::SessionWriteFailed(e.to_string()))?;

    let write_res: AppResult<()> = (|| {
        f.write_all(&json)
            .map_err(|e| AppError::SessionWriteFailed(e.to_string()))?;

        f.flush()
            .map_err(|e| AppError::SessionSyncFailed(e.to_string()))?;
        f.sync_all()
            .map_err(|e| AppError::SessionSyncFailed(e.to_string()))?;

        fs::rename(&tmp, path).map_err(|e| AppError::SessionRenameFailed(e.to_string()))?;

        Ok(())
    })();

    if write_res.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    write_res
}

pub(crate) fn remove_user(path: &Path) -> AppResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::SessionRemoveFailed(e.to_string())),
    }
}

// ======================================================
// Unit Tests
// ======================================================
