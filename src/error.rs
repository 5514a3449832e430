// src/error.rs

use std::fmt;

use crate::ledger::LedgerError;
use crate::wizard::ValidationError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    Msg(String),
    StateLockPoisoned,

    // --------------------------------------------------
    // session record (IO / parsing)
    // --------------------------------------------------
    SessionReadFailed(String),
    SessionInvalidJson(String),
    SessionTooLarge { bytes: u64, max: u64 },
    SessionWriteFailed(String),
    SessionSyncFailed(String),
    SessionRenameFailed(String),
    SessionRemoveFailed(String),
    NotSignedIn,

    // --------------------------------------------------
    // draft forms
    // --------------------------------------------------
    AssetFieldsRequired,
    PartyFieldsRequired,
    InvalidAssetValue(String),
    AssetNotFound(String),
    PartyNotFound(String),
    LawyerNotPublishable,

    // --------------------------------------------------
    // seal
    // --------------------------------------------------
    Validation(ValidationError),
    SealInFlight,
    SealTimedOut { secs: u64 },
    SealTimeoutTooLarge { secs: u64 },
    SealWorkerGone,

    // --------------------------------------------------
    // ledger gateway
    // --------------------------------------------------
    Ledger(LedgerError),

    // --------------------------------------------------
    // activity log
    // --------------------------------------------------
    ActivityLogInit(String),
}

impl AppError {
    /// Gateway failures are shown to the user as-is, not as a short message.
    pub fn surfaces_verbatim(&self) -> bool {
        matches!(self, AppError::Ledger(_))
    }

    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            // generic
            Io(_) => "File operation failed.",
            Msg(_) => "Operation failed.",
            StateLockPoisoned => "Internal state lock failed.",

            // session
            SessionReadFailed(_) => "Failed to read saved session.",
            SessionInvalidJson(_) => "Saved session is corrupted.",
            SessionTooLarge { .. } => "Saved session is too large.",
            SessionWriteFailed(_) => "Failed to save session.",
            SessionSyncFailed(_) => "Failed to sync session.",
            SessionRenameFailed(_) => "Failed to replace saved session.",
            SessionRemoveFailed(_) => "Failed to clear saved session.",
            NotSignedIn => "Please sign in first.",

            // draft
            AssetFieldsRequired => "Please fill in Asset Type and Description.",
            PartyFieldsRequired => "Please fill all required fields.",
            InvalidAssetValue(_) => "Asset value must be a number.",
            AssetNotFound(_) => "Asset not found.",
            PartyNotFound(_) => "Person not found.",
            LawyerNotPublishable => "Lawyers are not published to the ledger.",

            // seal
            Validation(v) => v.short(),
            SealInFlight => "Your will is already being sealed.",
            SealTimedOut { .. } => {
                kind = UserMsgKind::Warn;
                "The wallet did not confirm in time. Your draft was kept."
            }
            SealTimeoutTooLarge { .. } => "Seal timeout setting is out of range.",
            SealWorkerGone => "Sealing stopped unexpectedly.",

            // ledger
            Ledger(_) => "Ledger call failed.",

            // activity log
            ActivityLogInit(_) => "Failed to open activity log.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            Msg(s) => write!(f, "{s}"),
            StateLockPoisoned => write!(f, "state lock poisoned"),

            SessionReadFailed(s) => write!(f, "session read failed: {s}"),
            SessionInvalidJson(s) => write!(f, "session invalid json: {s}"),
            SessionTooLarge { bytes, max } => write!(f, "session too large: {bytes} > {max}"),
            SessionWriteFailed(s) => write!(f, "session write failed: {s}"),
            SessionSyncFailed(s) => write!(f, "session sync failed: {s}"),
            SessionRenameFailed(s) => write!(f, "session rename failed: {s}"),
            SessionRemoveFailed(s) => write!(f, "session remove failed: {s}"),
            NotSignedIn => write!(f, "not signed in"),

            AssetFieldsRequired => write!(f, "asset type and description are required"),
            PartyFieldsRequired => {
                write!(f, "name, relationship, email and phone number are required")
            }
            InvalidAssetValue(s) => write!(f, "invalid asset value: {s:?}"),
            AssetNotFound(id) => write!(f, "asset not found: {id}"),
            PartyNotFound(id) => write!(f, "party not found: {id}"),
            LawyerNotPublishable => write!(f, "lawyer parties have no ledger entry point"),

            Validation(v) => write!(f, "{v}"),
            SealInFlight => write!(f, "seal already in flight"),
            SealTimedOut { secs } => write!(f, "seal timed out after {secs}s"),
            SealTimeoutTooLarge { secs } => write!(f, "seal timeout too large: {secs}s"),
            SealWorkerGone => write!(f, "seal worker exited without a result"),

            Ledger(e) => write!(f, "{e}"),

            ActivityLogInit(s) => write!(f, "activity log init failed: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        AppError::Ledger(e)
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::SealRequirement;

    #[test]
    fn ledger_errors_surface_verbatim() {
        let err = AppError::from(LedgerError::Rejected("User rejected the request.".into()));
        assert!(err.surfaces_verbatim());
        assert_eq!(err.to_string(), "User rejected the request.");
    }

    #[test]
    fn validation_errors_use_short_notice() {
        let err = AppError::from(ValidationError::Unmet {
            missing: vec![SealRequirement::Agreement],
            lawyer_fallback: None,
        });
        assert!(!err.surfaces_verbatim());
        let msg = err.user_msg();
        assert_eq!(msg.kind, UserMsgKind::Error);
        assert!(msg.short.contains("agree"));
    }

    #[test]
    fn seal_timeout_is_a_warning() {
        let msg = AppError::SealTimedOut { secs: 5 }.user_msg();
        assert_eq!(msg.kind, UserMsgKind::Warn);
        assert_eq!(msg.detail.as_deref(), Some("seal timed out after 5s"));
    }
}
