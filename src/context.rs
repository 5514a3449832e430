// src/context.rs

use std::path::PathBuf;
use std::time::Duration;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "ooma";
pub const APP_ID: &str = "ooma-will-drafter";

pub const SESSION_FILE_NAME: &str = "ooma_user.json";

pub const DEFAULT_SEAL_TIMEOUT: Duration = Duration::from_secs(120);
pub const MAX_SEAL_TIMEOUT: Duration = Duration::from_secs(24 * 3600);
pub const DEFAULT_LEDGER_PACKAGE: &str = "0x0";

/// Move module that owns the will, asset and party types on the ledger.
pub const LEDGER_MODULE: &str = "ooma";

#[derive(Debug, Clone)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub debug_ui: bool,
    pub seal_timeout: Duration,
    pub ledger_package: String,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("OOMA_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let seal_timeout =
            parse_seal_timeout(std::env::var("OOMA_SEAL_TIMEOUT_SECS").ok().as_deref());

        let ledger_package = std::env::var("OOMA_LEDGER_PACKAGE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LEDGER_PACKAGE.to_string());

        Self {
            app_data_dir,
            debug_ui,
            seal_timeout,
            ledger_package,
        }
    }

    pub fn with_seal_timeout(mut self, timeout: Duration) -> Self {
        self.seal_timeout = timeout;
        self
    }

    pub fn with_ledger_package(mut self, package: impl Into<String>) -> Self {
        self.ledger_package = package.into();
        self
    }

    /// <app_data>/ooma_user.json
    pub fn session_path(&self) -> PathBuf {
        self.app_data_dir.join(SESSION_FILE_NAME)
    }

    /// `<package>::ooma::`
    pub fn ledger_type_prefix(&self) -> String {
        format!("{}::{}::", self.ledger_package, LEDGER_MODULE)
    }

    pub fn ledger_type_tag(&self, name: &str) -> String {
        format!("{}{}", self.ledger_type_prefix(), name)
    }
}

/// Seconds in `1..=MAX_SEAL_TIMEOUT`; anything else falls back to the default.
pub fn parse_seal_timeout(raw: Option<&str>) -> Duration {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0 && *secs <= MAX_SEAL_TIMEOUT.as_secs())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_SEAL_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags_share_the_module_prefix() {
        let ctx = AppCtx::new(PathBuf::from("/tmp/ooma")).with_ledger_package("0xabc");
        assert_eq!(ctx.ledger_type_prefix(), "0xabc::ooma::");
        assert_eq!(ctx.ledger_type_tag("Will"), "0xabc::ooma::Will");
    }

    #[test]
    fn session_path_is_inside_data_dir() {
        let ctx = AppCtx::new(PathBuf::from("/tmp/ooma"));
        assert_eq!(ctx.session_path(), PathBuf::from("/tmp/ooma/ooma_user.json"));
    }

    #[test]
    fn seal_timeout_rejects_zero_garbage_and_oversized() {
        assert_eq!(parse_seal_timeout(Some(" 30 ")), Duration::from_secs(30));
        assert_eq!(parse_seal_timeout(Some("86400")), MAX_SEAL_TIMEOUT);

        assert_eq!(parse_seal_timeout(None), DEFAULT_SEAL_TIMEOUT);
        assert_eq!(parse_seal_timeout(Some("0")), DEFAULT_SEAL_TIMEOUT);
        assert_eq!(parse_seal_timeout(Some("soon")), DEFAULT_SEAL_TIMEOUT);
        assert_eq!(parse_seal_timeout(Some("86401")), DEFAULT_SEAL_TIMEOUT);
        assert_eq!(
            parse_seal_timeout(Some("18446744073709551615")),
            DEFAULT_SEAL_TIMEOUT
        );
    }
}
