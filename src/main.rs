// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use ooma_will_drafter_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use ooma_will_drafter_lib::ledger::{LedgerGateway, MemoryLedger};
use ooma_will_drafter_lib::session::DEMO_WALLET_ADDRESS;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn resolve_data_dir() -> Option<PathBuf> {
    if let Ok(p) = env::var("OOMA_DATA_DIR") {
        return Some(PathBuf::from(p));
    }

    if cfg!(debug_assertions) {
        // dev-only sandbox
        if let Ok(home) = env::var("HOME") {
            return Some(PathBuf::from(home).join(".local/share/ooma-dev"));
        }
    }

    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID).map(|p| p.data_dir().to_path_buf())
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(app_data_dir) = resolve_data_dir() else {
        log::error!("could not determine an app data dir; set OOMA_DATA_DIR");
        std::process::exit(1);
    };

    let state = match ooma_will_drafter_lib::init_state(&app_data_dir) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            log::error!("failed to init app state in {}: {e}", app_data_dir.display());
            std::process::exit(1);
        }
    };

    let ctx = Arc::new(AppCtx::new(app_data_dir.clone()));
    log::info!(
        "data dir {}, ledger package {}, seal timeout {}s",
        app_data_dir.display(),
        ctx.ledger_package,
        ctx.seal_timeout.as_secs()
    );

    // Wallet SDK is not wired in; calls are signed by the in-process ledger.
    let gateway: Arc<dyn LedgerGateway> = Arc::new(MemoryLedger::new(
        DEMO_WALLET_ADDRESS,
        ctx.ledger_package.clone(),
    ));

    eframe::run_native(
        "OOMA Will Drafter",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| {
            Ok(Box::new(ui::UiApp::new(
                state.clone(),
                ctx.clone(),
                gateway.clone(),
            )))
        }),
    )
}
