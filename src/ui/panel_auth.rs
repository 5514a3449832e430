// src/ui/panel_auth.rs

use std::time::{Duration, Instant};

use eframe::egui;
use ooma_will_drafter_lib::{command, context::AppCtx, route::Route, types::AppState};

use super::message::PanelMsgState;

/// The sign-in stub pretends to talk to a wallet for this long.
const SIGN_IN_DELAY: Duration = Duration::from_secs(2);

pub struct AuthPanel {
    pending_since: Option<Instant>,
    msg: PanelMsgState,
}

impl AuthPanel {
    pub fn new() -> Self {
        Self {
            pending_since: None,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.pending_since = None;
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx, route: &mut Route) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Secure your legacy");
            ui.label("Sign in with your wallet to start drafting your will.");
            ui.add_space(20.0);

            let busy = self.pending_since.is_some();
            let label = if busy { "Connecting…" } else { "Continue" };

            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                self.clear_messages();
                self.pending_since = Some(Instant::now());
            }

            if busy {
                ui.add_space(8.0);
                ui.spinner();
            }

            ui.add_space(12.0);
            self.msg.show(ui, ctx.debug_ui);
        });

        let Some(since) = self.pending_since else {
            return;
        };

        if since.elapsed() < SIGN_IN_DELAY {
            ui.ctx().request_repaint_after(SIGN_IN_DELAY.saturating_sub(since.elapsed()));
            return;
        }

        self.pending_since = None;
        match command::sign_in_demo(state) {
            Ok(_) => *route = Route::Dashboard,
            Err(e) => self.msg.from_app_error(&e),
        }
    }
}
