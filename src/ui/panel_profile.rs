// src/ui/panel_profile.rs

use std::time::{Duration, Instant};

use eframe::egui;
use ooma_will_drafter_lib::{command, context::AppCtx, route::Route, types::AppState};

use super::message::PanelMsgState;
use super::widgets::badge;

const REVIEW_DELAY: Duration = Duration::from_secs(3);

pub struct ProfilePanel {
    review_since: Option<Instant>,
    msg: PanelMsgState,
}

impl ProfilePanel {
    pub fn new() -> Self {
        Self {
            review_since: None,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.review_since = None;
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx, _route: &mut Route) {
        self.tick_review(ui, state);

        ui.heading("Profile");
        ui.separator();

        let user = match command::current_user(state) {
            Ok(Some(u)) => u,
            Ok(None) => return,
            Err(e) => {
                self.msg.from_app_error(&e);
                self.msg.show(ui, ctx.debug_ui);
                return;
            }
        };

        egui::Grid::new("profile_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.label(&user.name);
                ui.end_row();

                ui.label("Email");
                ui.label(user.email.as_deref().unwrap_or("Not provided"));
                ui.end_row();

                ui.label("Wallet address");
                ui.monospace(&user.address);
                ui.end_row();

                ui.label("Status");
                if user.is_verified {
                    badge(ui, "Verified", egui::Color32::from_rgb(22, 163, 74));
                } else if self.review_since.is_some() {
                    badge(ui, "Pending Review", egui::Color32::from_rgb(251, 191, 36));
                } else {
                    badge(ui, "Unverified", egui::Color32::from_rgb(239, 68, 68));
                }
                ui.end_row();
            });

        ui.add_space(16.0);

        if !user.is_verified {
            ui.label("Complete a one-time identity verification to unlock will creation.");
            ui.add_space(8.0);

            let busy = self.review_since.is_some();
            if ui
                .add_enabled(!busy, egui::Button::new("Start Verification"))
                .clicked()
            {
                self.clear_messages();
                self.review_since = Some(Instant::now());
            }
        }

        ui.add_space(8.0);
        self.msg.show(ui, ctx.debug_ui);
    }

    fn tick_review(&mut self, ui: &egui::Ui, state: &AppState) {
        let Some(since) = self.review_since else {
            return;
        };

        if since.elapsed() < REVIEW_DELAY {
            ui.ctx().request_repaint_after(REVIEW_DELAY.saturating_sub(since.elapsed()));
            return;
        }

        self.review_since = None;
        match command::verify_user(state) {
            Ok(()) => self.msg.set_success("Your identity has been verified."),
            Err(e) => self.msg.from_app_error(&e),
        }
    }
}
