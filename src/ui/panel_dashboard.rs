// src/ui/panel_dashboard.rs

use eframe::egui;
use ooma_will_drafter_lib::{
    activity_log::{recent_activity, ActivityEvent},
    command::{self, LedgerSummary},
    context::AppCtx,
    ledger::LedgerGateway,
    route::Route,
    types::AppState,
    wizard::WizardStep,
};

use super::message::PanelMsgState;
use super::widgets::{info_card, ui_notice};

const RECENT_ACTIVITY_ROWS: usize = 8;

pub struct DashboardPanel {
    summary: Option<LedgerSummary>,
    summary_stale: bool,
    msg: PanelMsgState,
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self {
            summary: None,
            summary_stale: true,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    /// Re-read ledger counts on the next frame.
    pub fn invalidate(&mut self) {
        self.summary_stale = true;
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        ctx: &AppCtx,
        gateway: &dyn LedgerGateway,
        route: &mut Route,
    ) {
        let user = match command::current_user(state) {
            Ok(Some(u)) => u,
            Ok(None) => return,
            Err(e) => {
                self.msg.from_app_error(&e);
                self.msg.show(ui, ctx.debug_ui);
                return;
            }
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(format!("Welcome back, {}!", user.name));
                ui.weak("Let's continue securing your legacy.");
                ui.add_space(16.0);

                if !user.is_verified {
                    ui_notice(
                        ui,
                        "One Last Step to Secure Your Account",
                        "Please complete our one-time identity verification to unlock all features.",
                    );
                    ui.add_space(8.0);
                    if ui.button("Start Verification").clicked() {
                        *route = Route::Profile;
                    }
                } else {
                    self.ui_verified(ui, state, ctx, gateway, route);
                }

                ui.add_space(8.0);
                self.msg.show(ui, ctx.debug_ui);

                ui.add_space(20.0);
                ui.label(egui::RichText::new("Recent activity").strong());
                ui.separator();
                ui_activity(ui, recent_activity(state));
            });
    }

    fn ui_verified(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        ctx: &AppCtx,
        gateway: &dyn LedgerGateway,
        route: &mut Route,
    ) {
        if self.summary_stale {
            self.summary_stale = false;
            match command::ledger_summary(state, ctx, gateway) {
                Ok(s) => self.summary = Some(s),
                Err(e) => {
                    self.summary = None;
                    self.msg.from_app_error(&e);
                }
            }
        }

        ui.label(egui::RichText::new("You're All Set!").size(22.0).strong());
        ui.label(
            "Your identity is verified. You can now create your will, secure your assets, \
             and protect your beneficiaries.",
        );
        ui.add_space(8.0);
        if ui.button("Write my Will").clicked() {
            *route = Route::CreateWill(WizardStep::Assets);
        }

        ui.add_space(16.0);

        let s = self.summary.unwrap_or_default();
        ui.horizontal_wrapped(|ui| {
            info_card(ui, "Will Status", s.will_status());
            info_card(ui, "Assets Secured", &s.assets.to_string());
            info_card(ui, "Beneficiaries", &s.beneficiaries.to_string());
        });

        if ui.small_button("Refresh").clicked() {
            self.clear_messages();
            self.invalidate();
        }
    }
}

fn ui_activity(ui: &mut egui::Ui, mut evs: Vec<ActivityEvent>) {
    if evs.is_empty() {
        ui.weak("Nothing yet.");
        return;
    }

    evs.sort_by(|a, b| b.ts_ms.cmp(&a.ts_ms));

    egui::Grid::new("activity_grid")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            for e in evs.into_iter().take(RECENT_ACTIVITY_ROWS) {
                ui.monospace(fmt_ts_ms_local(e.ts_ms));
                ui.label(format!("{:?} · {}", e.class, e.kind));
                ui.weak(e.msg);
                ui.end_row();
            }
        });
}

fn fmt_ts_ms_local(ts_ms: i64) -> String {
    use chrono::{Local, TimeZone};

    match Local.timestamp_millis_opt(ts_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
