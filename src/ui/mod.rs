// src/ui/mod.rs

pub mod nav;
pub mod panel_assemble;
pub mod panel_assets;
pub mod panel_auth;
pub mod panel_dashboard;
pub mod panel_parties;
pub mod panel_profile;

pub mod message;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;

use nav::{LeftNav, NavModel};

use message::PanelMsgState;
use ooma_will_drafter_lib::activity_log::take_storage_warn_pending;
use ooma_will_drafter_lib::command;
use ooma_will_drafter_lib::context::AppCtx;
use ooma_will_drafter_lib::ledger::LedgerGateway;
use ooma_will_drafter_lib::route::{apply_route_guards, clears_messages, Route};
use ooma_will_drafter_lib::types::AppState;
use panel_assemble::{AssemblePanel, SealPopup};
use panel_assets::AssetsPanel;
use panel_auth::AuthPanel;
use panel_dashboard::DashboardPanel;
use panel_parties::PartiesPanel;
use panel_profile::ProfilePanel;

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,
    gateway: Arc<dyn LedgerGateway>,

    route: Route,
    prev_route: Route,

    nav: LeftNav,
    auth: AuthPanel,
    dashboard: DashboardPanel,
    profile: ProfilePanel,
    assets: AssetsPanel,
    parties: PartiesPanel,
    assemble: AssemblePanel,

    seal_popup: Option<SealPopup>,
    app_msg: PanelMsgState,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>, gateway: Arc<dyn LedgerGateway>) -> Self {
        let route = apply_route_guards(command::route_ctx(state.as_ref()), Route::Dashboard);

        Self {
            state,
            ctx,
            gateway,
            route,
            prev_route: route,
            nav: LeftNav::new(),
            auth: AuthPanel::new(),
            dashboard: DashboardPanel::new(),
            profile: ProfilePanel::new(),
            assets: AssetsPanel::new(),
            parties: PartiesPanel::new(),
            assemble: AssemblePanel::new(),
            seal_popup: None,
            app_msg: PanelMsgState::default(),
        }
    }

    fn clear_panel_messages(&mut self) {
        self.auth.clear_messages();
        self.dashboard.clear_messages();
        self.profile.clear_messages();
        self.assets.clear_messages();
        self.parties.clear_messages();
        self.assemble.clear_messages();
    }

    fn reset_all_inputs(&mut self) {
        self.auth.reset_inputs();
        self.profile.reset_inputs();
        self.assets.reset_inputs();
        self.parties.reset_inputs();
        self.assemble.reset_inputs();
    }

    /// Build a pure nav model once per frame
    fn derive_nav_model(&self) -> NavModel {
        let user = command::current_user(self.state.as_ref()).ok().flatten();

        NavModel {
            signed_in: user.is_some(),
            verified: user.as_ref().map(|u| u.is_verified).unwrap_or(false),
            user_name: user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            avatar_initial: user.map(|u| u.avatar_initial).unwrap_or_default(),
        }
    }

    fn logout(&mut self) {
        match command::logout(self.state.as_ref()) {
            Ok(()) => {
                self.reset_all_inputs();
                self.dashboard.invalidate();
                self.route = Route::Auth;
            }
            Err(e) => self.app_msg.from_app_error(&e),
        }
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.state.clone();
        let debug_ui = self.ctx.debug_ui;

        // Seal worker results arrive whatever page is showing
        if let Some(receipt) = self.assemble.poll(ctx, state.as_ref()) {
            self.seal_popup = Some(SealPopup::new(receipt));
            self.dashboard.invalidate();
        }

        if take_storage_warn_pending(state.as_ref()) {
            self.app_msg
                .set_warn("Your saved session could not be read. Please sign in again.");
        }

        // Guards run every frame: session state can change under any panel
        let guarded = apply_route_guards(command::route_ctx(state.as_ref()), self.route);
        if guarded != self.route {
            self.route = guarded;
        }

        // Route transition hooks
        if self.route != self.prev_route {
            if clears_messages(self.prev_route, self.route) {
                self.clear_panel_messages();
                self.app_msg.clear();
            }
            if self.route == Route::Dashboard {
                self.dashboard.invalidate();
            }
            log::debug!("route: {} -> {}", self.prev_route.path(), self.route.path());
            self.prev_route = self.route;
        }

        // Nav (pure view)
        let nav_model = self.derive_nav_model();
        let mut logout_requested = false;
        self.nav
            .ui(ctx, &nav_model, &mut self.route, &mut logout_requested);
        if logout_requested {
            self.logout();
        }

        // Panels
        egui::CentralPanel::default().show(ctx, |ui| {
            self.app_msg.show(ui, debug_ui);

            match self.route {
                Route::Auth => self
                    .auth
                    .ui(ui, state.as_ref(), &self.ctx, &mut self.route),

                Route::Dashboard => self.dashboard.ui(
                    ui,
                    state.as_ref(),
                    &self.ctx,
                    self.gateway.as_ref(),
                    &mut self.route,
                ),

                Route::Profile => self
                    .profile
                    .ui(ui, state.as_ref(), &self.ctx, &mut self.route),

                Route::CreateWill(step) => {
                    use ooma_will_drafter_lib::wizard::WizardStep;

                    match step {
                        WizardStep::Assets => self.assets.ui(
                            ui,
                            state.as_ref(),
                            &self.ctx,
                            &self.gateway,
                            &mut self.route,
                        ),
                        WizardStep::Parties => self.parties.ui(
                            ui,
                            state.as_ref(),
                            &self.ctx,
                            &self.gateway,
                            &mut self.route,
                        ),
                        WizardStep::Assemble => self.assemble.ui(
                            ui,
                            state.as_ref(),
                            &self.ctx,
                            &self.gateway,
                            &mut self.route,
                        ),
                    }
                }
            }
        });

        if let Some(popup) = &self.seal_popup {
            if popup.ui(ctx) {
                self.seal_popup = None;
                self.route = Route::Dashboard;
            }
        }
    }
}
