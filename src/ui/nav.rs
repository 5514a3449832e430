// src/ui/nav.rs

use eframe::egui;
use ooma_will_drafter_lib::{route::Route, wizard::WizardStep};

/// What the nav should show (derived by ui/mod.rs)
#[derive(Clone, Debug)]
pub struct NavModel {
    pub signed_in: bool,
    pub verified: bool,
    pub user_name: String,
    pub avatar_initial: String,
}

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: renders from NavModel and mutates route on click
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        model: &NavModel,
        route: &mut Route,
        logout_requested: &mut bool,
    ) {
        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("OOMA");
                ui.separator();

                if !model.signed_in {
                    return;
                }

                ui.allocate_ui_with_layout(
                    ui.available_size(),
                    egui::Layout::bottom_up(egui::Align::Min),
                    |ui| {
                        ui.add_space(6.0);

                        // Bottom-pinned: who is signed in
                        if ui.button("Log Out").clicked() {
                            *logout_requested = true;
                        }
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&model.avatar_initial)
                                    .strong()
                                    .size(18.0),
                            );
                            ui.label(egui::RichText::new(&model.user_name).strong());
                        });

                        ui.separator();

                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            nav_btn(ui, route, Route::Dashboard, "Dashboard");

                            let in_wizard = route.is_create_will();
                            let label = if model.verified {
                                "My E-Will"
                            } else {
                                "My E-Will (Locked)"
                            };
                            let r = ui.add_enabled(
                                model.verified,
                                egui::SelectableLabel::new(in_wizard, label),
                            );
                            if r.clicked() && !in_wizard {
                                *route = Route::CreateWill(WizardStep::Assets);
                            }

                            nav_btn(ui, route, Route::Profile, "Profile");
                        });
                    },
                );
            });
    }
}

fn nav_btn(ui: &mut egui::Ui, route: &mut Route, target: Route, label: &str) {
    let selected = *route == target;
    if ui.selectable_label(selected, label).clicked() {
        *route = target;
    }
}
