// src/ui/panel_assets.rs

use std::sync::Arc;

use eframe::egui;
use ooma_will_drafter_lib::{
    command,
    context::AppCtx,
    draft::{AssetForm, AssetId},
    ledger::LedgerGateway,
    route::Route,
    types::AppState,
    wizard::WizardStep,
};

use super::message::PanelMsgState;
use super::widgets::{confirm_window, wizard_stepper};

pub struct AssetsPanel {
    form: AssetForm,
    editing: Option<AssetId>,
    confirm_delete: Option<AssetId>,
    msg: PanelMsgState,
}

impl AssetsPanel {
    pub fn new() -> Self {
        Self {
            form: AssetForm::default(),
            editing: None,
            confirm_delete: None,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.form = AssetForm::default();
        self.editing = None;
        self.confirm_delete = None;
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        ctx: &AppCtx,
        gateway: &Arc<dyn LedgerGateway>,
        route: &mut Route,
    ) {
        wizard_stepper(ui, route);
        ui.separator();

        let draft = match command::draft_snapshot(state) {
            Ok(d) => d,
            Err(e) => {
                self.msg.from_app_error(&e);
                self.msg.show(ui, ctx.debug_ui);
                return;
            }
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading("Step 1: Declare Your Assets");
                ui.add_space(8.0);

                self.ui_form(ui, state);

                ui.add_space(8.0);
                self.msg.show(ui, ctx.debug_ui);

                ui.add_space(16.0);
                ui.label(egui::RichText::new("Your Assets").strong());
                ui.separator();

                if draft.assets().is_empty() {
                    ui.weak("No assets declared yet.");
                }

                for a in draft.assets() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&a.asset_type).strong());
                            ui.label(&a.description);
                            if !a.value.is_empty() {
                                ui.weak(&a.value);
                            }
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Delete").clicked() {
                                self.confirm_delete = Some(a.id.clone());
                            }
                            if ui.button("Edit").clicked() {
                                self.clear_messages();
                                self.form = AssetForm::from_asset(a);
                                self.editing = Some(a.id.clone());
                            }
                            if ui
                                .button("Publish")
                                .on_hover_text("Record this asset on the ledger")
                                .clicked()
                            {
                                self.clear_messages();
                                match command::publish_asset(&a.id, state, gateway.as_ref()) {
                                    Ok(r) => self.msg.set_success(format!(
                                        "Asset published. Tx: {}",
                                        short_digest(&r.digest)
                                    )),
                                    Err(e) => self.msg.from_app_error(&e),
                                }
                            }
                        });
                    });
                    ui.separator();
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Next").clicked() {
                        *route = Route::CreateWill(WizardStep::Parties);
                    }
                });
            });

        if let Some(id) = self.confirm_delete.clone() {
            match confirm_window(
                ui.ctx(),
                "Delete asset",
                "Are you sure you want to delete this asset?",
                "Delete",
            ) {
                Some(true) => {
                    self.confirm_delete = None;
                    match command::remove_asset(&id, state) {
                        Ok(_) => {
                            if self.editing.as_deref() == Some(id.as_str()) {
                                self.form = AssetForm::default();
                                self.editing = None;
                            }
                        }
                        Err(e) => self.msg.from_app_error(&e),
                    }
                }
                Some(false) => self.confirm_delete = None,
                None => {}
            }
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui, state: &AppState) {
        egui::Grid::new("asset_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Asset Type *");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.asset_type)
                        .hint_text("e.g. Real Estate"),
                );
                ui.end_row();

                ui.label("Description *");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.description)
                        .hint_text("e.g. Lekki Property"),
                );
                ui.end_row();

                ui.label("Value (₦)");
                ui.add(egui::TextEdit::singleline(&mut self.form.value).hint_text("5000000"));
                ui.end_row();

                ui.label("Document Proof URL (optional)");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.document_proof_url)
                        .hint_text("ipfs://…"),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let label = if self.editing.is_some() {
                "Update Asset"
            } else {
                "Add Asset"
            };

            if ui.button(label).clicked() {
                self.clear_messages();
                match command::save_asset(&self.form, self.editing.as_deref(), state) {
                    Ok(_) => {
                        self.form = AssetForm::default();
                        self.editing = None;
                    }
                    Err(e) => self.msg.from_app_error(&e),
                }
            }

            if self.editing.is_some() && ui.button("Cancel").clicked() {
                self.form = AssetForm::default();
                self.editing = None;
            }
        });
    }
}

pub(super) fn short_digest(d: &str) -> String {
    if d.len() <= 16 {
        return d.to_string();
    }
    format!("{}…{}", &d[..8], &d[d.len() - 8..])
}
