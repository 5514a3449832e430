// src/ui/panel_parties.rs

use std::sync::Arc;

use eframe::egui;
use ooma_will_drafter_lib::{
    command,
    context::AppCtx,
    draft::{PartyForm, PartyId, PartyRole},
    ledger::LedgerGateway,
    route::Route,
    types::AppState,
    wizard::WizardStep,
};

use super::message::PanelMsgState;
use super::panel_assets::short_digest;
use super::widgets::{confirm_window, wizard_stepper};

pub struct PartiesPanel {
    form: PartyForm,
    editing: Option<PartyId>,
    confirm_delete: Option<PartyId>,
    msg: PanelMsgState,
}

impl PartiesPanel {
    pub fn new() -> Self {
        Self {
            form: PartyForm::default(),
            editing: None,
            confirm_delete: None,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.form = PartyForm::default();
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
                ui.heading("Step 2: Define the People in Your Will");
                ui.add_space(8.0);

                self.ui_form(ui, state);

                ui.add_space(8.0);
                self.msg.show(ui, ctx.debug_ui);

                ui.add_space(16.0);

                for role in PartyRole::ALL {
                    ui.label(egui::RichText::new(format!("{}s", role.label())).strong());
                    ui.separator();

                    let people = draft.parties_with_role(role);
                    if people.is_empty() {
                        ui.weak("None added.");
                    }

                    for p in people {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&p.user_name).strong());
                                ui.weak(format!("{} · {} · {}", p.relationship, p.email, p.phone_number));
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Delete").clicked() {
                                        self.confirm_delete = Some(p.id.clone());
                                    }
                                    if ui.button("Edit").clicked() {
                                        self.clear_messages();
                                        self.form = PartyForm::from_party(p);
                                        self.editing = Some(p.id.clone());
                                    }
                                    if role != PartyRole::Lawyer
                                        && ui
                                            .button("Publish")
                                            .on_hover_text("Record this person on the ledger")
                                            .clicked()
                                    {
                                        self.clear_messages();
                                        match command::publish_party(&p.id, state, gateway.as_ref())
                                        {
                                            Ok(r) => self.msg.set_success(format!(
                                                "{} published. Tx: {}",
                                                role.label(),
                                                short_digest(&r.digest)
                                            )),
                                            Err(e) => self.msg.from_app_error(&e),
                                        }
                                    }
                                },
                            );
                        });
                    }

                    ui.add_space(12.0);
                }

                ui.horizontal(|ui| {
                    if ui.button("Back").clicked() {
                        *route = Route::CreateWill(WizardStep::Assets);
                    }
                    if ui.button("Next").clicked() {
                        *route = Route::CreateWill(WizardStep::Assemble);
                    }
                });
            });

        if let Some(id) = self.confirm_delete.clone() {
            match confirm_window(ui.ctx(), "Delete person", "Delete this party?", "Delete") {
                Some(true) => {
                    self.confirm_delete = None;
                    match command::remove_party(&id, state) {
                        Ok(_) => {
                            if self.editing.as_deref() == Some(id.as_str()) {
                                self.form = PartyForm::default();
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
        egui::Grid::new("party_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Full Name *");
                ui.text_edit_singleline(&mut self.form.user_name);
                ui.end_row();

                ui.label("Relationship *");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.relationship)
                        .hint_text("e.g. Wife"),
                );
                ui.end_row();

                ui.label("Email Address *");
                ui.text_edit_singleline(&mut self.form.email);
                ui.end_row();

                ui.label("Phone Number *");
                ui.text_edit_singleline(&mut self.form.phone_number);
                ui.end_row();

                ui.label("Digital Signature");
                ui.text_edit_singleline(&mut self.form.user_signature);
                ui.end_row();

                ui.label("Signature Type");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.user_signature_type)
                        .hint_text("e.g. NIN"),
                );
                ui.end_row();

                ui.label("Role");
                egui::ComboBox::from_id_salt("party_role")
                    .selected_text(self.form.user_role.label())
                    .show_ui(ui, |ui| {
                        for role in PartyRole::ALL {
                            ui.selectable_value(&mut self.form.user_role, role, role.label());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let label = if self.editing.is_some() {
                "Update Person"
            } else {
                "Add Person"
            };

            if ui.button(label).clicked() {
                self.clear_messages();
                match command::save_party(&self.form, self.editing.as_deref(), state) {
                    Ok(_) => {
                        self.form = PartyForm::default();
                        self.editing = None;
                    }
                    Err(e) => self.msg.from_app_error(&e),
                }
            }

            if self.editing.is_some() && ui.button("Cancel").clicked() {
                self.form = PartyForm::default();
                self.editing = None;
            }
        });
    }
}
