// src/ui/panel_assemble.rs

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use ooma_will_drafter_lib::{
    command::{self, SealPoll, SealReceipt, SealTicket},
    context::AppCtx,
    draft::{is_selected, Asset, DraftStore, Party},
    error::AppError,
    ledger::LedgerGateway,
    route::Route,
    types::AppState,
    wizard::{check_seal_preconditions, LawyerFallback, ValidationError, WizardStep},
};

use super::message::PanelMsgState;
use super::widgets::wizard_stepper;

const POPUP_AUTO_CLOSE: Duration = Duration::from_secs(5);
const POLL_REPAINT: Duration = Duration::from_millis(100);

const AGREEMENT_TEXT: &str = "I have reviewed the preview and confirm that the details are \
                              correct. I agree to the creation of this immutable E-Will.";

pub struct AssemblePanel {
    agreed: bool,
    instructions: String,
    instructions_loaded: bool,
    ticket: Option<SealTicket>,
    msg: PanelMsgState,
}

/// Confirmation shown after a successful seal, wherever the user is.
pub struct SealPopup {
    receipt: SealReceipt,
    shown_at: Instant,
}

impl SealPopup {
    pub fn new(receipt: SealReceipt) -> Self {
        Self {
            receipt,
            shown_at: Instant::now(),
        }
    }

    /// Returns true once the popup is dismissed (button or timeout).
    pub fn ui(&self, ctx: &egui::Context) -> bool {
        let elapsed = self.shown_at.elapsed();
        if elapsed >= POPUP_AUTO_CLOSE {
            return true;
        }
        ctx.request_repaint_after(POPUP_AUTO_CLOSE.saturating_sub(elapsed));

        let mut closed = false;
        egui::Window::new("Congratulations!")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Your E-Will has been sealed on the ledger!");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Tx:");
                    ui.monospace(&self.receipt.digest);
                });
                ui.weak(format!(
                    "Sealed at {}",
                    self.receipt.sealed_at.format("%Y-%m-%d %H:%M:%S UTC")
                ));
                ui.add_space(12.0);
                if ui.button("Go to Dashboard").clicked() {
                    closed = true;
                }
            });
        closed
    }
}

impl AssemblePanel {
    pub fn new() -> Self {
        Self {
            agreed: false,
            instructions: String::new(),
            instructions_loaded: false,
            ticket: None,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.agreed = false;
        self.instructions.clear();
        self.instructions_loaded = false;
    }

    pub fn sealing(&self) -> bool {
        self.ticket.is_some()
    }

    /// Drives an in-flight seal; runs every frame regardless of the current route.
    pub fn poll(&mut self, egui_ctx: &egui::Context, state: &AppState) -> Option<SealReceipt> {
        let ticket = self.ticket.as_ref()?;

        match command::poll_seal(ticket, state) {
            SealPoll::Pending => {
                egui_ctx.request_repaint_after(POLL_REPAINT);
                None
            }
            SealPoll::Sealed(receipt) => {
                self.ticket = None;
                self.reset_inputs();
                self.msg.clear();
                Some(receipt)
            }
            SealPoll::Failed(e) => {
                self.ticket = None;
                self.msg.from_app_error(&e);
                None
            }
        }
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

        if !self.instructions_loaded {
            self.instructions = draft.instructions().to_string();
            self.instructions_loaded = true;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading("Step 3: Preview & Save Your Will");
                ui.add_space(8.0);

                ui.add_enabled_ui(!self.sealing(), |ui| {
                    ui.columns(2, |cols| {
                        self.ui_selection(&mut cols[0], state, &draft);
                        ui_preview(&mut cols[1], &draft);
                    });
                });

                ui.add_space(12.0);
                ui.separator();

                ui.add_enabled(
                    !self.sealing(),
                    egui::Checkbox::new(&mut self.agreed, AGREEMENT_TEXT),
                );

                ui.add_space(8.0);
                self.msg.show(ui, ctx.debug_ui);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Back").clicked() {
                        *route = Route::CreateWill(WizardStep::Parties);
                    }

                    let ready = check_seal_preconditions(&draft, self.agreed).is_ok();
                    let label = if self.sealing() {
                        "Sealing On-Chain…"
                    } else {
                        "Confirm & Seal Will"
                    };

                    if ui
                        .add_enabled(ready && !self.sealing(), egui::Button::new(label))
                        .clicked()
                    {
                        self.clear_messages();
                        match command::begin_seal(self.agreed, state, ctx, gateway.clone()) {
                            Ok(t) => self.ticket = Some(t),
                            Err(e) => self.msg.from_app_error(&e),
                        }
                    }

                    if let Some(t) = &self.ticket {
                        ui.spinner();
                        ui.weak(format!("{}s", t.elapsed().as_secs()));
                    }
                });

                if !self.sealing() {
                    ui_missing_hint(ui, &draft, self.agreed);
                }
            });
    }

    fn ui_selection(&mut self, ui: &mut egui::Ui, state: &AppState, draft: &DraftStore) {
        ui.label(egui::RichText::new("1. Select Assets to Include").strong());
        for a in draft.assets() {
            let mut on = is_selected(draft.selected_asset_ids(), &a.id);
            let text = if a.value.is_empty() {
                a.description.clone()
            } else {
                format!("{} ({})", a.description, a.value)
            };
            if ui.checkbox(&mut on, text).changed() {
                self.report(command::toggle_asset(&a.id, state));
            }
        }
        ui.add_space(8.0);

        ui.label(egui::RichText::new("2. Select Beneficiaries").strong());
        for p in draft.beneficiaries() {
            let mut on = is_selected(draft.selected_beneficiary_ids(), &p.id);
            if ui.checkbox(&mut on, &p.user_name).changed() {
                self.report(command::toggle_beneficiary(&p.id, state));
            }
        }
        ui.add_space(8.0);

        ui.label(egui::RichText::new("3. Select Witnesses").strong());
        for p in draft.witnesses() {
            let mut on = is_selected(draft.selected_witness_ids(), &p.id);
            if ui.checkbox(&mut on, &p.user_name).changed() {
                self.report(command::toggle_witness(&p.id, state));
            }
        }
        ui.add_space(8.0);

        ui.label(egui::RichText::new("4. Assign Lawyer for Validation").strong());
        let lawyers = draft.lawyers();
        let current = draft.lawyer_id().map(str::to_string);
        let mut choice = current.clone();
        let selected_text = current
            .as_deref()
            .and_then(|id| lawyers.iter().find(|l| l.id == id))
            .map(|l| l.user_name.clone())
            .unwrap_or_else(|| "-- Select a Lawyer --".to_string());

        egui::ComboBox::from_id_salt("lawyer_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for l in &lawyers {
                    ui.selectable_value(&mut choice, Some(l.id.clone()), &l.user_name);
                }
            });
        if choice != current {
            self.report(command::set_lawyer(choice, state));
        }
        ui.add_space(8.0);

        ui.label(egui::RichText::new("5. Final Instructions").strong());
        let r = ui.add(
            egui::TextEdit::multiline(&mut self.instructions)
                .desired_rows(4)
                .hint_text("e.g. 'My Lekki property...'"),
        );
        if r.changed() {
            self.report(command::set_instructions(&self.instructions, state));
        }
    }

    fn report(&mut self, res: Result<(), AppError>) {
        if let Err(e) = res {
            self.msg.from_app_error(&e);
        }
    }
}

fn ui_preview(ui: &mut egui::Ui, draft: &DraftStore) {
    let preview = draft.preview();

    ui.label(egui::RichText::new("Will Preview").strong().size(18.0));
    ui.add_space(6.0);

    preview_section(ui, "Assets Included", preview.assets.iter().map(|a| asset_line(a)));
    preview_section(ui, "Beneficiaries", preview.beneficiaries.iter().map(|p| party_line(p)));
    preview_section(ui, "Witnesses", preview.witnesses.iter().map(|p| party_line(p)));

    ui.label(egui::RichText::new("Legal Validation").strong());
    match preview.lawyer {
        Some(l) => ui.colored_label(
            egui::Color32::from_rgb(22, 163, 74),
            format!("Assigned to: {}", l.user_name),
        ),
        None => ui.colored_label(egui::Color32::from_rgb(239, 68, 68), "No lawyer assigned"),
    };
    ui.add_space(6.0);

    ui.label(egui::RichText::new("Instructions").strong());
    if preview.instructions.trim().is_empty() {
        ui.weak("No specific instructions provided.");
    } else {
        ui.label(egui::RichText::new(preview.instructions).italics());
    }
}

fn preview_section(ui: &mut egui::Ui, title: &str, lines: impl Iterator<Item = String>) {
    ui.label(egui::RichText::new(title).strong());
    let mut any = false;
    for l in lines {
        any = true;
        ui.label(format!("• {l}"));
    }
    if !any {
        ui.weak("None selected");
    }
    ui.add_space(6.0);
}

fn asset_line(a: &Asset) -> String {
    if a.value.is_empty() {
        format!("{}: {}", a.asset_type, a.description)
    } else {
        format!("{}: {} ({})", a.asset_type, a.description, a.value)
    }
}

fn party_line(p: &Party) -> String {
    format!("{} ({})", p.user_name, p.relationship)
}

/// Explains a disabled seal button, including the party older clients would
/// have picked as lawyer without asking.
fn ui_missing_hint(ui: &mut egui::Ui, draft: &DraftStore, agreed: bool) {
    let err = match check_seal_preconditions(draft, agreed) {
        Ok(_) => return,
        Err(e) => e,
    };

    ui.add_space(6.0);
    ui.weak(err.short());

    if let ValidationError::Unmet {
        lawyer_fallback: Some(fb),
        ..
    } = &err
    {
        let name = draft
            .party(fb.party_id())
            .map(|p| p.user_name.clone())
            .unwrap_or_else(|| fb.party_id().to_string());
        let which = match fb {
            LawyerFallback::FirstWitness(_) => "first witness",
            LawyerFallback::FirstBeneficiary(_) => "first beneficiary",
        };
        ui.weak(format!(
            "No lawyer is assigned. {name} ({which}) will not be used in their place; \
             choose a lawyer above."
        ));
    }
}
