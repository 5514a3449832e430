// src/ui/message.rs

use ooma_will_drafter_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    pub fn is_set(&self) -> bool {
        self.kind.is_some() && self.short.is_some()
    }

    fn set(&mut self, kind: UserMsgKind, short: impl Into<String>) {
        self.kind = Some(kind);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Success, short);
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Warn, short);
    }

    pub fn set_info(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Info, short);
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Error, short);
    }

    /// Ledger failures keep the gateway's own text; everything else gets the short message.
    pub fn from_app_error(&mut self, err: &AppError) {
        let um = err.user_msg();

        self.kind = Some(um.kind);
        self.short = Some(if err.surfaces_verbatim() {
            err.to_string()
        } else {
            um.short.to_string()
        });
        self.detail = um.detail;
    }

    pub fn show(&self, ui: &mut Ui, debug_ui: bool) {
        let (Some(kind), Some(short)) = (self.kind, self.short.as_deref()) else {
            return;
        };

        let text = if debug_ui {
            self.detail.as_deref().unwrap_or(short)
        } else {
            short
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (Color32::from_rgb(22, 163, 74), Color32::from_rgb(5, 60, 30)),
            UserMsgKind::Warn => (Color32::from_rgb(251, 191, 36), Color32::from_rgb(90, 60, 0)),
            UserMsgKind::Error => (Color32::from_rgb(239, 68, 68), Color32::from_rgb(90, 0, 0)),
            UserMsgKind::Info => (Color32::from_rgb(96, 165, 250), Color32::from_rgb(10, 40, 80)),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text);
            });
    }
}
