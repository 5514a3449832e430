// src/ui/widgets.rs

use eframe::egui;
use ooma_will_drafter_lib::{
    route::Route,
    wizard::{stepper, StepStatus},
};

const AMBER: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);
const NAVY: egui::Color32 = egui::Color32::from_rgb(30, 58, 138);
const GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

/// Three-step progress bar for `/create-will/*`. Every step is clickable.
pub fn wizard_stepper(ui: &mut egui::Ui, route: &mut Route) {
    let views = stepper(route.path());

    ui.horizontal(|ui| {
        for (i, v) in views.iter().enumerate() {
            if i > 0 {
                ui.weak("──");
            }

            let (marker, color) = match v.status {
                StepStatus::Completed => ("✔".to_string(), GREEN),
                StepStatus::Active => (v.number.to_string(), AMBER),
                StepStatus::Pending => (v.number.to_string(), ui.visuals().weak_text_color()),
            };

            let text = egui::RichText::new(format!("{marker}  {}", v.name)).color(color);
            let text = if v.status == StepStatus::Active {
                text.strong()
            } else {
                text
            };

            if ui.add(egui::Button::new(text).frame(false)).clicked() {
                if let Some(target) = Route::from_path(v.href) {
                    *route = target;
                }
            }
        }
    });
}

pub fn info_card(ui: &mut egui::Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.weak(title);
            ui.label(egui::RichText::new(value).size(20.0).strong().color(NAVY));
        });
}

pub fn ui_notice(ui: &mut egui::Ui, title: &str, body: &str) {
    let stroke = egui::Stroke::new(1.5, AMBER);
    let fill = egui::Color32::from_rgba_unmultiplied(AMBER.r(), AMBER.g(), AMBER.b(), 40);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(title).size(18.0).strong().color(AMBER));
            ui.add_space(4.0);
            ui.label(body);
        });
}

/// Modal yes/no. Returns `Some(true)` on confirm, `Some(false)` on cancel.
pub fn confirm_window(ctx: &egui::Context, title: &str, body: &str, ok_label: &str) -> Option<bool> {
    let mut answer = None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(body);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
                if ui.button(ok_label).clicked() {
                    answer = Some(true);
                }
            });
        });

    answer
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.colored_label(color, text);
        });
}
