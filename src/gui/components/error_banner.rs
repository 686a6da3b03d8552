// src/gui/components/error_banner.rs
use eframe::egui::{self, Color32, Stroke};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(msg) = &app.error else { return; };

    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(254, 226, 226))
        .stroke(Stroke::new(1.0, Color32::from_rgb(248, 113, 113)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(Color32::from_rgb(185, 28, 28), msg.as_str());
        });
    ui.add_space(6.0);
}
