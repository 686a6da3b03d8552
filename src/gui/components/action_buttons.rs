// src/gui/components/action_buttons.rs
//
// Bottom bar: Copy, spinner while a fetch is out, status line.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let can_copy = app.current_page().dataset(app).is_some();

    ui.horizontal(|ui| {
        let button_copy = ui.add_enabled(can_copy, egui::Button::new("Copy"))
            .on_hover_text("Copy the current view as TSV");
        if button_copy.clicked() {
            actions::copy(app, ui.ctx());
        }

        if app.loading() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
