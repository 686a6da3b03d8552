// src/gui/components/date_bar.rs
//
// Date entry + Fetch button for the Schedule tab. The date is free text;
// whatever is typed becomes part of the tab name.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    let loading = app.loading();
    let mut fetch_clicked = false;

    ui.label("Select Date (format: 19-12-2025)");
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.date_text)
                .hint_text("DD-MM-YYYY")
                .desired_width(240.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let label = if loading { "Loading..." } else { "Fetch Data" };
        let clicked = ui.add_enabled(!loading, egui::Button::new(label)).clicked();

        if (clicked || submitted) && !loading {
            fetch_clicked = true;
        }
    });

    if fetch_clicked {
        actions::fetch_schedule(app, &ctx);
    }
}
