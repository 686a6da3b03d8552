// src/gui/components/employee_card.rs
use eframe::egui::{self, Color32, RichText};
use crate::data::{ClientStatus, EmployeeRecord};

const GREEN: Color32 = Color32::from_rgb(21, 128, 61);
const ORANGE: Color32 = Color32::from_rgb(194, 65, 12);
const CLIENT_LIST_MAX_H: f32 = 256.0;

fn status_color(status: ClientStatus) -> Color32 {
    match status {
        ClientStatus::Completed => GREEN,
        ClientStatus::Pending => ORANGE,
    }
}

pub fn draw(ui: &mut egui::Ui, record: &EmployeeRecord) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(record.name()).size(18.0).strong());
        ui.horizontal(|ui| {
            ui.colored_label(GREEN, format!("✔ {}", record.completed()))
                .on_hover_text("Completed");
            ui.colored_label(ORANGE, format!("● {}", record.pending()))
                .on_hover_text("Pending");
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt(("clients", record.name()))
            .max_height(CLIENT_LIST_MAX_H)
            .show(ui, |ui| {
                for client in record.clients() {
                    ui.label(RichText::new(&client.name).strong());
                    ui.label(RichText::new(&client.time_slot).small());
                    ui.label(RichText::new(client.status.as_str())
                        .small()
                        .strong()
                        .color(status_color(client.status)));
                    ui.add_space(4.0);
                }
            });
    });
    ui.add_space(8.0);
}
