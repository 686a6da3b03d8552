// src/gui/pages/schedule.rs
use eframe::egui::{self, Color32, RichText};

use crate::{
    config::options::PageKind,
    data::DataSet,
    gui::{actions, app::App, components::{date_bar, employee_card}},
};

use super::Page;

pub struct SchedulePage;
pub static PAGE: SchedulePage = SchedulePage;

const CARD_COLUMNS: usize = 3;

impl Page for SchedulePage {
    fn title(&self) -> &'static str { "Schedule Tracking" }
    fn kind(&self) -> PageKind { PageKind::Schedule }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        date_bar::draw(ui, app);
        ui.separator();

        let Some(snap) = &app.schedule else { return; };

        ui.horizontal(|ui| {
            ui.label(RichText::new("Live Vehicles Count:").size(20.0).strong());
            ui.label(RichText::new(snap.live_count.to_string())
                .size(20.0)
                .strong()
                .color(Color32::from_rgb(22, 163, 74)));
        });
        ui.label(format!("Date: {}", snap.date));
        ui.add_space(8.0);

        if snap.employees.is_empty() {
            ui.label("No employee columns found in this schedule.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("schedule_cards")
            .show(ui, |ui| {
                ui.columns(CARD_COLUMNS, |cols| {
                    for (i, record) in snap.employees.iter().enumerate() {
                        employee_card::draw(&mut cols[i % CARD_COLUMNS], record);
                    }
                });
            });
    }

    fn refresh(&self, app: &mut App, ctx: &egui::Context) {
        actions::fetch_schedule(app, ctx);
    }

    fn dataset(&self, app: &App) -> Option<DataSet> {
        app.schedule.as_ref().map(|s| s.to_dataset())
    }
}
