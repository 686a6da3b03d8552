// src/gui/pages/issues.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::{issues_dataset, DataSet},
    gui::{actions, app::App, components::issues_table},
};

use super::Page;

pub struct IssuesPage;
pub static PAGE: IssuesPage = IssuesPage;

impl Page for IssuesPage {
    fn title(&self) -> &'static str { "Video Request Issues" }
    fn kind(&self) -> PageKind { PageKind::Issues }

    // The issues list is refreshed every time the tab is opened.
    fn on_enter(&self, app: &mut App, ctx: &egui::Context) {
        actions::fetch_issues(app, ctx);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let loading = app.requests.is_loading_page(PageKind::Issues);
        let mut refresh_clicked = false;

        ui.horizontal(|ui| {
            ui.heading("Pending Video Request Issues");
            if ui.add_enabled(!loading, egui::Button::new("Refresh")).clicked() {
                refresh_clicked = true;
            }
        });
        ui.add_space(6.0);

        if refresh_clicked {
            self.refresh(app, &ui.ctx().clone());
        }

        if loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
            return;
        }

        match app.issues.as_deref() {
            Some(list) if !list.is_empty() => issues_table::draw(ui, list),
            _ => { ui.label("No pending video request issues found."); }
        }
    }

    fn refresh(&self, app: &mut App, ctx: &egui::Context) {
        actions::fetch_issues(app, ctx);
    }

    fn dataset(&self, app: &App) -> Option<DataSet> {
        app.issues.as_deref().map(issues_dataset)
    }
}
