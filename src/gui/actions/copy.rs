// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::{self, Delim}, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();

    let Some(ds) = page.dataset(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but {:?} has nothing loaded", page.kind());
        return;
    };

    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        page.kind(),
        ds.row_count(),
        ds.header_count()
    );

    ui_ctx.copy_text(csv::dataset_to_string(&ds, Delim::Tsv));
    app.status(format!("Copied {} row(s) to clipboard", ds.row_count()));
}
