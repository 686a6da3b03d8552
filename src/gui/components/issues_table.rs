// src/gui/components/issues_table.rs
//
// Read-only table of open video requests. Column order follows ISSUE_HEADERS.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};
use crate::data::{IssueRecord, ISSUE_HEADERS};

// Timestamp, Raised By, Client, Vehicle Number, Issue Details, Current Status
const WIDTHS: [f32; 6] = [140.0, 120.0, 140.0, 120.0, 320.0, 200.0];
const RAISED_BY_COL: usize = 1;

pub fn draw(ui: &mut egui::Ui, issues: &[IssueRecord]) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);

    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for h in ISSUE_HEADERS {
                header.col(|ui| { ui.label(RichText::new(h.to_uppercase()).small().strong()); });
            }
        })
        .body(|body| {
            body.rows(22.0, issues.len(), |mut row| {
                let Some(issue) = issues.get(row.index()) else { return; };
                for (ci, text) in issue.cells().into_iter().enumerate() {
                    row.col(|ui| {
                        if ci == RAISED_BY_COL {
                            ui.label(RichText::new(text).strong());
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}
