// src/gui/actions/fetch.rs
//
// Kick off a background fetch. The worker thread owns a clone of the
// options and reports back through App's channel with its ticket; App
// decides on the UI thread whether the result is still wanted.

use std::thread;

use eframe::egui;

use crate::{
    collect,
    config::options::PageKind,
    gui::{
        app::{App, Completion, Outcome},
        progress::GuiProgress,
    },
};

pub fn fetch_schedule(app: &mut App, ctx: &egui::Context) {
    let date = app.state.gui.date_text.trim().to_string();
    if date.is_empty() {
        logd!("Fetch: schedule skipped, no date entered");
        return;
    }

    app.error = None;
    let ticket = app.requests.issue(PageKind::Schedule);
    logf!("Fetch: schedule date={} seq={}", date, ticket.seq);

    let opts = app.state.options.clone();
    let tx = app.sender();
    let mut prog = GuiProgress::new(app.status.clone());
    let ctx = ctx.clone();

    thread::spawn(move || {
        let res = collect::collect_schedule(&opts, &date, Some(&mut prog));
        let _ = tx.send(Completion { ticket, outcome: Outcome::Schedule(res) });
        ctx.request_repaint();
    });
}

pub fn fetch_issues(app: &mut App, ctx: &egui::Context) {
    app.error = None;
    let ticket = app.requests.issue(PageKind::Issues);
    logf!("Fetch: issues seq={}", ticket.seq);

    let opts = app.state.options.clone();
    let tx = app.sender();
    let mut prog = GuiProgress::new(app.status.clone());
    let ctx = ctx.clone();

    thread::spawn(move || {
        let res = collect::collect_issues(&opts, Some(&mut prog));
        let _ = tx.send(Completion { ticket, outcome: Outcome::Issues(res) });
        ctx.request_repaint();
    });
}
