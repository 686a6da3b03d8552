// src/collect.rs
//
// Pipeline drivers: Fetch → Unwrap → Tabulate → Classify, with progress.
// One attempt per call; errors go back to the caller untouched (and logged).

use crate::{
    config::options::AppOptions,
    core::net,
    data::{IssueRecord, ScheduleSnapshot},
    error::Result,
    progress::Progress,
    specs::{issues, schedule},
};

const STAGES: usize = 2;

fn run<T>(
    what: &str,
    url: String,
    mut progress: Option<&mut dyn Progress>,
    read: impl FnOnce(&str) -> Result<T>,
) -> Result<T> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
        p.log(&format!("Fetching {what}…"));
    }
    logf!("Collect: {what} ← {url}");

    let result = net::http_get(&url).and_then(|body| {
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done("fetch");
        }
        read(&body)
    });

    match &result {
        Ok(_) => {
            if let Some(p) = progress.as_deref_mut() { p.stage_done("classify"); }
        }
        Err(e) => loge!("Collect: {what} failed ({:?}): {e}", e.kind()),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

/// Fetch and classify the schedule tab for `date` (as typed, DD-MM-YYYY).
pub fn collect_schedule(
    opts: &AppOptions,
    date: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<ScheduleSnapshot> {
    let url = opts.source.schedule_url(date);
    let snap = run("schedule", url, progress, |body| schedule::read(body, opts, date))?;
    logf!(
        "Collect: schedule {} → employees={} live={}",
        snap.date, snap.employees.len(), snap.live_count
    );
    Ok(snap)
}

/// Fetch and classify the open video-request issues.
pub fn collect_issues(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<IssueRecord>> {
    let url = opts.source.issues_url();
    let issues = run("issues", url, progress, |body| issues::read(body, opts))?;
    logf!("Collect: issues → {} open video request(s)", issues.len());
    Ok(issues)
}
