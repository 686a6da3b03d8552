// tests/requests.rs
//
// Stale-response handling: only the latest fetch per page may land.
use vtrack_dash::{
    config::{options::PageKind, state::AppState},
    data::{EmployeeRecord, IssueRecord, ScheduleSnapshot},
    error::FetchError,
    gui::{
        app::{App, Completion, Outcome},
        request::RequestSeq,
    },
};

fn snapshot(date: &str) -> ScheduleSnapshot {
    ScheduleSnapshot { date: date.into(), employees: vec![EmployeeRecord::new("Mahesh")], live_count: 0 }
}

#[test]
fn newer_ticket_supersedes_older() {
    let mut seq = RequestSeq::new();
    let first = seq.issue(PageKind::Schedule);
    let second = seq.issue(PageKind::Schedule);

    assert!(second.seq > first.seq);
    assert!(!seq.is_current(&first));
    assert!(seq.is_current(&second));

    assert!(!seq.complete(&first));
    assert!(seq.is_loading());
    assert!(seq.complete(&second));
    assert!(!seq.is_loading());
}

#[test]
fn pages_are_tracked_separately() {
    let mut seq = RequestSeq::new();
    let sched = seq.issue(PageKind::Schedule);
    let issues = seq.issue(PageKind::Issues);

    assert!(seq.is_current(&sched));
    assert!(seq.complete(&issues));
    assert!(seq.is_loading_page(PageKind::Schedule));
    assert!(!seq.is_loading_page(PageKind::Issues));
    assert!(!seq.complete(&issues));
}

#[test]
fn stale_completion_is_dropped() {
    let mut app = App::new(AppState::default());
    let old = app.requests.issue(PageKind::Schedule);
    let new = app.requests.issue(PageKind::Schedule);

    app.apply(Completion { ticket: new, outcome: Outcome::Schedule(Ok(snapshot("20-12-2025"))) });
    app.apply(Completion { ticket: old, outcome: Outcome::Schedule(Ok(snapshot("19-12-2025"))) });

    assert_eq!(app.schedule.as_ref().map(|s| s.date.as_str()), Some("20-12-2025"));
    assert!(!app.loading());
}

#[test]
fn failure_keeps_previous_data_and_sets_message() {
    let mut app = App::new(AppState::default());
    let t = app.requests.issue(PageKind::Schedule);
    app.apply(Completion { ticket: t, outcome: Outcome::Schedule(Ok(snapshot("19-12-2025"))) });

    let t = app.requests.issue(PageKind::Schedule);
    app.apply(Completion {
        ticket: t,
        outcome: Outcome::Schedule(Err(FetchError::NotFound("no such tab".into()))),
    });

    assert_eq!(app.schedule.as_ref().map(|s| s.date.as_str()), Some("19-12-2025"));
    assert_eq!(
        app.error.as_deref(),
        Some("Failed to fetch schedule data. Make sure the sheet name exists.")
    );
    assert!(!app.loading());
}

#[test]
fn issues_replace_wholesale() {
    let mut app = App::new(AppState::default());
    let t = app.requests.issue(PageKind::Issues);
    app.apply(Completion { ticket: t, outcome: Outcome::Issues(Ok(vec![IssueRecord::default(); 3])) });
    let t = app.requests.issue(PageKind::Issues);
    app.apply(Completion { ticket: t, outcome: Outcome::Issues(Ok(vec![])) });

    assert_eq!(app.issues.as_ref().map(Vec::len), Some(0));

    let t = app.requests.issue(PageKind::Issues);
    app.apply(Completion { ticket: t, outcome: Outcome::Issues(Err(FetchError::Status(500))) });
    assert_eq!(app.error.as_deref(), Some("Failed to fetch issues data."));
}
