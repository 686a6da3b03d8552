// tests/common/mod.rs
//
// Fixture builders shared by the integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};
use vtrack_dash::{
    config::options::{AppOptions, Framing, Roster},
    core::{Row, Table},
};

pub const PREAMBLE: &str = "/*O_o*/\ngoogle.visualization.Query.setResponse(";
pub const SUFFIX: &str = ");";

/// Wrap a JSON document the way the query endpoint does.
pub fn wrap(json: &str) -> String {
    format!("{PREAMBLE}{json}{SUFFIX}")
}

/// `None` → null cell, `Some(s)` → `{"v": s}`.
fn wire_cell(v: Option<&str>) -> Value {
    match v {
        Some(s) => json!({ "v": s }),
        None => Value::Null,
    }
}

/// Rows of optional texts as a full query document (unwrapped).
pub fn doc(rows: &[Vec<Option<&str>>]) -> String {
    let rows: Vec<Value> = rows.iter()
        .map(|r| json!({ "c": r.iter().map(|c| wire_cell(*c)).collect::<Vec<_>>() }))
        .collect();
    json!({ "version": "0.6", "status": "ok", "table": { "cols": [], "rows": rows } }).to_string()
}

/// Every cell present.
pub fn full<'a>(cells: &[&'a str]) -> Vec<Option<&'a str>> {
    cells.iter().map(|c| Some(*c)).collect()
}

/// Wrapped response body for the given rows of plain text.
pub fn body(rows: &[&[&str]]) -> String {
    let rows: Vec<Vec<Option<&str>>> = rows.iter().map(|r| full(*r)).collect();
    wrap(&doc(&rows))
}

pub fn table(rows: &[&[&str]]) -> Table {
    Table { rows: rows.iter().map(|r| Row::from_texts(*r)).collect() }
}

pub fn framing() -> Framing {
    Framing::default()
}

/// Options with a small two-person roster.
pub fn opts() -> AppOptions {
    AppOptions {
        roster: Roster {
            employees: vec!["Mahesh".into(), "Rakesh".into()],
            ..Roster::default()
        },
        ..AppOptions::default()
    }
}

pub const SCHEDULE_HEADER: &[&str] = &["9:00", "Mahesh Slot", "", "Rakesh Slot", ""];

pub const ISSUES_HEADER: &[&str] = &[
    "Timestamp Issues Raised",
    "Raised by",
    "Clients",
    "Vehicle Number",
    "Sub-request",
    "Issue Details",
    "Resolved Y/N",
    "Date - Current Status",
];
