// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub roster: Roster,
    pub framing: Framing,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            roster: Roster::default(),
            framing: Framing::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Schedule,
    Issues,
}

/// Where the two sheets live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub endpoint: String,
    pub schedule_sheet_id: String,
    pub issues_sheet_id: String,
    pub schedule_tab_prefix: String,
    pub issues_tab: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(QUERY_ENDPOINT),
            schedule_sheet_id: s!(SCHEDULE_SHEET_ID),
            issues_sheet_id: s!(ISSUES_SHEET_ID),
            schedule_tab_prefix: s!(SCHEDULE_TAB_PREFIX),
            issues_tab: s!(ISSUES_TAB),
        }
    }
}

impl SourceOptions {
    /// Tab name for a user-entered date. The date is not validated; a bad
    /// date just names a tab the upstream does not have.
    pub fn schedule_tab(&self, date: &str) -> String {
        join!(&self.schedule_tab_prefix, date)
    }

    pub fn schedule_url(&self, date: &str) -> String {
        self.query_url(&self.schedule_sheet_id, &self.schedule_tab(date))
    }

    pub fn issues_url(&self) -> String {
        self.query_url(&self.issues_sheet_id, &self.issues_tab)
    }

    fn query_url(&self, sheet_id: &str, tab: &str) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        join!(endpoint, "/", sheet_id, "/", QUERY_PATH, &urlencoding::encode(tab))
    }
}

/// Labels searched for in header rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pub employees: Vec<String>,
    pub issue_columns: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            employees: EMPLOYEES.iter().map(|e| s!(*e)).collect(),
            issue_columns: ISSUE_COLUMNS.iter().map(|c| s!(*c)).collect(),
        }
    }
}

/// Fixed-length wrapper around the query response body.
/// Markers are checked before slicing; an empty marker disables its check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framing {
    pub prefix_len: usize,
    pub suffix_len: usize,
    pub prefix_marker: String,
    pub suffix_marker: String,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            prefix_len: WRAPPER_PREFIX_LEN,
            suffix_len: WRAPPER_SUFFIX_LEN,
            prefix_marker: s!(WRAPPER_PREFIX_MARKER),
            suffix_marker: s!(WRAPPER_SUFFIX_MARKER),
        }
    }
}
