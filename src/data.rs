// src/data.rs
//
// Classified results handed to the front ends.
//
// - ScheduleSnapshot: one schedule fetch (date, per-employee records, live count).
// - IssueRecord:      one unresolved video-request row from the issues sheet.
// - DataSet:          flat headers + rows projection used by Copy and the CLI.
//
// Snapshots are built once per fetch and never patched; a new fetch builds
// a new one.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClientStatus {
    Pending,
    Completed,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Pending => "Pending",
            ClientStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEntry {
    pub name: String,
    pub time_slot: String,
    pub status: ClientStatus,
}

/// Counters only move through `push`, so `pending + completed` always
/// equals `clients.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    name: String,
    pending: u32,
    completed: u32,
    clients: Vec<ClientEntry>,
}

impl EmployeeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), pending: 0, completed: 0, clients: Vec::new() }
    }

    pub fn push(&mut self, entry: ClientEntry) {
        match entry.status {
            ClientStatus::Pending => self.pending += 1,
            ClientStatus::Completed => self.completed += 1,
        }
        self.clients.push(entry);
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn pending(&self) -> u32 { self.pending }
    pub fn completed(&self) -> u32 { self.completed }
    pub fn clients(&self) -> &[ClientEntry] { &self.clients }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub date: String,
    /// Roster order, one per employee resolved in the header row.
    pub employees: Vec<EmployeeRecord>,
    pub live_count: u32,
}

impl ScheduleSnapshot {
    pub fn employee(&self, name: &str) -> Option<&EmployeeRecord> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn total_pending(&self) -> u32 {
        self.employees.iter().map(|e| e.pending).sum()
    }

    pub fn total_completed(&self) -> u32 {
        self.employees.iter().map(|e| e.completed).sum()
    }

    /// One row per client entry: Employee, Client, Time Slot, Status.
    pub fn to_dataset(&self) -> DataSet {
        let headers = ["Employee", "Client", "Time Slot", "Status"]
            .iter().map(|h| s!(*h)).collect();
        let rows = self.employees.iter()
            .flat_map(|e| e.clients.iter().map(move |c| vec![
                e.name.clone(),
                c.name.clone(),
                c.time_slot.clone(),
                s!(c.status.as_str()),
            ]))
            .collect();
        DataSet { headers: Some(headers), rows }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub raised_by: String,
    pub timestamp: String,
    pub client: String,
    pub vehicle_number: String,
    pub issue_details: String,
    pub current_status: String,
}

pub const ISSUE_HEADERS: [&str; 6] = [
    "Timestamp", "Raised By", "Client", "Vehicle Number", "Issue Details", "Current Status",
];

impl IssueRecord {
    /// Cells in ISSUE_HEADERS order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.timestamp.as_str(),
            self.raised_by.as_str(),
            self.client.as_str(),
            self.vehicle_number.as_str(),
            self.issue_details.as_str(),
            self.current_status.as_str(),
        ]
    }
}

pub fn issues_dataset(issues: &[IssueRecord]) -> DataSet {
    DataSet {
        headers: Some(ISSUE_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows: issues.iter()
            .map(|i| i.cells().iter().map(|c| s!(*c)).collect())
            .collect(),
    }
}

/// Flat table for copy/export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.as_ref().map_or(0, |h| h.len()) }
}
