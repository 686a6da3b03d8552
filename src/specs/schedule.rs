// src/specs/schedule.rs
//! Schedule sheet: one tab per day (`Schedule_<DD-MM-YYYY>`).
//!
//! Layout, as far as we rely on it:
//! - Row 0 names employees somewhere in their column headers
//!   (`"Mahesh Slot"`); the column after each employee holds the status.
//! - Column 0 of every data row is the time-slot label. Slots containing
//!   `WEEK OFF`, `INACTIVE` or `Call` are not working rows and are skipped.
//! - Any cell containing `Live` counts toward the live-vehicle total, once
//!   per cell.
//! - An employee cell holds the client name; `-` or blank means no client.
//!   The next cell being filled (not blank, not `-`) marks it completed.

use crate::{
    config::options::AppOptions,
    core::{gviz, sanitize, Row, Table},
    data::{ClientEntry, ClientStatus, EmployeeRecord, ScheduleSnapshot},
    error::{FetchError, Result},
};

use super::columns::{resolve_columns, ColumnIndex, LabelMatch};

/// Records in roster order, plus the live count.
pub fn classify(table: &Table, columns: &ColumnIndex, roster: &[String]) -> (Vec<EmployeeRecord>, u32) {
    let mut employees: Vec<(usize, EmployeeRecord)> = roster.iter()
        .filter_map(|name| columns.get(name).map(|ix| (ix, EmployeeRecord::new(name.as_str()))))
        .collect();
    let mut live = 0u32;

    for row in table.body() {
        let slot = row.text(0);
        if sanitize::is_off_slot(slot) { continue; }

        live += count_live(row);

        for (ix, record) in employees.iter_mut() {
            if let Some(entry) = client_entry(row, *ix) {
                record.push(entry);
            }
        }
    }

    (employees.into_iter().map(|(_, r)| r).collect(), live)
}

fn count_live(row: &Row) -> u32 {
    row.cells.iter().filter(|c| sanitize::is_live(c.display_str())).count() as u32
}

fn client_entry(row: &Row, ix: usize) -> Option<ClientEntry> {
    let client = row.text(ix);
    if sanitize::is_placeholder(client) { return None; }

    let status = if sanitize::has_value(row.text(ix + 1)) {
        ClientStatus::Completed
    } else {
        ClientStatus::Pending
    };

    Some(ClientEntry {
        name: s!(client),
        time_slot: s!(row.text(0)),
        status,
    })
}

/// Classify an already-fetched response body.
pub fn read(body: &str, opts: &AppOptions, date: &str) -> Result<ScheduleSnapshot> {
    let table = gviz::read_table(body, &opts.framing)?;
    let header = table.header()
        .ok_or_else(|| FetchError::Parse(s!("schedule table has no header row")))?;

    let columns = resolve_columns(header, &opts.roster.employees, LabelMatch::First);
    logd!("Schedule: {} employee column(s) resolved", columns.len());

    let (employees, live_count) = classify(&table, &columns, &opts.roster.employees);
    Ok(ScheduleSnapshot { date: s!(date), employees, live_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_entry_reads_next_column_for_status() {
        let row = Row::from_texts(&["9:00", "ClientX", "Done", "-", ""]);
        let e = client_entry(&row, 1).unwrap();
        assert_eq!(e.status, ClientStatus::Completed);
        assert_eq!(e.time_slot, "9:00");
        assert!(client_entry(&row, 3).is_none());
    }

    #[test]
    fn client_entry_past_row_end_is_pending() {
        let row = Row::from_texts(&["9:00", "ClientX"]);
        assert_eq!(client_entry(&row, 1).unwrap().status, ClientStatus::Pending);
    }

    #[test]
    fn client_name_is_kept_untrimmed() {
        let row = Row::from_texts(&["9:00", " ClientX "]);
        assert_eq!(client_entry(&row, 1).unwrap().name, " ClientX ");
    }
}
