// src/specs/issues.rs
//! Issues sheet (`Issues- Realtime`): a running log, one issue per row.
//!
//! Only open video requests are kept: `Sub-request` contains
//! `Customer request for video` and `Resolved Y/N` is `no` in any case.

use crate::{
    config::consts::*,
    config::options::AppOptions,
    core::{gviz, sanitize, Cell, Row, Table},
    data::IssueRecord,
    error::{FetchError, Result},
};

use super::columns::{resolve_columns, ColumnIndex, LabelMatch};

pub fn is_open_video_request(row: &Row, columns: &ColumnIndex) -> bool {
    sanitize::is_video_request(columns.text(row, COL_SUB_REQUEST))
        && sanitize::is_unresolved(columns.text(row, COL_RESOLVED))
}

fn to_record(row: &Row, columns: &ColumnIndex) -> IssueRecord {
    let text = |label: &str| s!(columns.text(row, label));
    IssueRecord {
        raised_by: text(COL_RAISED_BY),
        timestamp: s!(columns.cell(row, COL_TIMESTAMP).map(Cell::formatted_or_display).unwrap_or("")),
        client: text(COL_CLIENTS),
        vehicle_number: text(COL_VEHICLE),
        issue_details: text(COL_DETAILS),
        current_status: text(COL_STATUS),
    }
}

/// Open video requests in sheet order.
pub fn classify(table: &Table, columns: &ColumnIndex) -> Vec<IssueRecord> {
    table.body()
        .filter(|row| is_open_video_request(row, columns))
        .map(|row| to_record(row, columns))
        .collect()
}

/// Classify an already-fetched response body.
pub fn read(body: &str, opts: &AppOptions) -> Result<Vec<IssueRecord>> {
    let table = gviz::read_table(body, &opts.framing)?;
    let header = table.header()
        .ok_or_else(|| FetchError::Parse(s!("issues table has no header row")))?;

    let columns = resolve_columns(header, &opts.roster.issue_columns, LabelMatch::Every);
    for label in &opts.roster.issue_columns {
        if !columns.contains(label) {
            logd!("Issues: column {:?} not in header, reading as empty", label);
        }
    }

    Ok(classify(&table, &columns))
}
