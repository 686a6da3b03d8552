// src/core/gviz.rs
//! Reader for the spreadsheet query endpoint's JSON output.
//!
//! The endpoint does not return plain JSON. The document is wrapped in a
//! JavaScript callback:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({ ... });
//! ```
//!
//! [`unwrap`] is the only place that knows about that framing. It checks
//! the markers configured in [`Framing`] before slicing, so a change in the
//! preamble shows up as a parse error instead of garbage JSON.
//!
//! [`parse_document`] turns the JSON into a [`Table`]: rows of positional
//! cells, each with an optional display value (`v`) and an optional
//! formatted value (`f`). Nothing about the columns is assumed here.

use serde::Deserialize;

use crate::config::options::Framing;
use crate::error::{FetchError, Result};

/* ---------- table model ---------- */

/// One spreadsheet cell. Both fields absent means an empty cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub display: Option<String>,
    pub formatted: Option<String>,
}

impl Cell {
    pub fn text(s: &str) -> Self {
        Self { display: Some(s!(s)), formatted: None }
    }

    /// Display text, or "" when the cell is empty.
    pub fn display_str(&self) -> &str {
        self.display.as_deref().unwrap_or("")
    }

    /// Formatted text if non-empty, else display text, else "".
    pub fn formatted_or_display(&self) -> &str {
        match self.formatted.as_deref() {
            Some(f) if !f.is_empty() => f,
            _ => self.display_str(),
        }
    }
}

/// Positional row; the column index is the only identity a cell has.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Build a row of display-only cells. Handy for fixtures.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Self { cells: texts.iter().map(|t| Cell::text(t.as_ref())).collect() }
    }

    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Display text at `idx`; out-of-range and empty cells read as "".
    pub fn text(&self, idx: usize) -> &str {
        self.cell(idx).map(Cell::display_str).unwrap_or("")
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

/// Row 0 is the header row; everything after it is data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn body(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().skip(1)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
}

/* ---------- wire format ---------- */

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<WireError>,
    #[serde(default)]
    table: Option<WireTable>,
}

#[derive(Deserialize)]
struct WireError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detailed_message: Option<String>,
}

#[derive(Deserialize)]
struct WireTable {
    #[serde(default)]
    rows: Option<Vec<WireRow>>,
}

#[derive(Deserialize)]
struct WireRow {
    #[serde(default)]
    c: Option<Vec<Option<WireCell>>>,
}

#[derive(Deserialize)]
struct WireCell {
    #[serde(default)]
    v: Option<WireValue>,
    #[serde(default)]
    f: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl WireValue {
    fn into_text(self) -> String {
        match self {
            WireValue::Text(s) => s,
            WireValue::Number(n) => number_text(n),
            WireValue::Bool(b) => b.to_string(),
        }
    }
}

/// Whole numbers print without a fractional part ("42", not "42.0").
fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<WireCell> for Cell {
    fn from(w: WireCell) -> Self {
        Self { display: w.v.map(WireValue::into_text), formatted: w.f }
    }
}

impl From<WireRow> for Row {
    fn from(w: WireRow) -> Self {
        let cells = w.c
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.map(Cell::from).unwrap_or_default())
            .collect();
        Self { cells }
    }
}

/* ---------- entry points ---------- */

/// Strip the callback wrapper and return the JSON in between.
pub fn unwrap<'a>(text: &'a str, framing: &Framing) -> Result<&'a str> {
    let min = framing.prefix_len + framing.suffix_len;
    if text.len() < min {
        return Err(FetchError::Parse(format!(
            "response is {} bytes, wrapper alone needs {}", text.len(), min
        )));
    }

    let split_at = text.len() - framing.suffix_len;
    let (prefix, rest) = (text.get(..framing.prefix_len), text.get(framing.prefix_len..split_at));
    let suffix = text.get(split_at..);

    let (Some(prefix), Some(body), Some(suffix)) = (prefix, rest, suffix) else {
        return Err(FetchError::Parse(s!("wrapper boundary splits a character")));
    };

    if !prefix.ends_with(framing.prefix_marker.as_str()) {
        return Err(FetchError::Parse(format!(
            "preamble does not end with {:?}", framing.prefix_marker
        )));
    }
    if !framing.suffix_marker.is_empty() && suffix != framing.suffix_marker {
        return Err(FetchError::Parse(format!(
            "response does not end with {:?}", framing.suffix_marker
        )));
    }

    Ok(body)
}

/// Parse an unwrapped document into a table.
pub fn parse_document(json: &str) -> Result<Table> {
    let doc: Document = serde_json::from_str(json)?;

    if doc.status.as_deref() == Some("error") {
        let reason = doc.errors
            .into_iter()
            .next()
            .and_then(|e| e.detailed_message.or(e.message))
            .unwrap_or_else(|| s!("upstream reported an error"));
        return Err(FetchError::NotFound(reason));
    }

    let rows = doc.table
        .and_then(|t| t.rows)
        .ok_or_else(|| FetchError::Parse(s!("document has no table.rows")))?;

    Ok(Table { rows: rows.into_iter().map(Row::from).collect() })
}

/// [`unwrap`] then [`parse_document`].
pub fn read_table(text: &str, framing: &Framing) -> Result<Table> {
    let json = unwrap(text, framing)?;
    let table = parse_document(json)?;
    logd!("Gviz: parsed {} row(s)", table.row_count());
    Ok(table)
}
