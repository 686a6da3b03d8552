// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Headers (if any) then rows.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, delim: Delim) -> io::Result<()> {
    if let Some(h) = &ds.headers {
        write_row(&mut w, h, delim.sep())?;
    }
    for r in &ds.rows {
        write_row(&mut w, r, delim.sep())?;
    }
    Ok(())
}

/// Stringify a dataset as-is (Copy to clipboard).
pub fn dataset_to_string(ds: &DataSet, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_dataset(&mut buf, ds, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
