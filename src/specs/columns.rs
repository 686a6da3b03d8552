// src/specs/columns.rs
//
// Header resolver: label text → column index, built from row 0.
//
// Matching is by substring, so "Mahesh Slot" resolves "Mahesh". When a label
// appears in more than one header cell the last cell wins. Labels that are
// substrings of each other (or of unrelated header text) can collide; that
// ambiguity is accepted as-is, not detected.

use std::collections::HashMap;

use crate::core::{Cell, Row};

/// How many labels one header cell may claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelMatch {
    /// Only the first label (roster order) contained in the cell.
    First,
    /// Every label contained in the cell.
    Every,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    map: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.map.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.map.contains_key(label)
    }

    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Cell under `label` in `row`; None if the label or the cell is absent.
    pub fn cell<'r>(&self, row: &'r Row, label: &str) -> Option<&'r Cell> {
        self.get(label).and_then(|ix| row.cell(ix))
    }

    /// Display text under `label`; a missing column reads as "".
    pub fn text<'r>(&self, row: &'r Row, label: &str) -> &'r str {
        self.cell(row, label).map(Cell::display_str).unwrap_or("")
    }

    fn insert(&mut self, label: &str, ix: usize) {
        self.map.insert(s!(label), ix);
    }
}

pub fn resolve_columns<S: AsRef<str>>(header: &Row, labels: &[S], mode: LabelMatch) -> ColumnIndex {
    let mut out = ColumnIndex::default();

    for (ix, cell) in header.cells.iter().enumerate() {
        let text = cell.display_str();
        if text.is_empty() { continue; }

        let mut hits = labels.iter()
            .map(AsRef::as_ref)
            .filter(|l| !l.is_empty() && text.contains(*l));

        match mode {
            LabelMatch::First => {
                if let Some(label) = hits.next() { out.insert(label, ix); }
            }
            LabelMatch::Every => {
                for label in hits { out.insert(label, ix); }
            }
        }
    }

    out
}
