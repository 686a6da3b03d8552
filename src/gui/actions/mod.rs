// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, fetch_*}.

mod copy;   // src/gui/actions/copy.rs
mod fetch;  // src/gui/actions/fetch.rs

pub use copy::copy;
pub use fetch::{fetch_issues, fetch_schedule};
