// src/specs/mod.rs
//! # Sheet “specs” module
//!
//! Each spec knows how to read one sheet: which header labels to look for,
//! which rows to skip, and how a row turns into a record.
//!
//! ## What lives here
//! - **Header resolution** (`columns`): find columns by label text, since the
//!   sheets have no fixed schema and columns get moved around.
//! - **Row classification** (`schedule`, `issues`): pure functions over a
//!   parsed [`Table`](crate::core::Table) plus a resolved column map.
//! - One `read` per sheet: response body in, records out. No network, so it
//!   runs against captured or synthetic bodies.
//!
//! ## What does **not** live here
//! - The HTTP call (`core::net`, driven by `collect`).
//! - Wire framing and JSON shape (`core::gviz`).
//! - Progress reporting, GUI state, request sequencing, output formatting.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → collect::collect_* → core::net::http_get
//!                                ↘ specs::<sheet>::read → core::gviz → columns → classify
//! ```
//!
//! ## Conventions
//! - Missing columns and missing cells read as "", never as errors.
//! - Marker literals come from `config::consts` through the named predicates
//!   in `core::sanitize`.
pub mod columns;
pub mod issues;
pub mod schedule;
