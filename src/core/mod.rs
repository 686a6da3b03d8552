// src/core/mod.rs

pub mod gviz;
pub mod net;
pub mod sanitize;

pub use gviz::{Cell, Row, Table};
