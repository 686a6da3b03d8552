// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod collect;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod gui;
pub mod progress;
pub mod specs;
