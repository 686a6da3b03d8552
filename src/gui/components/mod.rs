// src/gui/components/mod.rs
pub mod action_buttons;
pub mod date_bar;
pub mod employee_card;
pub mod error_banner;
pub mod issues_table;
pub mod tabs;
