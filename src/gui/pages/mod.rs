// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    data::DataSet,
    gui::app::App,
};

pub mod issues;
pub mod schedule;

/// One dashboard tab. Pages are stateless statics; everything they show
/// lives on `App`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App, _ctx: &egui::Context) {}

    /// Draw the page body below the tabs and error banner.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Start a fetch for this page, if it has enough input to do so.
    fn refresh(&self, app: &mut App, ctx: &egui::Context);

    /// Flat projection of what is on screen, for Copy. None if nothing loaded.
    fn dataset(&self, app: &App) -> Option<DataSet>;
}
