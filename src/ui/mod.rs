//! GUI module for the game
//!
//! A thin egui/eframe shell: it forwards clicks to [`crate::Game`] and draws
//! whatever state the game exposes.

mod app;
mod board_view;
mod settings;
mod theme;

pub use app::MnkApp;
