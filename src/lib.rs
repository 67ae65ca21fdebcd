//! Clima - city weather lookup on a single tui-dispatch screen
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod theme;
