//! Rollcall Library
//!
//! Student record management with accent-insensitive fuzzy search.

pub mod app;
pub mod checks;
pub mod config;
pub mod error;
pub mod form;
pub mod record;
pub mod render;
pub mod session;
pub mod shell;
pub mod store;
pub mod utils;
pub mod view;
