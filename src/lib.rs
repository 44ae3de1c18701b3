//! Exam Schedule TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod cache;
pub mod config;
pub mod gateway;
pub mod logic;
pub mod model;
pub mod utils;
