//! Helpers

pub mod config;
pub mod viewport;
