//! NetDash library — application logic for the monitoring dashboard.

pub mod app;
pub mod config;
pub mod errors;
