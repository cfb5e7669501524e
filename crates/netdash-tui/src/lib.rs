//! # netdash-tui
//!
//! Interactive monitoring dashboard using ratatui with Elm architecture.

pub mod alerts;
pub mod charts;
pub mod devices;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;

pub use logs::ScrollState;
pub use messages::DashMessage;
pub use model::DashApp;
