//! Core types and logic for the dockbar taskbar panel.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of dockbar is to do one thing and to do that one thing
// well: Be a taskbar.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use models::DockEntry;
pub use models::Manager;
pub use state::State;
