//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod properties_view;
/// Application State
///
/// Hält das bearbeitete Projekt, Optionen, Command-Log und History.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use properties_view::build as build_properties_view;
pub use state::AppState;
