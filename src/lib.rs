pub mod listing;
pub mod model;
pub mod remote;
pub mod store;
pub mod tui;

mod tui_shell;
