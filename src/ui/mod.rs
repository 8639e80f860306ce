//! Terminal front-end: one screen per page, driven by key and tick events.

pub mod app;
pub mod events;
pub mod footer;
pub mod garage;
pub mod hanoi;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sorting;
pub mod terminal_guard;
pub mod theme;
pub mod tictactoe;
pub mod toast;
pub mod widgets;

pub use app::{App, Page};
pub use runtime::run;
