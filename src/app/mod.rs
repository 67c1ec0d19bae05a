//! Terminal adapter: app state, crossterm event handling, and the actions the main loop performs.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
