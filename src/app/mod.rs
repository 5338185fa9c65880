//! Application shell: state, event handling, and the actions the handler requests.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
