//! Discord bot integration.
//!
//! `start` owns the serenity client and event handler; incoming messages
//! are parsed by `command`, executed by the functions in `controller`, and
//! replies are produced by the helpers in `format`.

pub mod command;
pub mod controller;
pub mod format;
pub mod start;
