//! Terminal UI for Veil
//!
//! Interactive chat client frontend: crossterm keyboard input, ratatui
//! rendering, and an in-process simulated messaging service. All state
//! and pipeline logic lives in `veil-app`/`veil-core`; this crate only
//! does I/O.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod input;
pub mod service;
pub mod terminal;
pub mod ui;

pub use input::InputState;
pub use terminal::{TerminalDriver, TerminalError};
pub use veil_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
