//! Application layer for Veil
//!
//! Pure state machine and generic runtime for the interactive chat
//! client, decoupled from terminal and transport specifics so the same
//! orchestration code runs in production and in tests.
//!
//! # Components
//!
//! - [`App`]: application state machine (chats, session modes, the
//!   outgoing transformation pipeline)
//! - [`Driver`]: trait for platform-specific terminal/transport I/O
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::{Driver, Inbound, Peer};
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{ChatState, ConnectionState, Entry, PeerId};
