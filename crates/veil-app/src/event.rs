//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (resize) and system ticks.
//! - Transport notifications translated by the runtime.

use crate::state::PeerId;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Connection in progress.
    Connecting,

    /// Connected to the messaging network.
    Connected {
        /// Network-assigned session ID.
        session_id: u64,
    },

    /// A peer was resolved and a chat with them opened.
    ChatOpened {
        /// Resolved peer ID.
        peer_id: PeerId,
        /// Peer's display name.
        peer_name: String,
    },

    /// Message received from a peer.
    MessageReceived {
        /// Sending peer's ID.
        peer_id: PeerId,
        /// Sending peer's display name.
        peer_name: String,
        /// Message text.
        text: String,
    },

    /// A transport send failed.
    SendFailed {
        /// Peer the payload was addressed to.
        peer_id: PeerId,
        /// Failure description.
        reason: String,
    },

    /// Error occurred.
    Error {
        /// Error description.
        message: String,
    },
}
