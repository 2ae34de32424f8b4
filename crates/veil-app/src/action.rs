//! Application actions
//!
//! Actions produced by the App state machine for the runtime to execute.

use crate::state::PeerId;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Resolve a peer and open a chat with them.
    OpenChat {
        /// Username or phone number to resolve.
        query: String,
    },

    /// Send a text payload to a peer.
    SendMessage {
        /// Destination peer.
        peer_id: PeerId,
        /// Transformed wire payload.
        payload: String,
    },

    /// Send a photo from a local file to a peer.
    SendPhoto {
        /// Destination peer.
        peer_id: PeerId,
        /// Path to the image file.
        path: String,
    },

    /// Mark a peer's messages as read.
    MarkRead {
        /// Peer whose messages were read.
        peer_id: PeerId,
    },
}
