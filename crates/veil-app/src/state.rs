//! Application state types
//!
//! State structures used by the App state machine.

use veil_core::LocalEcho;

/// Stable peer identifier assigned by the messaging network.
pub type PeerId = u64;

/// Connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected to the messaging network.
    Disconnected,

    /// Connection in progress.
    Connecting,

    /// Connected with a network session ID.
    Connected {
        /// Network-assigned session ID.
        session_id: u64,
    },
}

/// One line of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Message received from the peer.
    Incoming(String),

    /// Local echo of a sent message, as produced by the pipeline.
    Outgoing(LocalEcho),

    /// Local notice (command feedback, delivery failures).
    Notice(String),
}

/// Per-chat state.
#[derive(Debug, Clone)]
pub struct ChatState {
    /// Peer this chat is with.
    pub peer_id: PeerId,
    /// Peer's display name.
    pub peer_name: String,
    /// Transcript entries, ordered by occurrence.
    pub entries: Vec<Entry>,
    /// Unread messages indicator.
    pub unread: bool,
}

impl ChatState {
    /// Create a new empty chat state.
    pub fn new(peer_id: PeerId, peer_name: String) -> Self {
        Self { peer_id, peer_name, entries: Vec::new(), unread: false }
    }

    /// Append an incoming message.
    pub fn push_incoming(&mut self, text: String) {
        self.entries.push(Entry::Incoming(text));
    }

    /// Append the local echo of a sent message.
    pub fn push_outgoing(&mut self, echo: LocalEcho) {
        self.entries.push(Entry::Outgoing(echo));
    }

    /// Append a local notice.
    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Notice(text.into()));
    }
}
