//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific
//! I/O implementations. Each frontend implements the trait to provide
//! platform-specific terminal and transport I/O, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{App, AppAction, state::PeerId};

/// A peer resolved by the messaging network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    /// Stable peer identifier.
    pub id: PeerId,
    /// Display name.
    pub name: String,
}

/// An inbound message from the network's event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// Sending peer's ID.
    pub peer_id: PeerId,
    /// Sending peer's display name.
    pub peer_name: String,
    /// Message text.
    pub text: String,
}

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. The
/// transport side wraps whatever protocol client the frontend uses;
/// the core never sees wire details.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui rendering, and an
///   in-process simulated network service
/// - **Tests**: scripted drivers with recorded sends
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// Returns actions to process (may be empty when no events are
    /// ready).
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Establish a session with the messaging network.
    ///
    /// Returns the network-assigned session ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be established.
    fn connect(&mut self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Resolve a peer by username or phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query matches no known peer.
    fn resolve_peer(&mut self, query: &str) -> impl Future<Output = Result<Peer, Self::Error>> + Send;

    /// Send a text payload to a peer.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    fn send_text(
        &mut self,
        peer_id: PeerId,
        payload: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send a photo from a local file to a peer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or delivery fails.
    fn send_photo(
        &mut self,
        peer_id: PeerId,
        path: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Mark a peer's messages as read.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be delivered.
    fn mark_read(&mut self, peer_id: PeerId) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Receive the next inbound message, if one is ready.
    fn recv_message(&mut self) -> impl Future<Output = Option<Inbound>> + Send;

    /// Check if connected to the messaging network.
    fn is_connected(&self) -> bool;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
