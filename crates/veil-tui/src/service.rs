//! In-process simulated messaging service.
//!
//! Stands in for a real messaging network: a fixed roster of peers that
//! can be resolved by username or phone number, and that answer sent
//! messages with canned replies after a short delay. Commands flow
//! through mpsc channels, so the same client code runs unchanged when a
//! real transport replaces this.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use veil_app::{Inbound, Peer, PeerId};

/// Fixed roster: (peer id, username, phone number).
const ROSTER: &[(PeerId, &str, &str)] = &[
    (1, "alice", "+15550101"),
    (2, "bob", "+15550102"),
    (3, "charlie", "+15550103"),
];

/// Canned replies, cycled per delivered message.
const REPLIES: &[&str] = &["got it 👍", "interesting...", "tell me more", "ok"];

/// Delay before a peer answers.
const REPLY_DELAY: Duration = Duration::from_millis(600);

/// Commands accepted by the service task.
enum ServiceCommand {
    Resolve { query: String, reply: oneshot::Sender<Option<Peer>> },
    SendText { peer_id: PeerId, payload: String },
    SendPhoto { peer_id: PeerId },
    MarkRead { peer_id: PeerId },
}

/// Error returned when the service task has stopped.
#[derive(Debug, thiserror::Error)]
#[error("messaging service stopped")]
pub struct ServiceStopped;

/// Handle to a running in-process service.
pub struct ServiceHandle {
    /// Session id assigned to this client.
    pub session_id: u64,
    commands: mpsc::Sender<ServiceCommand>,
    /// Messages arriving from peers.
    pub inbound: mpsc::Receiver<Inbound>,
    abort_handle: tokio::task::AbortHandle,
}

impl ServiceHandle {
    /// Resolve a username or phone number against the roster.
    pub async fn resolve(&self, query: &str) -> Result<Option<Peer>, ServiceStopped> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(ServiceCommand::Resolve { query: query.to_string(), reply: tx })
            .await
            .map_err(|_| ServiceStopped)?;
        rx.await.map_err(|_| ServiceStopped)
    }

    /// Deliver a text payload to a peer.
    pub async fn send_text(&self, peer_id: PeerId, payload: &str) -> Result<(), ServiceStopped> {
        self.commands
            .send(ServiceCommand::SendText { peer_id, payload: payload.to_string() })
            .await
            .map_err(|_| ServiceStopped)
    }

    /// Deliver a photo to a peer.
    pub async fn send_photo(&self, peer_id: PeerId) -> Result<(), ServiceStopped> {
        self.commands
            .send(ServiceCommand::SendPhoto { peer_id })
            .await
            .map_err(|_| ServiceStopped)
    }

    /// Mark a peer's messages as read.
    pub async fn mark_read(&self, peer_id: PeerId) -> Result<(), ServiceStopped> {
        self.commands
            .send(ServiceCommand::MarkRead { peer_id })
            .await
            .map_err(|_| ServiceStopped)
    }

    /// Stop the service.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Spawn an in-process simulated service.
///
/// Returns a handle with command and inbound channels. The service runs
/// as a tokio task until dropped or stopped.
pub fn spawn_service() -> ServiceHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<ServiceCommand>(32);
    let (inbound_tx, inbound_rx) = mpsc::channel::<Inbound>(32);
    let session_id = rand::random::<u16>().into();

    let handle = tokio::spawn(async move {
        let mut reply_idx = 0usize;

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                ServiceCommand::Resolve { query, reply } => {
                    let _ = reply.send(lookup(&query));
                },
                ServiceCommand::SendText { peer_id, payload } => {
                    tracing::debug!(peer_id, len = payload.len(), "delivered text");
                    let text = REPLIES[reply_idx % REPLIES.len()].to_string();
                    reply_idx = reply_idx.wrapping_add(1);
                    answer(&inbound_tx, peer_id, text);
                },
                ServiceCommand::SendPhoto { peer_id } => {
                    answer(&inbound_tx, peer_id, "nice photo 📷".to_string());
                },
                ServiceCommand::MarkRead { peer_id } => {
                    tracing::debug!(peer_id, "marked read");
                },
            }
        }
    });

    ServiceHandle {
        session_id,
        commands: cmd_tx,
        inbound: inbound_rx,
        abort_handle: handle.abort_handle(),
    }
}

/// Case-insensitive username match, or exact phone match.
fn lookup(query: &str) -> Option<Peer> {
    ROSTER
        .iter()
        .find(|(_, name, phone)| name.eq_ignore_ascii_case(query) || *phone == query)
        .map(|&(id, name, _)| Peer { id, name: name.to_string() })
}

/// Schedule a delayed peer reply.
fn answer(inbound_tx: &mpsc::Sender<Inbound>, peer_id: PeerId, text: String) {
    let Some(&(_, name, _)) = ROSTER.iter().find(|(id, ..)| *id == peer_id) else {
        tracing::warn!(peer_id, "reply requested for unknown peer");
        return;
    };

    let tx = inbound_tx.clone();
    let peer_name = name.to_string();
    tokio::spawn(async move {
        tokio::time::sleep(REPLY_DELAY).await;
        let _ = tx.send(Inbound { peer_id, peer_name, text }).await;
    });
}
