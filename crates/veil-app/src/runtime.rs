//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: application state machine
//! - [`Driver`]: platform-specific terminal and transport I/O
//!
//! Transport failures are recoverable: they are folded back into the
//! App as events and surfaced to the local user, never propagated as
//! transmitted messages. Only driver I/O errors (terminal breakage)
//! abort the loop.

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver.
    ///
    /// `seed` fixes the App's template-selection sequence.
    pub fn new(driver: D, seed: u64) -> Self {
        Self { driver, app: App::new(seed) }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Connects to the messaging network
    /// 2. Polls for input events from the driver
    /// 3. Delivers inbound messages into the App
    /// 4. Executes App actions against the driver
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        self.connect().await?;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let actions = self.driver.poll_event(&mut self.app).await?;
        if !actions.is_empty() && self.process_actions(actions).await? {
            return Ok(true);
        }

        if self.driver.is_connected()
            && let Some(inbound) = self.driver.recv_message().await
        {
            let actions = self.app.handle(AppEvent::MessageReceived {
                peer_id: inbound.peer_id,
                peer_name: inbound.peer_name,
                text: inbound.text,
            });
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit. Uses iterative processing to avoid
    /// async recursion between actions and events.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::OpenChat { query } => {
                        let event = match self.driver.resolve_peer(&query).await {
                            Ok(peer) => {
                                AppEvent::ChatOpened { peer_id: peer.id, peer_name: peer.name }
                            },
                            Err(e) => AppEvent::Error { message: e.to_string() },
                        };
                        pending_actions.extend(self.app.handle(event));
                    },
                    AppAction::SendMessage { peer_id, payload } => {
                        if let Err(e) = self.driver.send_text(peer_id, &payload).await {
                            let event = AppEvent::SendFailed { peer_id, reason: e.to_string() };
                            pending_actions.extend(self.app.handle(event));
                        }
                    },
                    AppAction::SendPhoto { peer_id, path } => {
                        if let Err(e) = self.driver.send_photo(peer_id, &path).await {
                            let event = AppEvent::SendFailed { peer_id, reason: e.to_string() };
                            pending_actions.extend(self.app.handle(event));
                        }
                    },
                    AppAction::MarkRead { peer_id } => {
                        if let Err(e) = self.driver.mark_read(peer_id).await {
                            // Read receipts are best-effort
                            tracing::warn!("failed to mark chat {peer_id} read: {e}");
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Connect to the messaging network and report the session.
    async fn connect(&mut self) -> Result<(), D::Error> {
        let actions = self.app.handle(AppEvent::Connecting);
        self.render_only(actions);

        let session_id = self.driver.connect().await?;

        let actions = self.app.handle(AppEvent::Connected { session_id });
        self.render_only(actions);
        Ok(())
    }

    /// Process actions that can only be renders (for sync contexts).
    fn render_only(&mut self, actions: Vec<AppAction>) {
        for action in actions {
            match action {
                AppAction::Render => {
                    if let Err(e) = self.driver.render(&self.app) {
                        tracing::warn!("failed to render: {e}");
                    }
                },
                other => {
                    tracing::warn!("unexpected action during connection: {other:?}");
                },
            }
        }
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
