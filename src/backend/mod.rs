pub mod api;
pub mod client;
pub mod poller;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

use api::{ApiError, AuthApi, EntityApi};
use futures::future::{FutureExt, LocalBoxFuture};
use poller::{RetryPolicy, UnreadPoller};
use session::SessionState;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppCmd {
    LoadSession,
    Logout,
    RefreshUnreadCount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SessionResolved(SessionState),
    UnreadCountFetched { user_id: String, count: u32 },
    LoggedOut,
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

type CountFetch = LocalBoxFuture<'static, (String, Result<u32, ApiError>)>;

/// Waits for the in-flight count query, if any, and clears the slot once it lands.
async fn next_count(in_flight: &mut Option<CountFetch>) -> (String, Result<u32, ApiError>) {
    match in_flight {
        Some(fetch) => {
            let done = fetch.await;
            *in_flight = None;
            done
        }
        None => std::future::pending().await,
    }
}

/// Runs until the command channel closes. Owns at most one unread-count poller,
/// which exists only while a user is signed in.
pub struct Backend<A, E> {
    auth: A,
    entities: Rc<E>,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    poll_interval: Duration,
    retry: RetryPolicy,
    poller: Option<UnreadPoller>,
    in_flight: Option<CountFetch>,
}

impl<A: AuthApi, E: EntityApi + 'static> Backend<A, E> {
    pub fn new(
        auth: A,
        entities: E,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            auth,
            entities: Rc::new(entities),
            cmd_rx,
            event_tx,
            poll_interval,
            retry: RetryPolicy::default(),
            poller: None,
            in_flight: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub async fn run(&mut self) {
        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.handle_command(cmd).await,
                        None => break,
                    }
                }
                user_id = poller::next_poll(&mut self.poller) => {
                    self.start_fetch(user_id);
                }
                (user_id, result) = next_count(&mut self.in_flight) => {
                    self.finish_fetch(user_id, result);
                }
            }
        }
        tracing::debug!("command channel closed, backend stopping");
    }

    async fn handle_command(&mut self, cmd: AppCmd) {
        match cmd {
            AppCmd::LoadSession => {
                let state = session::load_session(&self.auth).await;
                self.sync_poller(&state);
                self.emit(AppEvent::SessionResolved(state));
            }
            AppCmd::Logout => {
                self.stop_polling();
                if let Err(e) = self.auth.logout().await {
                    tracing::warn!("logout failed: {}", e);
                }
                self.emit(AppEvent::LoggedOut);
            }
            AppCmd::RefreshUnreadCount => {
                let user_id = self.poller.as_ref().map(|p| p.user_id().to_string());
                if let Some(user_id) = user_id {
                    self.start_fetch(user_id);
                }
            }
        }
    }

    /// Keeps the poller keyed to the signed-in user: kept for the same user,
    /// replaced on a user switch, dropped without a user.
    fn sync_poller(&mut self, state: &SessionState) {
        let current = self.poller.as_ref().map(|p| p.user_id());
        match state.user_id() {
            Some(user_id) if current == Some(user_id) => {}
            Some(user_id) => {
                tracing::info!(user_id, interval = ?self.poll_interval, "starting unread count polling");
                self.in_flight = None;
                self.poller = Some(UnreadPoller::new(user_id, self.poll_interval));
            }
            None => {
                if self.poller.is_some() {
                    tracing::info!("stopping unread count polling");
                }
                self.stop_polling();
            }
        }
    }

    fn stop_polling(&mut self) {
        self.poller = None;
        self.in_flight = None;
    }

    fn start_fetch(&mut self, user_id: String) {
        if self.in_flight.is_some() {
            tracing::debug!(user_id = %user_id, "unread count query still running, skipping");
            return;
        }

        let entities = Rc::clone(&self.entities);
        let retry = self.retry;
        self.in_flight = Some(
            async move {
                let result = poller::fetch_unread_count(&*entities, &user_id, &retry).await;
                (user_id, result)
            }
            .boxed_local(),
        );
    }

    fn finish_fetch(&self, user_id: String, result: Result<u32, ApiError>) {
        match result {
            Ok(count) => {
                tracing::debug!(user_id = %user_id, count, "unread count fetched");
                self.emit(AppEvent::UnreadCountFetched { user_id, count });
            }
            Err(e) => tracing::warn!(user_id = %user_id, "unread count unavailable: {}", e),
        }
    }

    fn emit(&self, event: AppEvent) {
        // The UI may already be gone.
        let _ = self.event_tx.send(event);
    }
}
