//! Backend seam for the intro scene.

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{info, instrument};

pub use ringside_backend::BackendError;
use ringside_backend::{BackendConfig, BackendSession};

/// Backend session collaborator for the intro scene.
///
/// The production implementation is [`RemoteBackend`]; tests substitute a
/// scripted double.
#[async_trait]
pub trait SessionBackend: Send {
    /// Establishes the session, suspending until the backend reports ready.
    ///
    /// On success, returns the connectivity subscription. The receiver's
    /// current value reflects connectivity at (or after) the moment of
    /// subscription, so reading it cannot miss a notification.
    async fn bring_up(&mut self) -> Result<watch::Receiver<bool>, BackendError>;

    /// Numeric identity assigned at sign-in; 0 before a successful bring-up.
    fn player_id(&self) -> u64;

    /// Orderly shutdown of the session. Safe to call when bring-up never
    /// succeeded, and safe to call more than once.
    async fn shut_down(&mut self);
}

/// Production backend over the Ringside service.
#[derive(Debug)]
pub struct RemoteBackend {
    config: BackendConfig,
    session: Option<BackendSession>,
}

impl RemoteBackend {
    /// Creates a backend that will connect with the given settings.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }
}

#[async_trait]
impl SessionBackend for RemoteBackend {
    #[instrument(skip(self))]
    async fn bring_up(&mut self) -> Result<watch::Receiver<bool>, BackendError> {
        let session = BackendSession::open(&self.config).await?;
        let watcher = session.watch_connectivity();
        info!(player_id = session.player_id(), "Backend session ready");
        self.session = Some(session);
        Ok(watcher)
    }

    fn player_id(&self) -> u64 {
        self.session
            .as_ref()
            .map(BackendSession::player_id)
            .unwrap_or(0)
    }

    #[instrument(skip(self))]
    async fn shut_down(&mut self) {
        if let Some(session) = self.session.take() {
            session.stop().await;
        }
    }
}
