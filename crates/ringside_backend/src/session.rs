//! Backend session — anonymous sign-in and connectivity tracking.

use serde::Deserialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::{BackendConfig, BackendError, connectivity};

/// Payload returned by the anonymous sign-in endpoint.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    player_id: u64,
}

/// A live session with the Ringside backend service.
///
/// Owns the connectivity monitor task. [`BackendSession::stop`] winds the
/// monitor down in an orderly fashion; dropping the session without calling
/// it leaves the task to the runtime.
#[derive(Debug)]
pub struct BackendSession {
    player_id: u64,
    connectivity: watch::Receiver<bool>,
    monitor: Option<JoinHandle<()>>,
}

impl BackendSession {
    /// Opens a session: signs in anonymously and starts the connectivity
    /// monitor. Resolves once the session is ready for use.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub async fn open(config: &BackendConfig) -> Result<Self, BackendError> {
        info!("Opening backend session");

        let client = reqwest::Client::builder()
            .timeout(*config.connect_timeout())
            .build()?;

        let url = format!("{}/auth/anonymous", config.base_url());
        debug!(url = %url, "Requesting anonymous sign-in");
        let response = client.post(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Sign-in rejected by backend");
            return Err(BackendError::new(format!(
                "Sign-in failed with status {}",
                response.status()
            )));
        }

        let auth: AuthResponse = response.json().await?;
        info!(player_id = auth.player_id, "Signed in anonymously");

        // Sign-in just succeeded, so the backend is reachable right now.
        let (tx, rx) = watch::channel(true);
        let monitor = tokio::spawn(connectivity::monitor(
            client,
            config.base_url().clone(),
            tx,
            *config.ping_interval(),
        ));

        Ok(Self {
            player_id: auth.player_id,
            connectivity: rx,
            monitor: Some(monitor),
        })
    }

    /// The numeric identity assigned at sign-in.
    pub fn player_id(&self) -> u64 {
        self.player_id
    }

    /// Last known connectivity to the backend.
    pub fn has_connectivity(&self) -> bool {
        *self.connectivity.borrow()
    }

    /// Subscribes to connectivity-change notifications. The receiver's
    /// current value reflects connectivity at the moment of subscription.
    pub fn watch_connectivity(&self) -> watch::Receiver<bool> {
        self.connectivity.clone()
    }

    /// Stops the session, waiting for the monitor task to wind down.
    #[instrument(skip(self), fields(player_id = self.player_id))]
    pub async fn stop(mut self) {
        info!("Stopping backend session");
        if let Some(handle) = self.monitor.take() {
            handle.abort();
            let _ = handle.await;
        }
        debug!("Backend session stopped");
    }
}
