//! Intro scene controller — backend bring-up, connectivity-driven rendering,
//! and the single-shot handoff into the lobby.

use std::time::Duration;

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::host::HostControl;
use crate::intro::backend::SessionBackend;
use crate::intro::text::intro_status_text;
use crate::intro::view::{IntroAction, IntroView};
use crate::scene::{PlayerCount, SceneDirector, SceneHandoff, SceneId};

/// Outcome of backend bring-up, set once per scene activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkState {
    /// Bring-up has not completed yet.
    Pending,
    /// The backend session is ready.
    Ready,
    /// Bring-up failed; the message is shown to the player.
    Failed(String),
}

impl SdkState {
    /// Whether the backend session came up.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// The captured failure message, if any.
    pub fn error_message(&self) -> &str {
        match self {
            Self::Failed(message) => message,
            _ => "",
        }
    }
}

/// Controller for the intro scene.
///
/// Owns the backend session for the scene lifetime, keeps the view in sync
/// with connectivity, and performs at most one transition into the lobby.
/// Lifecycle: [`activate`](IntroController::activate) once when the scene
/// appears, [`deactivate`](IntroController::deactivate) once when it goes
/// away.
#[derive(Getters)]
pub struct IntroController<B, D, H> {
    backend: B,
    director: D,
    host: H,
    view: IntroView,
    handoff: SceneHandoff,
    lobby_delay: Duration,
    connected: bool,
    sdk: SdkState,
    started: bool,
    #[getter(skip)]
    connectivity: Option<watch::Receiver<bool>>,
    torn_down: bool,
}

impl<B, D, H> IntroController<B, D, H>
where
    B: SessionBackend,
    D: SceneDirector,
    H: HostControl,
{
    /// Creates a controller for one intro scene instance.
    #[instrument(skip_all)]
    pub fn new(
        backend: B,
        director: D,
        host: H,
        handoff: SceneHandoff,
        lobby_delay: Duration,
    ) -> Self {
        info!("Creating IntroController");
        Self {
            backend,
            director,
            host,
            view: IntroView::new(),
            handoff,
            lobby_delay,
            connected: false,
            sdk: SdkState::Pending,
            started: false,
            connectivity: None,
            torn_down: false,
        }
    }

    /// Brings up the backend session. Runs once when the scene becomes
    /// active.
    ///
    /// Failure is captured, never propagated: the scene stays usable for
    /// reading the error and quitting. If the scene was torn down while the
    /// bring-up was suspended, the result is discarded and any session that
    /// did come up is released.
    #[instrument(skip(self))]
    pub async fn activate(&mut self) {
        info!("Bringing up backend session");
        match self.backend.bring_up().await {
            Ok(watcher) => {
                if self.torn_down {
                    debug!("Scene torn down during bring-up, releasing session");
                    drop(watcher);
                    self.backend.shut_down().await;
                    return;
                }
                self.sdk = SdkState::Ready;
                // Read the seed value only after the subscription exists so
                // no notification can slip between the two.
                let connected = *watcher.borrow();
                self.connectivity = Some(watcher);
                self.on_connectivity_changed(connected);
            }
            Err(err) => {
                if self.torn_down {
                    debug!("Scene torn down during bring-up, dropping error");
                    return;
                }
                warn!(error = %err, "Backend bring-up failed");
                self.sdk = SdkState::Failed(err.message.clone());
                self.on_connectivity_changed(false);
            }
        }
    }

    /// Connectivity-change handler. Every UI update funnels through here, so
    /// displayed state always equals the last known controller state.
    #[instrument(skip(self))]
    pub fn on_connectivity_changed(&mut self, connected: bool) {
        debug!(connected, "Connectivity changed");
        self.connected = connected;
        self.render();
    }

    /// Returns a pending connectivity notification, if one arrived since the
    /// last call. `None` when nothing changed or no subscription exists.
    pub fn try_recv_connectivity(&mut self) -> Option<bool> {
        let watcher = self.connectivity.as_mut()?;
        match watcher.has_changed() {
            Ok(true) => Some(*watcher.borrow_and_update()),
            _ => None,
        }
    }

    /// Recomputes and applies the view state from current controller state.
    ///
    /// The start controls track connectivity until a bout has been started;
    /// after that they stay disabled, no matter what connectivity does, so a
    /// second transition can never be initiated from this scene instance.
    fn render(&mut self) {
        let player_id = if self.connected {
            self.backend.player_id()
        } else {
            0
        };
        let body = intro_status_text(
            self.connected,
            player_id,
            self.sdk.is_ready(),
            self.sdk.error_message(),
        );
        self.view.set_about_text(body);
        self.view.set_buttons_enabled(self.connected && !self.started);
    }

    /// Routes a key event through the view and applies the resulting action.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.view.handle_key(key) {
            IntroAction::StartGame(count) => self.start_game(count),
            IntroAction::Quit => self.quit(),
            IntroAction::None => {}
        }
    }

    /// Starts the handoff into the lobby with the requested player count.
    ///
    /// A no-op once the start controls are disabled, so only the first
    /// selection ever reaches the handoff slot or the director.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, count: PlayerCount) {
        if self.started || !self.view.buttons_enabled() {
            debug!(count = %count, "Start ignored, controls are disabled");
            return;
        }
        info!(count = %count, "Starting bout");
        self.started = true;
        self.handoff.set_target_player_count(count);
        self.view.set_buttons_enabled(false);
        self.director.transition(SceneId::Lobby, self.lobby_delay);
    }

    /// Asks the host to stop the game. Available regardless of connectivity.
    #[instrument(skip(self))]
    pub fn quit(&self) {
        info!("Quit requested");
        self.host.request_exit();
    }

    /// Tears the scene down: unsubscribes from connectivity changes, then
    /// stops the backend session. Safe to call more than once.
    #[instrument(skip(self))]
    pub async fn deactivate(&mut self) {
        if self.torn_down {
            debug!("Already torn down, ignoring");
            return;
        }
        info!("Tearing down intro scene");
        self.torn_down = true;
        // Unsubscribe before the stop request so no notification lands in a
        // controller that is mid-teardown.
        self.connectivity = None;
        self.backend.shut_down().await;
    }
}
