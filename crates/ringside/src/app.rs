//! Scene loop — the terminal shell driving the intro and lobby scenes.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

use crate::config::GameConfig;
use crate::host::{DevHost, HostControl, ProcessHost, StopSignal};
use crate::intro::{IntroController, RemoteBackend, SessionBackend, intro_status_text};
use crate::scene::{
    DelayedDirector, LobbyScreen, SceneHandoff, SceneId, ScreenTransition,
};

/// Currently presented scene.
enum ActiveScene {
    /// Intro, with its view owned by the controller.
    Intro,
    /// Lobby landing screen.
    Lobby(LobbyScreen),
}

/// Runs the TUI client until the player quits.
///
/// `dev` selects the host control capability: the development harness keeps
/// the process alive on quit, the production host terminates it.
#[instrument(skip(config))]
pub async fn run(config: GameConfig, dev: bool) -> Result<()> {
    info!(dev, "Starting Ringside client");

    let (director, scene_rx) = DelayedDirector::new();
    let (dev_host, stop_rx) = DevHost::new();
    let host: Box<dyn HostControl> = if dev {
        Box::new(dev_host)
    } else {
        Box::new(ProcessHost)
    };

    let handoff = SceneHandoff::new();
    let mut controller = IntroController::new(
        RemoteBackend::new(config.backend()),
        director,
        host,
        handoff.clone(),
        config.lobby_delay(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = run_scenes(&mut terminal, &mut controller, scene_rx, stop_rx, handoff).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Drives the scene state machine over the terminal.
async fn run_scenes<B>(
    terminal: &mut Terminal<B>,
    controller: &mut IntroController<RemoteBackend, DelayedDirector, Box<dyn HostControl>>,
    mut scene_rx: mpsc::UnboundedReceiver<SceneId>,
    mut stop_rx: mpsc::UnboundedReceiver<StopSignal>,
    handoff: SceneHandoff,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    controller.activate().await;

    let mut scene = ActiveScene::Intro;
    loop {
        terminal.draw(|frame| match &scene {
            ActiveScene::Intro => controller.view().render(frame),
            ActiveScene::Lobby(lobby) => lobby.render(frame),
        })?;

        // Apply any pending connectivity notification before input, so the
        // frame the player interacts with reflects the latest state.
        if let Some(connected) = controller.try_recv_connectivity() {
            controller.on_connectivity_changed(connected);
        }

        if stop_rx.try_recv().is_ok() {
            info!("Development harness stop signal received");
            break;
        }

        if let Ok(next) = scene_rx.try_recv() {
            match (&scene, next) {
                (ActiveScene::Intro, SceneId::Lobby) => {
                    info!("Loading lobby scene");
                    controller.deactivate().await;
                    scene = ActiveScene::Lobby(LobbyScreen::new(handoff.clone()));
                }
                (_, requested) => {
                    warn!(scene = %requested, "Ignoring unexpected scene request");
                }
            }
        }

        // Poll for input with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match &mut scene {
                ActiveScene::Intro => controller.handle_key(key),
                ActiveScene::Lobby(lobby) => {
                    if lobby.handle_key(key) == ScreenTransition::Quit {
                        info!("Client quitting from lobby");
                        break;
                    }
                }
            }
        }

        sleep(Duration::from_millis(10)).await;
    }

    controller.deactivate().await;
    Ok(())
}

/// One-shot backend check: brings a session up, prints the same status line
/// the intro screen shows, and shuts down.
#[instrument(skip(config))]
pub async fn status(config: GameConfig) -> Result<()> {
    let mut backend = RemoteBackend::new(config.backend());
    match backend.bring_up().await {
        Ok(watcher) => {
            let connected = *watcher.borrow();
            println!(
                "{}",
                intro_status_text(connected, backend.player_id(), true, "")
            );
            backend.shut_down().await;
        }
        Err(err) => {
            warn!(error = %err, "Backend bring-up failed");
            println!("{}", intro_status_text(false, 0, false, &err.message));
        }
    }
    Ok(())
}
