//! Scene identifiers and screen transitions.

use strum::Display;

/// Scenes the client can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SceneId {
    /// Title screen with backend status and bout selection.
    Intro,
    /// Pre-game lobby.
    Lobby,
}

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Exit the client cleanly.
    Quit,
}
