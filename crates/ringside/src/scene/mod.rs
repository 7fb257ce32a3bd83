//! Scene plumbing — identifiers, transitions, the handoff slot, and the
//! scene director.

mod director;
mod handoff;
mod lobby;
mod screen;

pub use director::{DelayedDirector, SceneDirector};
pub use handoff::{PlayerCount, SceneHandoff};
pub use lobby::LobbyScreen;
pub use screen::{SceneId, ScreenTransition};
