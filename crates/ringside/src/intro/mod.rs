//! Intro scene — backend bring-up, status display, and bout selection.

mod backend;
mod controller;
mod text;
mod view;

pub use backend::{BackendError, RemoteBackend, SessionBackend};
pub use controller::{IntroController, SdkState};
pub use text::intro_status_text;
pub use view::{IntroAction, IntroView};
