//! Host control — how a quit request is honored.
//!
//! The capability is chosen once at startup, never at the quit call site:
//! under the interactive development harness a quit returns control to the
//! harness, while a production build terminates the process the way closing
//! the window would.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

/// Signal sent by [`DevHost`] when the player asks to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopSignal;

/// Capability for stopping the game.
pub trait HostControl {
    /// Asks the host to stop running the game.
    fn request_exit(&self);
}

impl<T: HostControl + ?Sized> HostControl for Box<T> {
    fn request_exit(&self) {
        (**self).request_exit();
    }
}

/// Interactive development host: asks the harness to stop the current run,
/// keeping the process alive.
#[derive(Debug, Clone)]
pub struct DevHost {
    tx: mpsc::UnboundedSender<StopSignal>,
}

impl DevHost {
    /// Creates the host and the receiver the harness listens on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StopSignal>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl HostControl for DevHost {
    #[instrument(skip(self))]
    fn request_exit(&self) {
        info!("Stop requested, signalling the development harness");
        if self.tx.send(StopSignal).is_err() {
            warn!("Development harness is gone, stop signal dropped");
        }
    }
}

/// Production host: terminates the process, restoring the terminal as well
/// as it can first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessHost;

impl HostControl for ProcessHost {
    #[instrument(skip(self))]
    fn request_exit(&self) {
        info!("Stop requested, terminating process");
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    }
}
