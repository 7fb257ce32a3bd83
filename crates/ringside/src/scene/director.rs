//! Scene director — delayed, fire-and-forget scene transitions.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::scene::SceneId;

/// Requests scene transitions on behalf of a controller.
///
/// Transitions are asynchronous and report no outcome back to the caller.
pub trait SceneDirector {
    /// Schedules a transition to `scene` after `delay`.
    fn transition(&self, scene: SceneId, delay: Duration);
}

/// Production director: sleeps on the runtime, then reports the scene over a
/// channel the scene loop drains.
#[derive(Debug, Clone)]
pub struct DelayedDirector {
    tx: mpsc::UnboundedSender<SceneId>,
}

impl DelayedDirector {
    /// Creates a director and the receiver the scene loop drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SceneId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SceneDirector for DelayedDirector {
    #[instrument(skip(self))]
    fn transition(&self, scene: SceneId, delay: Duration) {
        info!(scene = %scene, delay_ms = delay.as_millis() as u64, "Scheduling scene transition");
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(scene = %scene, "Delay elapsed, requesting scene load");
            // The scene loop may already be gone during shutdown.
            let _ = tx.send(scene);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transition_arrives_after_delay() {
        let (director, mut rx) = DelayedDirector::new();
        director.transition(SceneId::Lobby, Duration::from_millis(10));
        let scene = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("Transition never arrived")
            .expect("Director channel closed");
        assert_eq!(scene, SceneId::Lobby);
    }
}
