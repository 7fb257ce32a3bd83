//! Cross-scene handoff — the write-once slot read by the next scene.

use std::sync::{Arc, OnceLock};

use strum::Display;
use tracing::{debug, instrument, warn};

/// Number of human players in the requested bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlayerCount {
    /// Solo bout against the house fighter.
    #[strum(serialize = "1")]
    One,
    /// Head-to-head bout between two players.
    #[strum(serialize = "2")]
    Two,
}

impl PlayerCount {
    /// Numeric form, as the lobby expects it.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Write-once slot carrying the selected player count from the intro scene
/// into the lobby.
///
/// Clones share the same slot, so the intro controller and the lobby screen
/// each hold a handle rather than reaching into ambient global state. The
/// first write wins; later writes are ignored.
#[derive(Debug, Clone, Default)]
pub struct SceneHandoff {
    target_player_count: Arc<OnceLock<PlayerCount>>,
}

impl SceneHandoff {
    /// Creates an empty handoff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the selected player count. Returns `false` when the slot was
    /// already written, in which case the stored value is unchanged.
    #[instrument(skip(self))]
    pub fn set_target_player_count(&self, count: PlayerCount) -> bool {
        let fresh = self.target_player_count.set(count).is_ok();
        if fresh {
            debug!(count = %count, "Target player count recorded");
        } else {
            warn!(count = %count, "Target player count already set, ignoring");
        }
        fresh
    }

    /// The recorded player count, if the intro has written it.
    pub fn target_player_count(&self) -> Option<PlayerCount> {
        self.target_player_count.get().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reads_none() {
        let handoff = SceneHandoff::new();
        assert_eq!(handoff.target_player_count(), None);
    }

    #[test]
    fn test_first_write_wins() {
        let handoff = SceneHandoff::new();
        assert!(handoff.set_target_player_count(PlayerCount::Two));
        assert!(!handoff.set_target_player_count(PlayerCount::One));
        assert_eq!(handoff.target_player_count(), Some(PlayerCount::Two));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let intro_side = SceneHandoff::new();
        let lobby_side = intro_side.clone();
        intro_side.set_target_player_count(PlayerCount::One);
        assert_eq!(lobby_side.target_player_count(), Some(PlayerCount::One));
    }
}
