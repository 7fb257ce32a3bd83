//! Status line shown in the intro screen's about area.

/// Formats the intro status line from session state.
///
/// Pure: the same inputs always produce the same string. `player_id` is only
/// meaningful when `connected` is true; callers pass 0 otherwise.
pub fn intro_status_text(
    connected: bool,
    player_id: u64,
    sdk_ready: bool,
    error_message: &str,
) -> String {
    if !sdk_ready {
        if error_message.is_empty() {
            "Backend session is not ready yet. Waiting for sign-in to complete.".to_string()
        } else {
            format!(
                "Backend session failed: {error_message}. \
                 The Ringside service is unreachable; check your connection and restart."
            )
        }
    } else if connected {
        format!("Connected to Ringside. Signed in as player {player_id}. Choose a bout to begin.")
    } else {
        "Connection to Ringside lost. Waiting for the network to come back.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_variant_includes_player_id() {
        let text = intro_status_text(true, 42, true, "");
        assert!(text.contains("42"), "Missing player id in: {}", text);
        assert!(text.contains("Connected"), "Unexpected variant: {}", text);
    }

    #[test]
    fn test_failed_variant_includes_error_message() {
        let text = intro_status_text(false, 0, false, "network unreachable");
        assert!(
            text.contains("network unreachable"),
            "Missing error in: {}",
            text
        );
    }

    #[test]
    fn test_offline_variant_hides_identity() {
        let text = intro_status_text(false, 0, true, "");
        assert!(!text.contains('0'), "Identity leaked into: {}", text);
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let a = intro_status_text(true, 7, true, "");
        let b = intro_status_text(true, 7, true, "");
        assert_eq!(a, b);
    }
}
