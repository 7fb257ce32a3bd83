//! Connectivity monitor — periodic reachability probes against the backend.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument, warn};

/// Probes `{base_url}/health` on a fixed interval and publishes reachability
/// transitions to `tx`. Runs until the owning session aborts it.
#[instrument(skip(client, tx), fields(base_url = %base_url))]
pub(crate) async fn monitor(
    client: reqwest::Client,
    base_url: String,
    tx: watch::Sender<bool>,
    period: Duration,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // Sign-in just proved the backend reachable, so consume the immediate
    // first tick and start probing one period from now.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let reachable = probe(&client, &base_url).await;
        let changed = tx.send_if_modified(|current| {
            if *current != reachable {
                *current = reachable;
                true
            } else {
                false
            }
        });
        if changed {
            if reachable {
                info!("Backend reachable again");
            } else {
                warn!("Lost connectivity to backend");
            }
        }
    }
}

/// Single reachability probe. Any transport error or non-success status
/// counts as unreachable.
async fn probe(client: &reqwest::Client, base_url: &str) -> bool {
    let url = format!("{}/health", base_url);
    match client.get(&url).send().await {
        Ok(response) => {
            let ok = response.status().is_success();
            debug!(status = %response.status(), ok, "Health probe completed");
            ok
        }
        Err(err) => {
            debug!(error = %err, "Health probe failed");
            false
        }
    }
}
