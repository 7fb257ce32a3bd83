//! Connection settings for the backend service.

use derive_getters::Getters;
use derive_new::new;
use std::time::Duration;

/// Connection settings for a [`BackendSession`](crate::BackendSession).
#[derive(Debug, Clone, Getters, new)]
pub struct BackendConfig {
    /// Base URL of the backend service, e.g. `http://localhost:3000`.
    base_url: String,
    /// Interval between connectivity probes.
    ping_interval: Duration,
    /// Timeout applied to individual backend requests.
    connect_timeout: Duration,
}
