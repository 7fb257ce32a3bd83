//! Ringside backend session client.
//!
//! Thin client for the Ringside backend service: anonymous sign-in yielding a
//! numeric player identity, a connectivity flag published over a
//! [`tokio::sync::watch`] channel, and orderly shutdown.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use ringside_backend::{BackendConfig, BackendSession};
//!
//! # async fn example() -> Result<(), ringside_backend::BackendError> {
//! let config = BackendConfig::new(
//!     "http://localhost:3000".to_string(),
//!     Duration::from_secs(5),
//!     Duration::from_secs(10),
//! );
//!
//! let session = BackendSession::open(&config).await?;
//! let connectivity = session.watch_connectivity();
//! println!("player {} online: {}", session.player_id(), *connectivity.borrow());
//! session.stop().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod connectivity;
mod error;
mod session;

pub use config::BackendConfig;
pub use error::BackendError;
pub use session::BackendSession;
