//! Ringside client library — scenes, controllers, and backend seams for the
//! terminal client.
//!
//! # Architecture
//!
//! - **Intro**: the scene controller that brings up the backend session,
//!   mirrors connectivity into the UI, and hands off to the lobby.
//! - **Scene**: screen plumbing — scene identifiers, transitions, the delayed
//!   scene director, and the cross-scene handoff slot.
//! - **Host**: how a quit request is honored (development harness vs.
//!   process exit), selected once at startup.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod host;
pub mod intro;
pub mod scene;
