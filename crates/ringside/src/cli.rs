//! Command-line interface for the Ringside client.

use clap::{Parser, Subcommand};

/// Ringside — terminal client for the Ringside duel game
#[derive(Parser, Debug)]
#[command(name = "ringside")]
#[command(about = "Terminal client for the Ringside duel game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal client
    Play {
        /// Path to the client configuration file
        #[arg(short, long, default_value = "ringside.toml")]
        config: std::path::PathBuf,

        /// Run under the interactive development host: quitting returns to
        /// the harness instead of terminating the process
        #[arg(long)]
        dev: bool,
    },

    /// Check backend connectivity and print the session status line
    Status {
        /// Path to the client configuration file
        #[arg(short, long, default_value = "ringside.toml")]
        config: std::path::PathBuf,
    },
}
