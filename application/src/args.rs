//! [`Args`] definitions.

use clap::{Parser, Subcommand};

/// Command line client of the Stadtwache shift management system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform after logging in.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action performed by the application.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Refreshes and prints the dashboard.
    Dashboard,

    /// Reports the current duty status.
    CheckIn {
        /// Status to report (`ok`, `help_needed` or `emergency`).
        #[arg(short, long, default_value = "ok")]
        status: String,
    },

    /// Submits a vacation request.
    Vacation {
        /// First day of the requested range, as `YYYY-MM-DD`.
        #[arg(long, default_value = "")]
        start_date: String,

        /// Last day of the requested range, as `YYYY-MM-DD`.
        #[arg(long, default_value = "")]
        end_date: String,

        /// Reason for the request.
        #[arg(long, default_value = "")]
        reason: String,
    },
}
