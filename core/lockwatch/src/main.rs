//! lockwatch: reports whether the game client is running, from its lockfile.
//!
//! Status notifications are written to stdout as JSON lines, one per poll, so a
//! host process (a UI shell, a status bar) can consume them directly.
//!
//! ## Subcommands
//!
//! - `watch`: Poll every interval until stdin closes
//! - `check`: Read once and exit (0 = connected, 2 = waiting)
//! - `paths`: Show candidate lockfile paths and whether they exist

mod check;
mod logging;
mod paths;
mod watch;

use clap::{Parser, Subcommand};
use lockwatch_core::{load_config, LockwatchConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lockwatch")]
#[command(about = "Game client lockfile watcher")]
#[command(version)]
struct Cli {
    /// Config file (defaults to LOCKWATCH_CONFIG, then <config dir>/lockwatch/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll for the lockfile and print a status line per tick (stops on stdin EOF)
    Watch {
        /// Override the configured poll interval
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },

    /// Read the lockfile once and print its status
    Check {
        /// Read this file instead of searching the candidate paths
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// List candidate lockfile paths in check order
    Paths,
}

fn main() {
    let cli = Cli::parse();
    let _logging_guard = logging::init(cli.log_dir.as_deref());

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load config");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Watch { interval_ms } => {
            let config = match with_interval(config, interval_ms) {
                Ok(config) => config,
                Err(err) => {
                    tracing::error!(error = %err, "Invalid poll interval");
                    std::process::exit(1);
                }
            };
            watch::run(&config);
        }
        Commands::Check { path } => {
            std::process::exit(check::run(&config, path.as_deref()));
        }
        Commands::Paths => paths::run(&config),
    }
}

fn with_interval(
    mut config: LockwatchConfig,
    interval_ms: Option<u64>,
) -> lockwatch_core::Result<LockwatchConfig> {
    if let Some(interval_ms) = interval_ms {
        config.poll_interval_ms = interval_ms;
        config.validate()?;
    }
    Ok(config)
}
