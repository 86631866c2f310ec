//! Tracing setup
//!
//! The terminal board owns the screen, so logs go either to a file or,
//! for the line-mode commands, to stderr.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::trace;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter for log files when `RUST_LOG` is not set
pub const FILE_FILTER: &str = "wordclub=debug";

/// Filter for stderr when `RUST_LOG` is not set; keeps game output readable
pub const STDERR_FILTER: &str = "wordclub=warn";

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init_tracing(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Off => return Ok(()),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(env_filter(FILE_FILTER))
                .try_init()?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(env_filter(STDERR_FILTER))
                .try_init()?;
        }
    }

    trace!("tracing initialised");
    Ok(())
}
