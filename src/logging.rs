use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{format_err, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines go. The calculator UI owns stdout, so it only logs to a file.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Disabled,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn for_mode(log_file: Option<&PathBuf>, interactive: bool) -> LogTarget {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Disabled,
            (None, false) => LogTarget::Stderr,
        }
    }
}

pub fn init(level: &str, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| format_err!("failed to initialize logging: {}", e))
}
