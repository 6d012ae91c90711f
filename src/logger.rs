//! Logging setup for the dashboard backend.
//!
//! Records go through the `log` facade and are dispatched by `fern` to stderr,
//! to an optional log file, and to an in-memory ring of recent lines that the
//! `/api/logs` debug endpoint serves.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{LOG_BUFFER_CAPACITY, LOG_FILE_NAME};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    level: LevelFilter,
    file_path: Option<PathBuf>,
}

impl Logger {
    /// Create a logger with an empty buffer at `info` level and no log file
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY))),
            capacity: LOG_BUFFER_CAPACITY,
            level: LevelFilter::Info,
            file_path: None,
        }
    }

    /// Build a logger from the `[logging]` config section.
    ///
    /// File output is only configured when `enabled` is set.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", config.level))?;

        let file_path = if config.enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };

        Ok(Self {
            level,
            file_path,
            ..Self::new()
        })
    }

    /// Minimum level this logger dispatches
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Whether records are also written to a log file
    pub fn has_file_writer(&self) -> bool {
        self.file_path.is_some()
    }

    /// Path of the log file in the platform data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("dashboard").join(LOG_FILE_NAME))
    }

    /// Install this logger as the process-wide `log` backend.
    ///
    /// Only the first call installs a dispatcher; later calls are no-ops.
    pub fn install(&self) -> Result<()> {
        INSTALLED
            .get_or_try_init(|| -> Result<()> {
                let buffer = self.clone();
                let mut dispatch = fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {:<5} {}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .level(self.level)
                    .level_for("hyper", LevelFilter::Warn)
                    .level_for("hyper_util", LevelFilter::Warn)
                    .level_for("reqwest", LevelFilter::Warn)
                    .chain(std::io::stderr())
                    .chain(fern::Output::call(move |record| {
                        buffer.push(record.args().to_string());
                    }));

                if let Some(path) = &self.file_path {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
                    }
                    let file = fern::log_file(path)
                        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                    dispatch = dispatch.chain(file);
                }

                dispatch.apply().context("Failed to install logger")?;
                Ok(())
            })
            .map(|_| ())
    }

    /// Add a log entry directly to the in-memory buffer
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        self.push(format!("[{}] {}", timestamp, message));
    }

    fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get buffered logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all buffered logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
