//! File logger for the terminal runner.
//!
//! The alternate screen owns stdout and raw mode mangles stderr, so log
//! records go to the file named by `TETRIS_SIM_LOG_FILE`. `TETRIS_SIM_LOG`
//! sets the level (`error`..`trace`, default `info`). Without a file, logging
//! stays off.

use std::fs::File;
use std::io::Write;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                millis,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger if `TETRIS_SIM_LOG_FILE` is set.
pub fn init() -> Result<()> {
    let Some(path) = std::env::var_os("TETRIS_SIM_LOG_FILE") else {
        return Ok(());
    };
    let level = match std::env::var("TETRIS_SIM_LOG") {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("invalid TETRIS_SIM_LOG level {:?}", value))?,
        _ => LevelFilter::Info,
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;

    let logger = FileLogger {
        level,
        file: Mutex::new(file),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| anyhow!("logger already set: {}", e))?;
    log::set_max_level(level);
    Ok(())
}
