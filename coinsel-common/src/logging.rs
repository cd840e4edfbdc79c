//! Logging infrastructure for the coin selection library
//!
//! The library logs through the `log` facade. This module configures an
//! `env_logger` backend for binaries and tests that want output, and provides
//! helpers that shorten wallet identifiers before they reach a log line.
//!
//! Transaction ids, policy ids and addresses are not secret, but full values in
//! logs make wallets easy to cluster. Log lines carry truncated forms only.
//!
//! # Usage
//!
//! ```
//! use coinsel_common::logging::{self, LogConfig, LogLevel};
//!
//! let config = LogConfig {
//!     level: LogLevel::Warn,
//!     ..LogConfig::default()
//! };
//! logging::init(&config).expect("Failed to initialize logging");
//!
//! assert_eq!(logging::sanitize_hex(&[0xab; 32]), "abab...abab");
//! ```

use chrono::Local;
use env_logger::fmt::Formatter;
use env_logger::{Builder, Target};
use log::{debug, LevelFilter, Record};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::types::{AssetId, OutputRef, ResolvedInput};

/// Verbosity threshold for emitted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    /// Per-call selection parameters
    Debug,
    Trace,
}

/// Where log records go and how each line is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Append records to this file instead of stderr
    pub log_file: Option<String>,
    /// Prefix each line with local time (millisecond precision)
    pub include_timestamps: bool,
    /// Append `[file:line]` of the logging call site
    pub include_source_location: bool,
    /// Write to stderr when no `log_file` is set; otherwise records are dropped
    pub console_logging: bool,
    /// Render each record as a single JSON object
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_file: None,
            include_timestamps: true,
            include_source_location: false,
            console_logging: true,
            json_format: false,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

static INSTALL_OUTCOME: OnceCell<Result<(), String>> = OnceCell::new();

/// Install the `env_logger` backend described by `config`
///
/// Only the first call configures anything. Later calls ignore `config` and
/// return the first call's outcome, so a failed install keeps failing. A
/// logger installed elsewhere (a test harness, a host application) is
/// accepted and left in place.
///
/// # Errors
/// * A message naming the log file if it cannot be opened for appending
pub fn init(config: &LogConfig) -> Result<(), String> {
    INSTALL_OUTCOME.get_or_init(|| install(config)).clone()
}

/// Per-line rendering options captured by the formatter closure
#[derive(Debug, Clone, Copy)]
struct LineFormat {
    timestamps: bool,
    source_location: bool,
    json: bool,
}

impl LineFormat {
    fn from_config(config: &LogConfig) -> Self {
        Self {
            timestamps: config.include_timestamps,
            source_location: config.include_source_location,
            json: config.json_format,
        }
    }

    fn write(&self, buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
        let time = if self.timestamps {
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
        } else {
            String::new()
        };
        let location = match (self.source_location, record.file()) {
            (true, Some(file)) => format!("{}:{}", file, record.line().unwrap_or(0)),
            (true, None) => "unknown".to_string(),
            (false, _) => String::new(),
        };

        if self.json {
            let line = json!({
                "timestamp": time,
                "level": record.level().as_str(),
                "target": record.target(),
                "location": location,
                "message": record.args().to_string(),
            });
            return writeln!(buf, "{}", line);
        }

        if !time.is_empty() {
            write!(buf, "{} ", time)?;
        }
        let mut level_style = buf.style();
        level_style.set_bold(true);
        write!(buf, "[{}", level_style.value(record.level()))?;
        if !location.is_empty() {
            write!(buf, " {}", location)?;
        }
        writeln!(buf, "] {}", record.args())
    }
}

fn install(config: &LogConfig) -> Result<(), String> {
    let format = LineFormat::from_config(config);

    let mut builder = Builder::new();
    // The backend passes every record; `log::max_level` does the filtering
    builder
        .filter_level(LevelFilter::Trace)
        .format(move |buf, record| format.write(buf, record));

    match (&config.log_file, config.console_logging) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        (None, false) => {
            builder.target(Target::Pipe(Box::new(io::sink())));
        }
        (None, true) => {}
    }

    match builder.try_init() {
        Ok(()) => log::set_max_level(config.level.into()),
        Err(e) => debug!("Keeping the existing logger: {}", e),
    }
    Ok(())
}

/// Change the level filter of the installed logger, in either direction
///
/// A logger installed elsewhere applies its own filter as well, so with one in
/// place this can only narrow what it emits.
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into());
}

/// Shorten an identifier for logging
///
/// Strings of eight characters or fewer are masked entirely; longer ones keep
/// their first and last four characters.
pub fn sanitize_for_logging(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let len = input.chars().count();
    if len <= 8 {
        return "*****".to_string();
    }

    let first: String = input.chars().take(4).collect();
    let last: String = input.chars().skip(len - 4).collect();
    format!("{}...{}", first, last)
}

/// Hex-encode raw identifier bytes and shorten them for logging
pub fn sanitize_hex(bytes: &[u8]) -> String {
    sanitize_for_logging(&hex::encode(bytes))
}

/// Log-line rendering with identifiers shortened by [`sanitize_hex`]
pub trait SafeLog {
    fn safe_log_format(&self) -> String;
}

impl SafeLog for OutputRef {
    fn safe_log_format(&self) -> String {
        format!("{}#{}", sanitize_hex(&self.tx_id), self.index)
    }
}

impl SafeLog for AssetId {
    fn safe_log_format(&self) -> String {
        format!("{}.{}", sanitize_hex(&self.policy_id), hex::encode(&self.asset_name))
    }
}

impl SafeLog for ResolvedInput {
    fn safe_log_format(&self) -> String {
        format!("{} ({} lovelace)", self.output_ref.safe_log_format(), self.lovelace())
    }
}

impl<T: SafeLog> SafeLog for [T] {
    fn safe_log_format(&self) -> String {
        let parts: Vec<String> = self.iter().map(SafeLog::safe_log_format).collect();
        format!("[{}]", parts.join(", "))
    }
}
