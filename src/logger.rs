// 📣 Logger - Leveled console output with one shared instance per process
//
// Output format: "[LEVEL] message\n"
//
// The shared instance prints to stdout and is created on first use.
// Explicit loggers can be built around any writer (tests inject a buffer).

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

/// Environment variable holding the shared logger's minimum level
pub const LOG_LEVEL_ENV: &str = "LEDGER_LOG_LEVEL";

static INSTANCE: OnceLock<Logger> = OnceLock::new();

// ============================================================================
// LEVEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Lines below this level are dropped
    pub min_level: Level,
}

impl LogConfig {
    pub fn new(min_level: Level) -> Self {
        LogConfig { min_level }
    }

    /// Read `LEDGER_LOG_LEVEL`; unset means the default (`Info`)
    pub fn from_env() -> Result<Self, String> {
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(raw) => Ok(LogConfig::new(raw.parse()?)),
            Err(_) => Ok(LogConfig::default()),
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::new(Level::Info)
    }
}

// ============================================================================
// LOGGER
// ============================================================================

pub struct Logger {
    config: LogConfig,
    /// Why the configured level was rejected, if it was
    config_error: Option<String>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Build a logger writing to `writer`
    pub fn new<W: Write + Send + 'static>(config: LogConfig, writer: W) -> Self {
        Logger {
            config,
            config_error: None,
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// Build a logger from a parsed config, falling back to the default on error
    ///
    /// The parse error is kept and available through `config_error`.
    pub fn from_config_result<W: Write + Send + 'static>(
        config: Result<LogConfig, String>,
        writer: W,
    ) -> Self {
        match config {
            Ok(config) => Logger::new(config, writer),
            Err(e) => Logger {
                config_error: Some(e),
                ..Logger::new(LogConfig::default(), writer)
            },
        }
    }

    /// Process-wide logger, created on first call
    ///
    /// Every call returns the same instance. The minimum level comes from
    /// `LEDGER_LOG_LEVEL` at first use; an unparsable value falls back to `Info`
    /// and is reported by `config_error`.
    pub fn instance() -> &'static Logger {
        INSTANCE.get_or_init(|| Logger::from_config_result(LogConfig::from_env(), io::stdout()))
    }

    pub fn config(&self) -> LogConfig {
        self.config
    }

    pub fn config_error(&self) -> Option<&str> {
        self.config_error.as_deref()
    }

    pub fn log(&self, level: Level, msg: &str) {
        if !self.config.enabled(level) {
            return;
        }

        // A poisoned lock only means another thread panicked mid-write
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        // Nowhere left to report a broken console
        let _ = writeln!(sink, "[{}] {}", level, msg).and_then(|_| sink.flush());
    }

    pub fn log_info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn log_warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    pub fn log_error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("config_error", &self.config_error)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
