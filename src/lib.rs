// Ledger Kit - Core Library
// Exposes the logger and account entities for the CLI and tests

pub mod entities;
pub mod logger;

// Re-export commonly used types
pub use entities::{AccountError, BankAccount, Movement, MovementKind, StatementError};
pub use logger::{Level, LogConfig, Logger, LOG_LEVEL_ENV};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
