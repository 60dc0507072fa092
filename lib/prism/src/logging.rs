use std::fmt;

pub use slog::{o, Discard, Drain, Logger};
pub use slog::{crit, debug, error, info, trace, warn};

use sloggers::{Config, LoggerConfig};

/// Configuration used when no explicit logger setup is provided.
const TERMINAL_CONFIG: &str = r#"
type = "terminal"
level = "debug"
destination = "stderr"
"#;

#[derive(Debug)]
pub enum LoggingError {
    Config(String),
    Build(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggingError::Config(msg) => write!(f, "bad logger config: {}", msg),
            LoggingError::Build(msg) => write!(f, "logger build failed: {}", msg),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Build a logger from a sloggers TOML configuration string.
pub fn from_toml_str(config: &str) -> Result<Logger, LoggingError> {
    let config: LoggerConfig =
        serdeconv::from_toml_str(config).map_err(|e| LoggingError::Config(e.to_string()))?;

    config
        .build_logger()
        .map_err(|e| LoggingError::Build(e.to_string()))
}

/// Terminal logger with the default configuration.
pub fn terminal() -> Logger {
    from_toml_str(TERMINAL_CONFIG).unwrap()
}

/// Logger that throws everything away. Used as the root when the caller
/// does not wire up logging.
pub fn discard() -> Logger {
    Logger::root(Discard, o!())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_config_parses() {
        let _ = terminal();
    }

    #[test]
    fn test_bad_config_is_error() {
        let result = from_toml_str("type = \"no_such_backend\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_discard_logs_nothing() {
        let log = discard();
        debug!(log, "into the void"; "context" => "test");
    }
}
