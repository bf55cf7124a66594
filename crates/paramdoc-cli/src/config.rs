//! Command configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `PARAMDOC_`, and command line flags override those in turn.

use std::env;
use std::str::FromStr;

use paramdoc::SampleVariant;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that stderr stays quiet unless an annotation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging.
    Trace,
    /// Debug-level information, including rejected annotations.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic input.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the `paramdoc` command.
///
/// # Environment Variables
///
/// - `PARAMDOC_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `PARAMDOC_VARIANT`: sample variant (param, header)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level for stderr output.
    pub log_level: LogLevel,
    /// Variant used to pick the default group and output path.
    pub variant: SampleVariant,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_level = match lookup("PARAMDOC_LOG_LEVEL") {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let variant = match lookup("PARAMDOC_VARIANT") {
            Some(val) => val
                .parse()
                .map_err(|err| CliError::InvalidConfig(format!("{err}")))?,
            None => SampleVariant::default(),
        };

        Ok(Self { log_level, variant })
    }

    /// Apply optional command line overrides.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        variant: Option<SampleVariant>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(variant) = variant {
            self.variant = variant;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
