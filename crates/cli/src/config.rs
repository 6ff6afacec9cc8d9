//! Command-line configuration.

use clap::Parser;

use faststock_observability::{LogFormat, TracingConfig};

use crate::session::SessionOptions;

/// FastStock - track products in memory for the length of one run
#[derive(Debug, Clone, Parser)]
#[command(name = "faststock")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log output format: json, pretty or compact
    #[arg(long, env = "FASTSTOCK_LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    /// Default log filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "FASTSTOCK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Do not clear the screen or wait for Enter between actions
    #[arg(long, env = "FASTSTOCK_NO_CLEAR")]
    pub no_clear: bool,

    /// Disable colored output
    #[arg(long, env = "FASTSTOCK_NO_COLOR")]
    pub no_color: bool,

    /// Print list and search results as JSON
    #[arg(long, env = "FASTSTOCK_JSON")]
    pub json: bool,
}

impl Config {
    pub fn tracing(&self) -> TracingConfig {
        TracingConfig {
            format: self.log_format,
            default_directive: self.log_level.clone(),
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            interactive: !self.no_clear,
            json: self.json,
            echo: false,
            today: None,
        }
    }
}
