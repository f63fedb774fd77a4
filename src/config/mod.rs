pub mod toml_config;

use crate::core::session::DEFAULT_AUTO_ADVANCE;
use std::time::Duration;

#[cfg(feature = "cli")]
use crate::core::session::SessionSettings;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "felines")]
#[command(about = "Fascinating Felines: rotating cat facts and likeable breeds in the terminal")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a TOML catalog file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Seconds between automatic fact changes (0 disables)")]
    pub auto_advance_secs: Option<u64>,

    #[arg(long, conflicts_with = "auto_advance_secs", help = "Only change facts on request")]
    pub no_auto_advance: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn session_settings(&self, file_seconds: Option<u64>) -> SessionSettings {
        SessionSettings {
            auto_advance: resolve_auto_advance(
                self.no_auto_advance,
                self.auto_advance_secs,
                file_seconds,
            ),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(seconds) = self.auto_advance_secs {
            validate_range(
                "auto_advance_secs",
                seconds,
                0,
                toml_config::MAX_AUTO_ADVANCE_SECONDS,
            )?;
        }
        Ok(())
    }
}

/// Flag beats command-line value beats catalog file beats the default. Zero means off.
pub fn resolve_auto_advance(
    disabled: bool,
    cli_seconds: Option<u64>,
    file_seconds: Option<u64>,
) -> Option<Duration> {
    if disabled {
        return None;
    }
    match cli_seconds.or(file_seconds) {
        Some(0) => None,
        Some(seconds) => Some(Duration::from_secs(seconds)),
        None => Some(DEFAULT_AUTO_ADVANCE),
    }
}
