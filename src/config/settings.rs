//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;
use uuid::Uuid;

use crate::error::ConfigError;
use crate::plcc::{MountingOptions, Vendor};

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Catalog the plugs are taken from.
    #[serde(default)]
    pub vendor: Vendor,

    /// Pad mounting defaults.
    #[serde(default)]
    pub pads: PadConfig,

    /// Placeholder timestamp written into every record.
    #[serde(default)]
    pub tstamp: Uuid,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Mounting options before command-line overrides are applied.
    #[must_use]
    pub const fn mounting_options(&self) -> MountingOptions {
        MountingOptions {
            double_sided: self.pads.double_sided,
            via_outside: self.pads.via_outside,
            tstamp: self.tstamp,
        }
    }
}

/// Pad mounting defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadConfig {
    /// Through-hole pads with vias instead of SMD pads.
    /// Default: true
    #[serde(default = "default_true")]
    pub double_sided: bool,

    /// Bias drill holes towards the package exterior.
    /// Default: true
    #[serde(default = "default_true")]
    pub via_outside: bool,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            double_sided: default_true(),
            via_outside: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Format of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// KiCad `.kicad_mod` footprint.
    #[default]
    Kicad,
    /// JSON dump of the geometry.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
