//! Error types for plcc-gen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while generating a footprint.
#[derive(Error, Debug)]
pub enum FootprintError {
    /// No catalog entry has the requested pin count.
    #[error("Unsupported pin count {pins}\nSupported pin counts: {supported}")]
    UnsupportedPinCount {
        /// Requested pin count.
        pins: u32,
        /// Comma-separated list of the supported pin counts.
        supported: String,
    },

    /// Output file could not be created.
    #[error("Error opening output file {path}")]
    OutputOpen {
        /// Path of the output file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the document failed.
    #[error("Error writing footprint")]
    OutputWrite {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialisation failed.
    #[error("Error serialising footprint to JSON")]
    Json {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("invalid setting"));
    }

    #[test]
    fn unsupported_pin_count_display() {
        let error = FootprintError::UnsupportedPinCount {
            pins: 99,
            supported: "20, 28".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported pin count 99\nSupported pin counts: 20, 28"
        );
    }

    #[test]
    fn output_open_display() {
        let error = FootprintError::OutputOpen {
            path: PathBuf::from("/nonexistent/out.kicad_mod"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.to_string().contains("out.kicad_mod"));
    }
}
