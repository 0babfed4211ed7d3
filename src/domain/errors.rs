//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Every error is fatal for the current document: the engine never
//! produces partial output.

use thiserror::Error;

/// Main plainsight error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum PlainsightError {
    /// Configuration-related errors (unknown tag type without a fallback
    /// template, invalid probability, malformed config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern-construction failures (invalid regex, conflicting pattern
    /// registrations detected at startup)
    #[error("Scan error: {0}")]
    Scan(String),

    /// A generator's invariants cannot be satisfied (e.g. an empty pool
    /// it must sample from)
    #[error("Generation error: {0}")]
    Generation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PlainsightError {
    fn from(err: std::io::Error) -> Self {
        PlainsightError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PlainsightError {
    fn from(err: serde_json::Error) -> Self {
        PlainsightError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PlainsightError {
    fn from(err: toml::de::Error) -> Self {
        PlainsightError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from regex compilation errors
impl From<regex::Error> for PlainsightError {
    fn from(err: regex::Error) -> Self {
        PlainsightError::Scan(format!("Invalid tag pattern: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlainsightError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");

        let err = PlainsightError::Generation("empty pool".to_string());
        assert_eq!(err.to_string(), "Generation error: empty pool");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PlainsightError = io_err.into();
        assert!(matches!(err, PlainsightError::Io(_)));
    }

    #[test]
    fn test_regex_error_conversion() {
        let re_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: PlainsightError = re_err.into();
        assert!(matches!(err, PlainsightError::Scan(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PlainsightError = toml_err.into();
        assert!(matches!(err, PlainsightError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_implements_std_error() {
        let err = PlainsightError::Scan("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
