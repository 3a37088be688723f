// src/error.rs - Error handling for catalog, media, and storefront state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Configuration {
        key: Option<String>,
        validation_errors: Vec<String>,
    },
    Catalog {
        product_id: Option<String>,
        operation: CatalogOperation,
    },
    Media {
        src: Option<String>,
        operation: MediaOperation,
    },
    Io,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogOperation {
    Load,
    Patch,
    SeedVariantNames,
    UpdateVariantName,
    DeleteVariantName,
    GenerateSku,
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaOperation {
    Load,
    Playback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub metadata: crate::types::Metadata,
    pub backtrace: Option<String>,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            timestamp: Utc::now(),
            metadata: std::collections::HashMap::new(),
            backtrace: Self::capture_backtrace(),
            causes: Vec::new(),
        }
    }

    /// Capture backtrace if available on the platform
    fn capture_backtrace() -> Option<String> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Some(std::backtrace::Backtrace::capture().to_string())
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds metadata to the error
    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a catalog operation error
    pub fn catalog(
        product_id: Option<String>,
        operation: CatalogOperation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Catalog {
                product_id,
                operation,
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a media error; media failures are always recoverable
    pub fn media(
        src: impl Into<String>,
        operation: MediaOperation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Media {
                src: Some(src.into()),
                operation,
            },
            message,
        )
        .severity(ErrorSeverity::Low)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let msg = err.to_string();

        let mut error = Error::new(ErrorKind::Io, msg);
        error.source = "std::io::Error".to_string();
        error.severity = ErrorSeverity::High;

        error
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let mut error = Error::new(ErrorKind::Serialization, err.to_string());
        error.source = "serde_json::Error".to_string();

        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("Invalid configuration value")
            .source("config")
            .metadata(
                "key",
                serde_json::Value::String("gallery.auto_scroll_interval_ms".to_string()),
            );

        assert_eq!(error.severity, ErrorSeverity::High);
        assert_eq!(error.source, "config");
        assert!(matches!(error.kind, ErrorKind::Configuration { .. }));
        assert!(error.metadata.contains_key("key"));
    }

    #[test]
    fn test_media_error_is_recoverable() {
        let error = Error::media("https://cdn/broken.jpg", MediaOperation::Load, "image failed");
        assert!(matches!(error.kind, ErrorKind::Media { .. }));
        assert_eq!(error.severity, ErrorSeverity::Low);
    }

    #[test]
    fn test_caused_by_records_the_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = Error::config("failed to parse storefront.toml").caused_by(io);
        assert_eq!(error.causes.len(), 1);
        assert!(error.causes[0].contains("no such file"));
    }

    #[test]
    fn test_catalog_error() {
        let error = Error::catalog(
            Some("prod-1".to_string()),
            CatalogOperation::DeleteVariantName,
            "variant name not found",
        );
        assert!(matches!(error.kind, ErrorKind::Catalog { .. }));
        assert_eq!(error.severity, ErrorSeverity::High);
    }
}
