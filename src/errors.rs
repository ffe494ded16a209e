//! Shared error types for the dashboard.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration file could not be parsed or is structurally wrong
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A chart descriptor breaks one of its invariants
    #[error("Chart '{chart}': {message}")]
    Chart { chart: String, message: String },

    /// A tab declared in the configuration has no registered component
    #[error("No component registered for tab '{tab}'")]
    MissingComponent { tab: String },

    /// A component depends on a chart the configuration does not declare
    #[error("Component '{component}' requires chart '{chart}' which is not configured")]
    MissingChart { component: String, chart: String },

    /// Generic validation failure
    #[error("Validation error: {0}")]
    Validation(String),

    /// Several validation failures reported together
    #[error("{} validation error(s):\n{}", .0.len(), format_error_list(.0))]
    Invalid(Vec<DashboardError>),

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl DashboardError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a chart invariant error
    pub fn chart(chart: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Chart {
            chart: chart.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Flatten into the individual errors it carries
    pub fn into_errors(self) -> Vec<DashboardError> {
        match self {
            Self::Invalid(errors) => errors,
            other => vec![other],
        }
    }
}

fn format_error_list(errors: &[DashboardError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, DashboardError>;
