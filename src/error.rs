//! Unified error types for site-verdict.
//!
//! The scoring core itself has a single failure mode (malformed input); the
//! remaining variants belong to configuration loading and the I/O edges of
//! the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for site-verdict operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VerdictError {
    /// A caller handed the core values it cannot score
    #[error("Invalid input: {context}")]
    InvalidInput {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or YAML documents
    #[error("Failed to parse input: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific invalid-input kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("{field} is not a finite number ({value})")]
    NonFinite { field: String, value: f64 },

    #[error("{field} must not be negative ({value})")]
    Negative { field: String, value: f64 },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for site-verdict operations
pub type Result<T> = std::result::Result<T, VerdictError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl VerdictError {
    /// Create an invalid-input error with context
    pub fn invalid_input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::InvalidInput {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid-input error for a NaN or infinite value
    pub fn non_finite(context: impl Into<String>, field: impl Into<String>, value: f64) -> Self {
        Self::invalid_input(
            context,
            InputErrorKind::NonFinite {
                field: field.into(),
                value,
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for VerdictError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for VerdictError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("JSON: {err}"))
    }
}

impl From<serde_yaml_ng::Error> for VerdictError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(format!("YAML: {err}"))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, so an error raised while scoring
/// one page of a batch reads like `"page https://a.example: performance score"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<VerdictError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: VerdictError, new_ctx: &str) -> VerdictError {
    match err {
        VerdictError::InvalidInput {
            context: existing,
            source,
        } => VerdictError::InvalidInput {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VerdictError::Io {
            path,
            message,
            source,
        } => VerdictError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        VerdictError::Parse(msg) => VerdictError::Parse(chain_context(new_ctx, &msg)),
        VerdictError::Config(msg) => VerdictError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a config error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| VerdictError::Config(context.into()))
    }
}
