//! Unified error types for iphone-monitor.
//!
//! Only loading the feed (and the ambient config/report plumbing around it)
//! can fail. The derivation pipeline itself has no error path: incomplete
//! listing data degrades to zero prices instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for iphone-monitor operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// Errors while loading or decoding the listing feed
    #[error("Failed to load catalog feed: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote feeds are not supported in this build: {0}")]
    RemoteDisabled(String),

    #[error("Feed source is empty")]
    EmptySource,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for iphone-monitor operations
pub type Result<T> = std::result::Result<T, CatalogError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CatalogError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }

    /// Short, user-facing description for static error indicators.
    ///
    /// Strips the context chain down to the innermost cause so the UI shows
    /// e.g. `HTTP error! status: 404` rather than the full chain.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Load { source, .. } => source.to_string(),
            Self::Io { message, .. } => message.clone(),
            Self::Report(msg) | Self::Config(msg) | Self::Validation(msg) => msg.clone(),
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure reads like
/// `loading feed from data.json: JSON deserialization`.
///
/// # Example
///
/// ```ignore
/// use iphone_monitor::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<CatalogFeed> {
///     let content = std::fs::read_to_string(path)
///         .context("reading feed file")?;
///
///     parse_feed_str(&content)
///         .with_context(|| format!("parsing feed from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CatalogError>> ErrorContext<T> for std::result::Result<T, E> {
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

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: CatalogError, new_ctx: &str) -> CatalogError {
    match err {
        CatalogError::Load {
            context: existing,
            source,
        } => CatalogError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CatalogError::Io {
            path,
            message,
            source,
        } => CatalogError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CatalogError::Report(msg) => CatalogError::Report(chain_context(new_ctx, &msg)),
        CatalogError::Config(msg) => CatalogError::Config(chain_context(new_ctx, &msg)),
        CatalogError::Validation(msg) => CatalogError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to a validation error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| CatalogError::validation(context))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| CatalogError::validation(f()))
    }
}
