// SentryView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error keeps its causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SentryView operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SentryViewError {
    /// Log ingestion failed.
    Ingest(IngestError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for SentryViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingest(e) => write!(f, "Ingestion error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for SentryViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ingest(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Ingestion errors
// ---------------------------------------------------------------------------

/// Errors raised by the log ingestion path.
///
/// Any of these is terminal for that single ingestion attempt only: the
/// previously loaded collection and view state stay untouched. Short or
/// ragged rows are deliberately NOT an error — missing trailing fields
/// default to the empty string during parsing.
#[derive(Debug)]
pub enum IngestError {
    /// The payload's declared type is not csv-like. Raised before any
    /// read is attempted; gating is by filename/declared media type,
    /// never by content sniffing.
    UnsupportedFormat { path: PathBuf },

    /// The underlying read of the file's contents did not complete.
    ReadFailure { path: PathBuf, source: io::Error },

    /// The file exceeds the upload size cap.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { path } => {
                write!(
                    f,
                    "'{}' is not a CSV file. Please upload a .csv file.",
                    path.display()
                )
            }
            Self::ReadFailure { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum upload size of {max_size} bytes",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<IngestError> for SentryViewError {
    fn from(e: IngestError) -> Self {
        Self::Ingest(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SentryViewError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for SentryView results.
pub type Result<T> = std::result::Result<T, SentryViewError>;
