//! Error types for wasm-ports
//!
//! All modules use `PortResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for port operations
pub type PortResult<T> = Result<T, PortError>;

/// A rejected option name or value
///
/// Produced by option validation. Never fatal on its own: callers decide
/// whether to abort, warn, or ignore.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("[{option}] can be [{}], got [{value}]", .allowed.join(", "))]
    InvalidValue {
        option: String,
        allowed: Vec<String>,
        value: String,
    },

    #[error("unknown option [{option}] for port {port}")]
    UnknownOption { port: String, option: String },

    #[error("malformed option [{0}], expected KEY=VALUE")]
    Malformed(String),
}

/// All errors that can occur in wasm-ports
#[derive(Error, Debug)]
pub enum PortError {
    // Option errors
    #[error("invalid port options: {}", format_option_errors(.0))]
    InvalidOptions(Vec<OptionError>),

    #[error("Unknown port: {0}")]
    UnknownPort(String),

    // Fetch / build errors (reported by the host)
    #[error("Integrity check failed for {name}: expected sha512 {expected}, got {actual}")]
    IntegrityMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Failed to fetch {name} from {url}: {reason}")]
    Fetch {
        name: String,
        url: String,
        reason: String,
    },

    #[error("Failed to build {name}: {reason}")]
    Build { name: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn format_option_errors(errors: &[OptionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl PortError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidOptions(_) => Some("Run: wasm-ports info"),
            Self::UnknownPort(_) => Some("Known ports: contrib.glfw3"),
            Self::IntegrityMismatch { .. } => {
                Some("Delete the downloaded archive and fetch it again")
            }
            _ => None,
        }
    }
}

impl From<OptionError> for PortError {
    fn from(err: OptionError) -> Self {
        Self::InvalidOptions(vec![err])
    }
}
