//! Error types for the type generation library.

use thiserror::Error;

/// Exit code for configuration errors (bad YAML, invalid settings).
pub const EXIT_CONFIG_ERROR: u8 = 1;

/// Exit code for malformed qualified identifiers.
pub const EXIT_IDENTIFIER_ERROR: u8 = 2;

/// Exit code for catalog file errors.
pub const EXIT_CATALOG_ERROR: u8 = 3;

/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for type generation.
#[derive(Error, Debug)]
pub enum TypegenError {
    /// A dotted name that does not split into 1, 2 or 3 parts.
    #[error("invalid name: {0}")]
    InvalidIdentifier(String),

    /// Configuration error (invalid settings, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog file is structurally unusable.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TypegenError {
    /// Create an InvalidIdentifier error for the offending input.
    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        TypegenError::InvalidIdentifier(name.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            TypegenError::Config(_) | TypegenError::Yaml(_) | TypegenError::Json(_) => {
                EXIT_CONFIG_ERROR
            }
            TypegenError::InvalidIdentifier(_) => EXIT_IDENTIFIER_ERROR,
            TypegenError::Catalog(_) => EXIT_CATALOG_ERROR,
            TypegenError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for type generation operations.
pub type Result<T> = std::result::Result<T, TypegenError>;
