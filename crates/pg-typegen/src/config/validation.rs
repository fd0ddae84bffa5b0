//! Configuration validation.

use super::Config;
use crate::error::{Result, TypegenError};
use crate::naming::is_go_identifier;

/// Validate the configuration.
///
/// An unknown `sql_package` is accepted; it resolves as the standard profile.
pub fn validate(config: &Config) -> Result<()> {
    if !is_go_identifier(&config.go.package) {
        return Err(TypegenError::Config(format!(
            "go.package must be a valid Go identifier, got '{}'",
            config.go.package
        )));
    }

    for (from, to) in &config.go.naming.rename {
        if from.is_empty() {
            return Err(TypegenError::Config(
                "go.rename keys cannot be empty".into(),
            ));
        }
        if !is_go_identifier(to) {
            return Err(TypegenError::Config(format!(
                "go.rename.{} must be a valid Go identifier, got '{}'",
                from, to
            )));
        }
    }

    for initialism in &config.go.naming.initialisms {
        if initialism.is_empty() || !initialism.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TypegenError::Config(format!(
                "go.initialisms entries must be non-empty and alphanumeric, got '{}'",
                initialism
            )));
        }
    }

    Ok(())
}
