//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::naming::Naming;
use crate::typemap::DriverProfile;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log types that fall back to `interface{}`.
    #[serde(default)]
    pub debug: bool,

    /// Go output settings.
    #[serde(default)]
    pub go: GoConfig,
}

/// Go code generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoConfig {
    /// Package name for emitted source (default: "db").
    #[serde(default = "default_package")]
    pub package: String,

    /// Driver package: "database/sql" (default) or "pgx/v4".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_package: Option<String>,

    /// Rename map and initialisms.
    #[serde(flatten)]
    pub naming: Naming,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            sql_package: None,
            naming: Naming::default(),
        }
    }
}

impl GoConfig {
    /// Driver profile selected by `sql_package`.
    pub fn driver(&self) -> DriverProfile {
        DriverProfile::from_sql_package(self.sql_package.as_deref().unwrap_or_default())
    }
}

fn default_package() -> String {
    "db".to_string()
}
