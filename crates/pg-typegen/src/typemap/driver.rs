//! Driver profiles.
//!
//! A driver profile selects which Go packages the generated code may use for
//! types without a universal representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// `sql_package` value selecting the standard `database/sql` + lib/pq profile.
pub const SQL_PACKAGE_STANDARD: &str = "database/sql";

/// `sql_package` value selecting the pgx v4 profile.
pub const SQL_PACKAGE_PGX_V4: &str = "pgx/v4";

/// Driver library conventions for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverProfile {
    /// `database/sql` with lib/pq: standard library types plus `pqtype`.
    #[default]
    LibPq,
    /// jackc/pgx v4: `pgtype` for numeric, JSON, network, range and hstore.
    PgxV4,
}

impl DriverProfile {
    /// Map a `sql_package` setting to a profile.
    ///
    /// Unknown values fall back to [`DriverProfile::LibPq`] with a warning.
    pub fn from_sql_package(sql_package: &str) -> Self {
        match sql_package {
            SQL_PACKAGE_PGX_V4 => DriverProfile::PgxV4,
            "" | SQL_PACKAGE_STANDARD => DriverProfile::LibPq,
            other => {
                warn!(
                    sql_package = other,
                    "unknown sql_package, using {}", SQL_PACKAGE_STANDARD
                );
                DriverProfile::LibPq
            }
        }
    }

    /// Whether this profile adds extended (`pgtype`) representations.
    pub fn is_extended(self) -> bool {
        matches!(self, DriverProfile::PgxV4)
    }

    pub fn sql_package(self) -> &'static str {
        match self {
            DriverProfile::LibPq => SQL_PACKAGE_STANDARD,
            DriverProfile::PgxV4 => SQL_PACKAGE_PGX_V4,
        }
    }
}

impl fmt::Display for DriverProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_package())
    }
}
