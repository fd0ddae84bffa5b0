//! Built-in PostgreSQL type families and their Go representations.
//!
//! Lookup is a two step table: [`TypeFamily::lookup`] maps a declared type
//! keyword to a family, and [`TypeFamily::go_type`] maps a family plus the
//! active driver profile to a Go type identifier.

use serde::{Deserialize, Serialize};

use super::driver::DriverProfile;

/// Schema prefix accepted in front of every built-in keyword.
const PG_CATALOG_PREFIX: &str = "pg_catalog.";

/// Fallback identifier when no specific representation applies.
pub const DYNAMIC: &str = "interface{}";

pub const STRING: &str = "string";
pub const NULL_STRING: &str = "sql.NullString";
pub const RAW_MESSAGE: &str = "json.RawMessage";
pub const NULL_RAW_MESSAGE: &str = "pqtype.NullRawMessage";

/// A group of SQL type keywords sharing one Go representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFamily {
    SmallInt,
    Integer,
    BigInt,
    Real,
    DoublePrecision,
    Numeric,
    Boolean,
    Json,
    Jsonb,
    Bytea,
    DateTime,
    Text,
    Uuid,
    Inet,
    Cidr,
    MacAddr,
    Ltree,
    Interval,
    DateRange,
    TsRange,
    TsTzRange,
    NumRange,
    Int4Range,
    Int8Range,
    Hstore,
    Void,
    Any,
}

/// Keywords per family. Each keyword also matches with a `pg_catalog.` prefix.
const KEYWORDS: &[(TypeFamily, &[&str])] = &[
    (TypeFamily::SmallInt, &["smallint", "int2", "smallserial", "serial2"]),
    (TypeFamily::Integer, &["integer", "int", "int4", "serial", "serial4"]),
    (TypeFamily::BigInt, &["bigint", "int8", "bigserial", "serial8"]),
    (TypeFamily::Real, &["real", "float4"]),
    (TypeFamily::DoublePrecision, &["float", "double precision", "float8"]),
    (TypeFamily::Numeric, &["numeric", "money"]),
    (TypeFamily::Boolean, &["boolean", "bool"]),
    (TypeFamily::Json, &["json"]),
    (TypeFamily::Jsonb, &["jsonb"]),
    (TypeFamily::Bytea, &["bytea", "blob"]),
    (
        TypeFamily::DateTime,
        &["date", "time", "timetz", "timestamp", "timestamptz"],
    ),
    (TypeFamily::Text, &["text", "varchar", "bpchar", "string"]),
    (TypeFamily::Uuid, &["uuid"]),
    (TypeFamily::Inet, &["inet"]),
    (TypeFamily::Cidr, &["cidr"]),
    (TypeFamily::MacAddr, &["macaddr", "macaddr8"]),
    (TypeFamily::Ltree, &["ltree", "lquery", "ltxtquery"]),
    (TypeFamily::Interval, &["interval"]),
    (TypeFamily::DateRange, &["daterange"]),
    (TypeFamily::TsRange, &["tsrange"]),
    (TypeFamily::TsTzRange, &["tstzrange"]),
    (TypeFamily::NumRange, &["numrange"]),
    (TypeFamily::Int4Range, &["int4range"]),
    (TypeFamily::Int8Range, &["int8range"]),
    (TypeFamily::Hstore, &["hstore"]),
    (TypeFamily::Void, &["void"]),
    (TypeFamily::Any, &["any"]),
];

impl TypeFamily {
    /// Every family, in table order.
    pub fn all() -> impl Iterator<Item = TypeFamily> {
        KEYWORDS.iter().map(|(family, _)| *family)
    }

    /// Keywords that select this family (without the `pg_catalog.` prefix).
    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(family, _)| *family == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Find the family for a declared type. Matching is case-sensitive.
    pub fn lookup(declared_type: &str) -> Option<TypeFamily> {
        let keyword = declared_type
            .strip_prefix(PG_CATALOG_PREFIX)
            .unwrap_or(declared_type);

        KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.contains(&keyword))
            .map(|(family, _)| *family)
    }

    /// Go type for this family.
    ///
    /// `driver` is `None` when no profile is configured. `not_null` must
    /// already account for arrays; it only matters for document types.
    pub fn go_type(self, driver: Option<DriverProfile>, not_null: bool) -> &'static str {
        if let Some(go_type) = self.fixed_type() {
            return go_type;
        }

        match (self, driver) {
            // Document types are the only nullability-sensitive family.
            (TypeFamily::Json | TypeFamily::Jsonb, Some(DriverProfile::LibPq)) => {
                if not_null {
                    RAW_MESSAGE
                } else {
                    NULL_RAW_MESSAGE
                }
            }
            (_, Some(driver)) => self.driver_type(driver).unwrap_or(DYNAMIC),
            (TypeFamily::Numeric, None) => STRING,
            (_, None) => DYNAMIC,
        }
    }

    /// Representation shared by every profile, if any.
    fn fixed_type(self) -> Option<&'static str> {
        let go_type = match self {
            TypeFamily::SmallInt => "int16",
            TypeFamily::Integer => "int32",
            TypeFamily::BigInt | TypeFamily::Interval => "int64",
            TypeFamily::Real => "float32",
            TypeFamily::DoublePrecision => "float64",
            TypeFamily::Boolean => "bool",
            TypeFamily::Bytea => "[]byte",
            TypeFamily::DateTime => "time.Time",
            TypeFamily::Text | TypeFamily::Ltree => STRING,
            TypeFamily::Uuid => "uuid.UUID",
            TypeFamily::Void | TypeFamily::Any => DYNAMIC,
            _ => return None,
        };
        Some(go_type)
    }

    /// Profile-specific representation, if the profile has one.
    fn driver_type(self, driver: DriverProfile) -> Option<&'static str> {
        let go_type = match (driver, self) {
            (DriverProfile::PgxV4, TypeFamily::Numeric) => "pgtype.Numeric",
            (DriverProfile::PgxV4, TypeFamily::Json) => "pgtype.JSON",
            (DriverProfile::PgxV4, TypeFamily::Jsonb) => "pgtype.JSONB",
            (DriverProfile::PgxV4, TypeFamily::Inet) => "pgtype.Inet",
            (DriverProfile::PgxV4, TypeFamily::Cidr) => "pgtype.CIDR",
            (DriverProfile::PgxV4, TypeFamily::MacAddr) => "pgtype.Macaddr",
            (DriverProfile::PgxV4, TypeFamily::DateRange) => "pgtype.Daterange",
            (DriverProfile::PgxV4, TypeFamily::TsRange) => "pgtype.Tsrange",
            (DriverProfile::PgxV4, TypeFamily::TsTzRange) => "pgtype.Tstzrange",
            (DriverProfile::PgxV4, TypeFamily::NumRange) => "pgtype.Numrange",
            (DriverProfile::PgxV4, TypeFamily::Int4Range) => "pgtype.Int4range",
            (DriverProfile::PgxV4, TypeFamily::Int8Range) => "pgtype.Int8range",
            (DriverProfile::PgxV4, TypeFamily::Hstore) => "pgtype.Hstore",
            // lib/pq has no decimal type and returns numerics as text.
            (DriverProfile::LibPq, TypeFamily::Numeric) => STRING,
            (DriverProfile::LibPq, TypeFamily::Inet) => "pqtype.Inet",
            (DriverProfile::LibPq, TypeFamily::Cidr) => "pqtype.CIDR",
            (DriverProfile::LibPq, TypeFamily::MacAddr) => "pqtype.Macaddr",
            _ => return None,
        };
        Some(go_type)
    }
}
