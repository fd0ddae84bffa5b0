//! Type mapping from PostgreSQL column types to Go type identifiers.
//!
//! Resolution runs in three steps, each only reached when the previous one
//! found nothing:
//!
//! 1. built-in families ([`TypeFamily`]), keyed on the declared type and the
//!    active [`DriverProfile`]
//! 2. catalog fallback: enums and composite types in user schemas
//! 3. the dynamic sentinel `interface{}`
//!
//! Every function here is freestanding and reads only its arguments, so
//! columns can be resolved concurrently.
//!
//! ```rust
//! use pg_typegen::{resolve, Catalog, ColumnDescriptor, DriverProfile, ResolveOptions};
//!
//! let catalog = Catalog::new("public");
//! let opts = ResolveOptions::new(Some(DriverProfile::PgxV4));
//! assert_eq!(resolve(&catalog, &ColumnDescriptor::new("numeric"), &opts), "pgtype.Numeric");
//! ```

mod driver;
mod family;

pub use driver::{DriverProfile, SQL_PACKAGE_PGX_V4, SQL_PACKAGE_STANDARD};
pub use family::{TypeFamily, DYNAMIC, NULL_RAW_MESSAGE, NULL_STRING, RAW_MESSAGE, STRING};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Catalog, ColumnDescriptor, Identifier};
use crate::naming::{struct_name, Naming};

/// Inputs to resolution that stay fixed for a whole generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Active driver profile, `None` when none is configured.
    pub driver: Option<DriverProfile>,
    /// Naming rules for enum-derived identifiers.
    pub naming: Naming,
    /// Log unresolved types.
    pub diagnostics: bool,
}

impl ResolveOptions {
    pub fn new(driver: Option<DriverProfile>) -> Self {
        Self {
            driver,
            ..Default::default()
        }
    }

    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Where a resolved type came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingOrigin {
    /// A built-in SQL type family.
    Builtin { family: TypeFamily },
    /// A catalog enum.
    Enum { schema: String, name: String },
    /// A catalog composite type.
    Composite { schema: String, name: String },
    /// Nothing matched.
    Unresolved,
}

/// Result of resolving one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    /// Go type identifier, inserted verbatim into generated code.
    pub go_type: String,
    pub origin: MappingOrigin,
    /// Set when the mapping fell back to the dynamic sentinel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl TypeMapping {
    fn builtin(family: TypeFamily, go_type: &str) -> Self {
        Self {
            go_type: go_type.to_string(),
            origin: MappingOrigin::Builtin { family },
            warning: None,
        }
    }

    fn unresolved(warning: String) -> Self {
        Self {
            go_type: DYNAMIC.to_string(),
            origin: MappingOrigin::Unresolved,
            warning: Some(warning),
        }
    }

    /// Whether resolution fell back to `interface{}`.
    pub fn is_dynamic(&self) -> bool {
        self.go_type == DYNAMIC
    }
}

/// Resolve a column to its Go type identifier.
///
/// Never fails: unknown types degrade to `interface{}`.
pub fn resolve(catalog: &Catalog, column: &ColumnDescriptor<'_>, opts: &ResolveOptions) -> String {
    resolve_mapping(catalog, column, opts).go_type
}

/// Resolve a column, keeping track of which rule produced the type.
pub fn resolve_mapping(
    catalog: &Catalog,
    column: &ColumnDescriptor<'_>,
    opts: &ResolveOptions,
) -> TypeMapping {
    let not_null = column.effective_not_null();

    if let Some(family) = TypeFamily::lookup(column.declared_type) {
        return TypeMapping::builtin(family, family.go_type(opts.driver, not_null));
    }

    let mapping = match Identifier::parse(column.declared_type) {
        Ok(rel) => lookup_catalog(catalog, &rel, not_null, &opts.naming),
        Err(e) => {
            debug!(declared_type = column.declared_type, "{}", e);
            None
        }
    };

    mapping.unwrap_or_else(|| {
        if opts.diagnostics {
            warn!(
                declared_type = column.declared_type,
                "unknown PostgreSQL type: {}", column.declared_type
            );
        }
        TypeMapping::unresolved(format!(
            "unknown PostgreSQL type: {}",
            column.declared_type
        ))
    })
}

/// Search user schemas for an enum or composite type named by `rel`.
fn lookup_catalog(
    catalog: &Catalog,
    rel: &Identifier,
    not_null: bool,
    naming: &Naming,
) -> Option<TypeMapping> {
    let rel_schema = rel.schema_or(&catalog.default_schema);

    for schema in catalog.user_schemas().filter(|s| s.name == rel_schema) {
        if let Some(e) = schema.find_enum(&rel.name) {
            return Some(TypeMapping {
                go_type: enum_type_name(catalog, &schema.name, &e.name, naming),
                origin: MappingOrigin::Enum {
                    schema: schema.name.clone(),
                    name: e.name.clone(),
                },
                warning: None,
            });
        }

        if let Some(ct) = schema.find_composite(&rel.name) {
            let go_type = if not_null { STRING } else { NULL_STRING };
            return Some(TypeMapping {
                go_type: go_type.to_string(),
                origin: MappingOrigin::Composite {
                    schema: schema.name.clone(),
                    name: ct.name.clone(),
                },
                warning: None,
            });
        }
    }

    None
}

/// Go type name for an enum; enums outside the default schema get a schema prefix.
pub fn enum_type_name(catalog: &Catalog, schema: &str, enum_name: &str, naming: &Naming) -> String {
    if catalog.is_default_schema(schema) {
        struct_name(enum_name, naming)
    } else {
        struct_name(&format!("{}_{}", schema, enum_name), naming)
    }
}
