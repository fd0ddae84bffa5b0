//! Database catalog model.
//!
//! The [`Catalog`] is the read-only view of schemas, tables, enums and
//! composite types that type resolution consults. It is loaded once from a
//! YAML or JSON file and then only borrowed.
//!
//! Schema order is significant: resolution scans schemas in the order they
//! appear in the file and the first match wins.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypegenError};

/// Name of the PostgreSQL system schema, never scanned for user types.
pub const PG_CATALOG: &str = "pg_catalog";

/// The full set of known schemas for a database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema used for unqualified names (usually `public`).
    pub default_schema: String,

    /// Schemas in lookup order.
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

/// A single schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,

    #[serde(default)]
    pub enums: Vec<Enum>,

    #[serde(default)]
    pub composite_types: Vec<CompositeType>,

    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A catalog-defined enum type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,

    /// Labels in declaration order.
    #[serde(default)]
    pub vals: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A catalog-defined composite (record) type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeType {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Table metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Column metadata as produced by upstream schema analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,

    /// Declared SQL type, e.g. `int8`, `pg_catalog.varchar`, `billing.status`.
    #[serde(rename = "type")]
    pub data_type: String,

    #[serde(default)]
    pub not_null: bool,

    #[serde(default)]
    pub is_array: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// The per-call input to type resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor<'a> {
    /// Declared SQL type. Never empty.
    pub declared_type: &'a str,
    pub not_null: bool,
    pub is_array: bool,
}

impl<'a> ColumnDescriptor<'a> {
    /// Descriptor for a nullable scalar column.
    pub fn new(declared_type: &'a str) -> Self {
        Self {
            declared_type,
            not_null: false,
            is_array: false,
        }
    }

    pub fn not_null(mut self, not_null: bool) -> Self {
        self.not_null = not_null;
        self
    }

    pub fn array(mut self, is_array: bool) -> Self {
        self.is_array = is_array;
        self
    }

    /// Arrays are never represented as nullable scalars.
    pub fn effective_not_null(&self) -> bool {
        self.not_null || self.is_array
    }
}

impl Column {
    /// Borrow this column as a resolution input.
    pub fn descriptor(&self) -> ColumnDescriptor<'_> {
        ColumnDescriptor {
            declared_type: &self.data_type,
            not_null: self.not_null,
            is_array: self.is_array,
        }
    }
}

impl Catalog {
    /// Create an empty catalog with the given default schema.
    pub fn new(default_schema: impl Into<String>) -> Self {
        Self {
            default_schema: default_schema.into(),
            schemas: Vec::new(),
        }
    }

    /// Load a catalog file. `.json` files are read as JSON, anything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the minimal structure resolution depends on.
    pub fn validate(&self) -> Result<()> {
        if self.default_schema.is_empty() {
            return Err(TypegenError::Catalog("default_schema is required".into()));
        }
        if let Some(idx) = self.schemas.iter().position(|s| s.name.is_empty()) {
            return Err(TypegenError::Catalog(format!(
                "schemas[{}].name is required",
                idx
            )));
        }
        Ok(())
    }

    /// Append a schema, keeping lookup order.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Find the first schema with the given name.
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Schemas that may hold user-defined types, in lookup order.
    pub fn user_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter().filter(|s| s.name != PG_CATALOG)
    }

    pub fn is_default_schema(&self, name: &str) -> bool {
        self.default_schema == name
    }
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_enum(mut self, name: impl Into<String>, vals: &[&str]) -> Self {
        self.enums.push(Enum {
            name: name.into(),
            vals: vals.iter().map(|v| v.to_string()).collect(),
            comment: String::new(),
        });
        self
    }

    pub fn with_composite(mut self, name: impl Into<String>) -> Self {
        self.composite_types.push(CompositeType {
            name: name.into(),
            comment: String::new(),
        });
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn find_composite(&self, name: &str) -> Option<&CompositeType> {
        self.composite_types.iter().find(|c| c.name == name)
    }
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_column(mut self, name: &str, data_type: &str, not_null: bool) -> Self {
        self.columns.push(Column {
            name: name.to_string(),
            data_type: data_type.to_string(),
            not_null,
            ..Default::default()
        });
        self
    }

    pub fn with_array_column(mut self, name: &str, data_type: &str) -> Self {
        self.columns.push(Column {
            name: name.to_string(),
            data_type: data_type.to_string(),
            is_array: true,
            ..Default::default()
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG_YAML: &str = r#"
default_schema: public
schemas:
  - name: pg_catalog
    enums:
      - name: status
  - name: public
    enums:
      - name: status
        vals: [active, inactive]
    composite_types:
      - name: address
    tables:
      - name: users
        columns:
          - name: id
            type: bigserial
            not_null: true
          - name: tags
            type: text
            is_array: true
  - name: billing
"#;

    #[test]
    fn test_from_yaml_preserves_schema_order() {
        let catalog = Catalog::from_yaml(CATALOG_YAML).unwrap();
        let names: Vec<&str> = catalog.schemas.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["pg_catalog", "public", "billing"]);

        let public = catalog.schema("public").unwrap();
        assert_eq!(public.find_enum("status").unwrap().vals, ["active", "inactive"]);
        assert!(public.find_composite("address").is_some());
        assert_eq!(public.tables[0].columns[0].data_type, "bigserial");
        assert!(public.tables[0].columns[1].is_array);
    }

    #[test]
    fn test_user_schemas_skip_pg_catalog() {
        let catalog = Catalog::from_yaml(CATALOG_YAML).unwrap();
        let names: Vec<&str> = catalog.user_schemas().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["public", "billing"]);
    }

    #[test]
    fn test_validate_requires_default_schema() {
        let err = Catalog::from_yaml("schemas: []\ndefault_schema: ''").unwrap_err();
        assert!(matches!(err, TypegenError::Catalog(_)));
    }

    #[test]
    fn test_validate_requires_schema_names() {
        let catalog = Catalog::new("public").with_schema(Schema::new(""));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("schemas[0].name"));
    }

    #[test]
    fn test_load_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"default_schema":"public","schemas":[{{"name":"public"}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.default_schema, "public");
        assert_eq!(catalog.schemas.len(), 1);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG_YAML.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.is_default_schema("public"));
        assert!(!catalog.is_default_schema("billing"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, TypegenError::Io(_)));
    }

    #[test]
    fn test_column_descriptor_effective_not_null() {
        assert!(!ColumnDescriptor::new("text").effective_not_null());
        assert!(ColumnDescriptor::new("text").not_null(true).effective_not_null());
        assert!(ColumnDescriptor::new("text").array(true).effective_not_null());
    }
}
