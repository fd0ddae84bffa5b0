//! Qualified identifier parsing.
//!
//! Catalog type names arrive as dotted strings: `status`, `billing.status`
//! or `app.billing.status`. [`Identifier::parse`] splits them into their
//! catalog, schema and name parts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypegenError};

/// A dotted name decomposed into optional catalog, optional schema and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Identifier {
    /// Catalog (database) part, present only for three-part names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// Schema part, present for two- and three-part names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Object name.
    pub name: String,
}

impl Identifier {
    /// Create an unqualified identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            catalog: None,
            schema: None,
            name: name.into(),
        }
    }

    /// Create a schema-qualified identifier.
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            catalog: None,
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// Split a dotted name on `.`.
    ///
    /// One segment yields a bare name, two yield schema and name, three
    /// yield catalog, schema and name. The empty string (zero segments)
    /// and names with more than three segments are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TypegenError::InvalidIdentifier`] carrying `name`.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(TypegenError::invalid_identifier(name));
        }

        let parts: Vec<&str> = name.split('.').collect();
        match parts.as_slice() {
            [name] => Ok(Self::new(*name)),
            [schema, name] => Ok(Self::qualified(*schema, *name)),
            [catalog, schema, name] => Ok(Self {
                catalog: Some((*catalog).to_string()),
                schema: Some((*schema).to_string()),
                name: (*name).to_string(),
            }),
            _ => Err(TypegenError::invalid_identifier(name)),
        }
    }

    /// Schema to match against, treating a missing or empty schema as `default`.
    pub fn schema_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.schema.as_deref() {
            Some(schema) if !schema.is_empty() => schema,
            _ => default,
        }
    }
}

impl FromStr for Identifier {
    type Err = TypegenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(catalog) = &self.catalog {
            write!(f, "{}.", catalog)?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{}.", schema)?;
        }
        f.write_str(&self.name)
    }
}
