//! Go model emission.
//!
//! Builds Go enum types and table structs from a [`Catalog`], using the type
//! resolver for every column, and renders them as Go source.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Catalog, Column, Schema, Table};
use crate::error::Result;
use crate::naming::{enum_value_name, struct_name};
use crate::typemap::{enum_type_name, resolve, ResolveOptions};

/// A Go string type with one constant per enum label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoEnum {
    pub name: String,
    /// `(constant name, label)` pairs in declaration order.
    pub constants: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A Go struct generated for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoStruct {
    pub name: String,
    pub fields: Vec<GoField>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoField {
    pub name: String,
    pub go_type: String,
    /// Original column name, used for the `db` struct tag.
    pub db_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// One enum type per enum in every user schema.
pub fn build_enums(catalog: &Catalog, opts: &ResolveOptions) -> Vec<GoEnum> {
    catalog
        .user_schemas()
        .flat_map(|schema| {
            schema.enums.iter().map(move |e| {
                let name = enum_type_name(catalog, &schema.name, &e.name, &opts.naming);
                let constants = e
                    .vals
                    .iter()
                    .map(|v| (enum_value_name(&name, v, &opts.naming), v.clone()))
                    .collect();
                GoEnum {
                    name,
                    constants,
                    comment: e.comment.clone(),
                }
            })
        })
        .collect()
}

/// One struct per table in every user schema.
pub fn build_structs(catalog: &Catalog, opts: &ResolveOptions) -> Vec<GoStruct> {
    catalog
        .user_schemas()
        .flat_map(|schema| {
            schema
                .tables
                .iter()
                .map(move |table| build_struct(catalog, schema, table, opts))
        })
        .collect()
}

fn build_struct(catalog: &Catalog, schema: &Schema, table: &Table, opts: &ResolveOptions) -> GoStruct {
    let name = if catalog.is_default_schema(&schema.name) {
        struct_name(&table.name, &opts.naming)
    } else {
        struct_name(&format!("{}_{}", schema.name, table.name), &opts.naming)
    };

    // Order is preserved by the indexed parallel iterator.
    let fields = table
        .columns
        .par_iter()
        .map(|col| build_field(catalog, col, opts))
        .collect();

    debug!(table = %table.name, go_struct = %name, "built model");

    GoStruct {
        name,
        fields,
        comment: table.comment.clone(),
    }
}

fn build_field(catalog: &Catalog, col: &Column, opts: &ResolveOptions) -> GoField {
    let go_type = resolve(catalog, &col.descriptor(), opts);
    let go_type = if col.is_array {
        format!("[]{}", go_type)
    } else {
        go_type
    };

    GoField {
        name: struct_name(&col.name, &opts.naming),
        go_type,
        db_name: col.name.clone(),
        comment: col.comment.clone(),
    }
}

/// Render enums and structs as a Go source file.
pub fn render_go(package: &str, enums: &[GoEnum], structs: &[GoStruct]) -> Result<String> {
    let mut out = format!("package {}\n", package);

    for e in enums {
        out.push('\n');
        push_comment(&mut out, "", &e.comment);
        out.push_str(&format!("type {} string\n", e.name));
        if !e.constants.is_empty() {
            out.push_str("\nconst (\n");
            for (const_name, value) in &e.constants {
                out.push_str(&format!(
                    "\t{} {} = {}\n",
                    const_name,
                    e.name,
                    go_string_literal(value)?
                ));
            }
            out.push_str(")\n");
        }
    }

    for s in structs {
        out.push('\n');
        push_comment(&mut out, "", &s.comment);
        out.push_str(&format!("type {} struct {{\n", s.name));

        let name_width = s.fields.iter().map(|f| f.name.chars().count()).max().unwrap_or(0);
        let type_width = s.fields.iter().map(|f| f.go_type.len()).max().unwrap_or(0);
        for field in &s.fields {
            push_comment(&mut out, "\t", &field.comment);
            out.push_str(&format!(
                "\t{:name_width$} {:type_width$} `db:{}`\n",
                field.name,
                field.go_type,
                go_string_literal(&field.db_name)?,
            ));
        }
        out.push_str("}\n");
    }

    Ok(out)
}

/// Quote `value` as a Go interpreted string literal.
///
/// JSON string escapes are a subset of Go's: control characters become
/// `\uXXXX` and printable Unicode stays raw.
fn go_string_literal(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn push_comment(out: &mut String, indent: &str, comment: &str) {
    for line in comment.lines() {
        out.push_str(&format!("{}// {}\n", indent, line));
    }
}
