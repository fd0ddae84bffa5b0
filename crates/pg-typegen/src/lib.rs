//! # pg-typegen
//!
//! PostgreSQL column type resolution for Go code generation.
//!
//! This library decides which Go type identifier represents a PostgreSQL
//! column, with support for:
//!
//! - **Built-in types** grouped into families with fixed Go representations
//! - **Driver profiles** for `database/sql` + lib/pq and pgx v4
//! - **Catalog fallback** to user-defined enums and composite types
//! - **Model emission** of Go enums and table structs
//!
//! ## Example
//!
//! ```rust,no_run
//! use pg_typegen::{build_structs, render_go, Catalog, Config};
//!
//! fn main() -> pg_typegen::Result<()> {
//!     let config = Config::load("pg-typegen.yaml")?;
//!     let catalog = Catalog::load("catalog.yaml")?;
//!     let opts = config.resolve_options();
//!     let structs = build_structs(&catalog, &opts);
//!     println!("{}", render_go(&config.go.package, &[], &structs)?);
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod naming;
pub mod typemap;

// Re-exports for convenient access
pub use config::{Config, GoConfig};
pub use core::{Catalog, Column, ColumnDescriptor, Identifier, Schema, Table};
pub use error::{Result, TypegenError};
pub use models::{build_enums, build_structs, render_go, GoEnum, GoField, GoStruct};
pub use naming::{struct_name, Naming};
pub use typemap::{
    resolve, resolve_mapping, DriverProfile, MappingOrigin, ResolveOptions, TypeFamily,
    TypeMapping,
};
