//! Core catalog abstractions.
//!
//! - [`catalog`]: schemas, enums, composite types, tables and columns
//! - [`identifier`]: dotted name parsing

pub mod catalog;
pub mod identifier;

pub use catalog::{Catalog, Column, ColumnDescriptor, CompositeType, Enum, Schema, Table, PG_CATALOG};
pub use identifier::Identifier;
