//! Go identifier naming for SQL names.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Naming rules for derived Go identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Naming {
    /// Explicit SQL name → Go name overrides.
    #[serde(default)]
    pub rename: BTreeMap<String, String>,

    /// Name parts rendered fully upper-case.
    #[serde(default = "default_initialisms")]
    pub initialisms: BTreeSet<String>,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            rename: BTreeMap::new(),
            initialisms: default_initialisms(),
        }
    }
}

fn default_initialisms() -> BTreeSet<String> {
    BTreeSet::from(["id".to_string()])
}

/// Convert a SQL name into an exported Go identifier.
///
/// A non-empty rename entry wins. Otherwise the name is split on every
/// non-alphanumeric character and each part is title-cased, or upper-cased
/// when it is a configured initialism. Unicode letters are kept.
pub fn struct_name(name: &str, naming: &Naming) -> String {
    if let Some(renamed) = naming.rename.get(name).filter(|r| !r.is_empty()) {
        return renamed.clone();
    }

    let mut out = String::with_capacity(name.len());
    for part in name.split(|c: char| !c.is_alphanumeric()) {
        if part.is_empty() {
            continue;
        }
        if naming.initialisms.contains(part) {
            out.push_str(&part.to_uppercase());
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }

    if !out.starts_with(char::is_alphabetic) {
        out.insert(0, '_');
    }
    out
}

/// Name of the Go constant for one enum label.
pub fn enum_value_name(enum_name: &str, value: &str, naming: &Naming) -> String {
    let suffix = struct_name(value, naming);
    format!("{}{}", enum_name, suffix.trim_start_matches('_'))
}

/// Whether `name` is usable as a Go identifier.
pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
