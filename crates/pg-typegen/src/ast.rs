//! Syntax tree nodes for emitted type declarations.
//!
//! [`Node`] is a closed tagged union over the concrete node types. Any
//! concrete node converts into it through `From`, so boxing an unsupported
//! type is rejected at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named record type with typed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Node,
}

/// A type that admits null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullableType {
    pub inner: Box<Node>,
}

/// A reference to a type by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserType {
    pub name: String,
}

/// Envelope over every concrete node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Class(Class),
    NullableType(NullableType),
    UserType(UserType),
}

impl Node {
    /// Tag of the wrapped variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Class(_) => "class",
            Node::NullableType(_) => "nullable_type",
            Node::UserType(_) => "user_type",
        }
    }
}

/// Wrap a concrete node in the [`Node`] envelope.
pub fn boxed(node: impl Into<Node>) -> Node {
    node.into()
}

impl From<Class> for Node {
    fn from(n: Class) -> Self {
        Node::Class(n)
    }
}

impl From<NullableType> for Node {
    fn from(n: NullableType) -> Self {
        Node::NullableType(n)
    }
}

impl From<UserType> for Node {
    fn from(n: UserType) -> Self {
        Node::UserType(n)
    }
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<Node>) -> Self {
        self.fields.push(Property {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }
}

impl NullableType {
    pub fn new(inner: impl Into<Node>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }
}

impl UserType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Renders type references (`Name`, `Name?`); a class renders as its declaration.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::UserType(t) => f.write_str(&t.name),
            Node::NullableType(t) => write!(f, "{}?", t.inner),
            Node::Class(c) => {
                write!(f, "data class {}(", c.name)?;
                for (i, field) in c.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "val {}: {}", field.name, field.ty)?;
                }
                f.write_str(")")
            }
        }
    }
}
