//! IR value representations
//!
//! Values are either compile-time constants or named references into the
//! flat IR namespace. Source-level variables and functions live under the
//! `@` prefix, generated temporaries under `%`; the name stored here is
//! always the full mangled spelling.

use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named register, slot, or function symbol.
///
/// A reference to a constant carries the folded value so later folding can
/// use it without emitting a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub ty: Type,
    pub const_value: Option<i32>,
}

impl NamedRef {
    /// Non-constant named reference.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        NamedRef {
            name: name.into(),
            ty,
            const_value: None,
        }
    }

    /// Named reference to a folded constant.
    pub fn constant(name: impl Into<String>, ty: Type, value: i32) -> Self {
        NamedRef {
            name: name.into(),
            ty,
            const_value: Some(value),
        }
    }

    pub fn is_const(&self) -> bool {
        self.const_value.is_some()
    }
}

impl fmt::Display for NamedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A value an instruction can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Compile-time integer constant
    Constant(i32),
    /// Named register or slot
    Named(NamedRef),
}

impl Value {
    /// The constant payload, for literal constants and for named
    /// references whose value folded at declaration time.
    pub fn as_const(&self) -> Option<i32> {
        match self {
            Value::Constant(value) => Some(*value),
            Value::Named(named) => named.const_value,
        }
    }

    pub fn is_const(&self) -> bool {
        self.as_const().is_some()
    }

    /// Type of the value; bare constants are `i32`.
    pub fn ty(&self) -> Type {
        match self {
            Value::Constant(_) => Type::Int32,
            Value::Named(named) => named.ty.clone(),
        }
    }
}

impl From<NamedRef> for Value {
    fn from(named: NamedRef) -> Self {
        Value::Named(named)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Constant(value) => write!(f, "{value}"),
            Value::Named(named) => write!(f, "{named}"),
        }
    }
}
