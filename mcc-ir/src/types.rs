//! IR type system
//!
//! Types are small values compared structurally: a pointer-to-i32 built
//! for one slot is interchangeable with one built for another. Sharing is
//! expressed by cloning, so no type is ever owned from two places.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of an IR value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// 32-bit signed integer
    Int32,
    /// Pointer to a storage slot holding the inner type
    Pointer(Box<Type>),
    /// Function type with parameter types and return type
    Function { params: Vec<Type>, ret: Box<Type> },
}

impl Type {
    /// Pointer to `pointee`.
    pub fn pointer_to(pointee: Type) -> Type {
        Type::Pointer(Box::new(pointee))
    }

    /// Function type with the given parameter and return types.
    pub fn function(params: Vec<Type>, ret: Type) -> Type {
        Type::Function {
            params,
            ret: Box::new(ret),
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    /// Pointee of a pointer type, `None` otherwise.
    pub fn pointee(&self) -> Option<&Type> {
        match self {
            Type::Pointer(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int32 => write!(f, "i32"),
            Type::Pointer(inner) => write!(f, "*{inner}"),
            Type::Function { params, ret } => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, "): {ret}")
            }
        }
    }
}
