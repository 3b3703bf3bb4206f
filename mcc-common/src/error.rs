//! Error handling for the mcc middle-end
//!
//! This module defines the compile-time errors the lowering pass can
//! produce. Lowering aborts on the first error; nothing is recovered or
//! retried, so every variant simply names the offender.

use thiserror::Error;

/// Errors raised while lowering an AST into IR.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LowerError {
    #[error("undeclared identifier `{name}`")]
    UndeclaredIdentifier { name: String },

    #[error("identifier `{name}` redeclared in the same scope")]
    Redeclaration { name: String },

    #[error("cannot assign to constant `{name}`")]
    AssignToConst { name: String },

    #[error("constant `{name}` declared without an initializer")]
    MissingInitializer { name: String },

    #[error("constant `{name}` initialized with a non-constant expression")]
    NonConstInitializer { name: String },

    #[error("function `{function}` ends without a terminator")]
    MissingTerminator { function: String },
}

impl LowerError {
    /// Create an undeclared-identifier error.
    pub fn undeclared(name: impl Into<String>) -> Self {
        LowerError::UndeclaredIdentifier { name: name.into() }
    }

    /// Create a redeclaration error.
    pub fn redeclaration(name: impl Into<String>) -> Self {
        LowerError::Redeclaration { name: name.into() }
    }

    /// Create an assignment-to-constant error.
    pub fn assign_to_const(name: impl Into<String>) -> Self {
        LowerError::AssignToConst { name: name.into() }
    }

    /// Create a missing-initializer error.
    pub fn missing_initializer(name: impl Into<String>) -> Self {
        LowerError::MissingInitializer { name: name.into() }
    }

    /// Create a non-constant-initializer error.
    pub fn non_const_initializer(name: impl Into<String>) -> Self {
        LowerError::NonConstInitializer { name: name.into() }
    }

    /// Create a missing-terminator error for the given function.
    pub fn missing_terminator(function: impl Into<String>) -> Self {
        LowerError::MissingTerminator {
            function: function.into(),
        }
    }
}
