//! Abstract syntax tree definitions
//!
//! This module defines the AST nodes the parser hands to lowering. Each
//! node owns its children exclusively; the tree is consumed once by
//! `lower()` and discarded.

pub mod ops;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, UnaryOp};
pub use expressions::{Expression, Identifier};
pub use statements::{Block, CompUnit, Declaration, FunctionDef, Statement, TypeSpec, VarDef};
