//! Mini-C Compiler - AST to IR Lowering
//!
//! This crate provides the middle-end of the compiler:
//! - AST: abstract syntax tree definitions, the parser's output
//! - Symbol table: scoped name resolution, constant folding at
//!   declaration time, fresh temporaries and labels
//! - Lowering: one procedure per node kind, producing basic-block IR
//!
//! Lowering is a single depth-first pass. Each node's `lower` call lowers
//! its children, merges their fragments, and returns its own; the
//! top-level entry point is [`ast::CompUnit::lower`], which returns an
//! [`mcc_ir::Program`].

pub mod ast;
pub mod symbols;

mod lower;

pub use symbols::SymbolTable;
