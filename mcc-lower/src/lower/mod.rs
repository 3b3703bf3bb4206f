//! Lowering from AST to IR
//!
//! This module implements the `lower` operations of the AST nodes.
//! Expressions lower into value-carrying fragments, statements into
//! block-accumulator fragments; the function assembly seals the result
//! into basic blocks.

mod expressions;
mod statements;
mod function;
