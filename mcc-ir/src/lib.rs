//! Mini-C Compiler - Intermediate Representation
//!
//! A typed, register-based IR of basic blocks. The lowering pass produces
//! it from the AST; instruction selection consumes it read-only.
//!
//! ## Architecture
//!
//! The crate is structured as follows:
//! - `types` - Type system
//! - `values` - Value representations
//! - `ops` - Binary operations and constant folding
//! - `instructions` - IR instructions
//! - `blocks` - Labels and basic blocks
//! - `function` - Function definitions
//! - `program` - Whole-program container
//! - `fragment` - Block accumulation during lowering

pub use self::blocks::{BasicBlock, Label};
pub use self::fragment::Fragment;
pub use self::function::FuncDef;
pub use self::instructions::{Instruction, RValue};
pub use self::ops::IrBinaryOp;
pub use self::program::Program;
pub use self::types::Type;
pub use self::values::{NamedRef, Value};

mod types;
mod values;
mod ops;
mod instructions;
mod blocks;
mod function;
mod program;
mod fragment;

#[cfg(test)]
mod tests;
