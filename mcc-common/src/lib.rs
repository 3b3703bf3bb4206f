//! Mini-C Compiler - Common Types and Utilities
//!
//! This crate contains the shared vocabulary of the mcc middle-end: the
//! lowering error type and the lexical scope paths the parser attaches to
//! identifier nodes.

pub mod error;
pub mod scope;

pub use error::LowerError;
pub use scope::ScopePath;
