//! Operator definitions
//!
//! This module defines the binary and unary operators of the surface
//! language and their mapping onto IR operations.

use mcc_ir::IrBinaryOp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add, Sub, Mul, Div, Mod,

    // Comparison
    Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual,

    // Logical
    LogicalAnd, LogicalOr,
}

impl BinaryOp {
    /// The IR operation this operator maps onto directly.
    ///
    /// The logical operators have no direct counterpart: they decompose
    /// during lowering into `ne 0` coercions combined with bitwise
    /// and/or.
    pub fn ir_op(self) -> Option<IrBinaryOp> {
        let op = match self {
            BinaryOp::Add => IrBinaryOp::Add,
            BinaryOp::Sub => IrBinaryOp::Sub,
            BinaryOp::Mul => IrBinaryOp::Mul,
            BinaryOp::Div => IrBinaryOp::Div,
            BinaryOp::Mod => IrBinaryOp::Mod,
            BinaryOp::Equal => IrBinaryOp::Eq,
            BinaryOp::NotEqual => IrBinaryOp::Ne,
            BinaryOp::Less => IrBinaryOp::Lt,
            BinaryOp::Greater => IrBinaryOp::Gt,
            BinaryOp::LessEqual => IrBinaryOp::Le,
            BinaryOp::GreaterEqual => IrBinaryOp::Ge,
            BinaryOp::LogicalAnd | BinaryOp::LogicalOr => return None,
        };
        Some(op)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        };
        write!(f, "{op_str}")
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    LogicalNot,
}

impl UnaryOp {
    /// The binary IR operation realizing this operator against a zero
    /// left operand: `+x` is `0 + x`, `-x` is `0 - x`, `!x` is `0 == x`.
    pub fn ir_op(self) -> IrBinaryOp {
        match self {
            UnaryOp::Plus => IrBinaryOp::Add,
            UnaryOp::Minus => IrBinaryOp::Sub,
            UnaryOp::LogicalNot => IrBinaryOp::Eq,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::LogicalNot => "!",
        };
        write!(f, "{op_str}")
    }
}
