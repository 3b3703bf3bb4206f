//! Binary operations and constant folding
//!
//! `And` and `Or` are bitwise: the surface logical operators are
//! decomposed into `ne 0` coercions plus these before they reach the IR.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operations of the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrBinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison, yielding 0 or 1
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    // Bitwise
    And,
    Or,
}

impl IrBinaryOp {
    /// Evaluate the operation on two known constants with fixed-width
    /// 32-bit two's-complement semantics.
    ///
    /// Division and remainder refuse a zero divisor: that is a runtime
    /// concern, and the caller falls back to emitting the instruction.
    pub fn fold(self, lhs: i32, rhs: i32) -> Option<i32> {
        let result = match self {
            IrBinaryOp::Add => lhs.wrapping_add(rhs),
            IrBinaryOp::Sub => lhs.wrapping_sub(rhs),
            IrBinaryOp::Mul => lhs.wrapping_mul(rhs),
            IrBinaryOp::Div => {
                if rhs == 0 {
                    return None;
                }
                lhs.wrapping_div(rhs)
            }
            IrBinaryOp::Mod => {
                if rhs == 0 {
                    return None;
                }
                lhs.wrapping_rem(rhs)
            }
            IrBinaryOp::Eq => (lhs == rhs) as i32,
            IrBinaryOp::Ne => (lhs != rhs) as i32,
            IrBinaryOp::Lt => (lhs < rhs) as i32,
            IrBinaryOp::Gt => (lhs > rhs) as i32,
            IrBinaryOp::Le => (lhs <= rhs) as i32,
            IrBinaryOp::Ge => (lhs >= rhs) as i32,
            IrBinaryOp::And => lhs & rhs,
            IrBinaryOp::Or => lhs | rhs,
        };
        Some(result)
    }
}

impl fmt::Display for IrBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            IrBinaryOp::Add => "add",
            IrBinaryOp::Sub => "sub",
            IrBinaryOp::Mul => "mul",
            IrBinaryOp::Div => "div",
            IrBinaryOp::Mod => "mod",
            IrBinaryOp::Eq => "eq",
            IrBinaryOp::Ne => "ne",
            IrBinaryOp::Lt => "lt",
            IrBinaryOp::Gt => "gt",
            IrBinaryOp::Le => "le",
            IrBinaryOp::Ge => "ge",
            IrBinaryOp::And => "and",
            IrBinaryOp::Or => "or",
        };
        write!(f, "{op_str}")
    }
}
