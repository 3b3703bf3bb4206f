//! Expression AST nodes
//!
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::{BinaryOp, UnaryOp};
use mcc_common::ScopePath;
use serde::{Deserialize, Serialize};

/// A reference to a surface name, annotated with the scope it appears in.
///
/// The scope path is attached by the parser; lowering uses it to resolve
/// the reference without recomputing lexical nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub scope: ScopePath,
}

impl Identifier {
    pub fn new(name: impl Into<String>, scope: ScopePath) -> Self {
        Identifier {
            name: name.into(),
            scope,
        }
    }
}

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Binary operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },

    /// Unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// Integer literal
    Number(i32),

    /// Identifier reference
    Identifier(Identifier),
}

impl Expression {
    /// Binary node over boxed children.
    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Unary node over a boxed operand.
    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }
}
