//! Statement AST nodes
//!
//! This module defines statement nodes, declarations, and function
//! definitions.

use super::expressions::{Expression, Identifier};
use mcc_ir::Type;
use serde::{Deserialize, Serialize};

/// Declared type of a variable or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSpec {
    Int,
}

impl TypeSpec {
    /// The IR type this specifier denotes.
    pub fn ir_type(self) -> Type {
        match self {
            TypeSpec::Int => Type::Int32,
        }
    }
}

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Expression statement, evaluated for side effects
    Expr(Expression),

    /// Variable or constant declaration
    Declaration(Declaration),

    /// Assignment to a declared variable
    Assign {
        target: Identifier,
        value: Expression,
    },

    /// Return statement
    Return(Option<Expression>),

    /// If statement
    If {
        condition: Expression,
        then_stmt: Box<Statement>,
        else_stmt: Option<Box<Statement>>,
    },

    /// Compound statement (block)
    Block(Block),
}

/// One variable introduced by a declaration statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDef {
    pub ident: Identifier,
    pub init: Option<Expression>,
}

/// Variable declaration; one statement may define several variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub decl_type: TypeSpec,
    pub is_const: bool,
    pub defs: Vec<VarDef>,
}

/// A braced statement list.
///
/// The scope a block introduces is identified by the scope path its
/// declarations and references carry, not by the block node itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub stmts: Vec<Statement>,
}

impl Block {
    pub fn new(stmts: Vec<Statement>) -> Self {
        Block { stmts }
    }
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub return_type: TypeSpec,
    pub name: String,
    pub body: Block,
}

/// Top-level compilation unit, currently a single function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompUnit {
    pub func: FunctionDef,
}
