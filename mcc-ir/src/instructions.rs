//! IR instructions
//!
//! Every computed result is introduced by a `SymbolDef` binding a fresh
//! name; stores, returns, branches, and jumps stand alone. The `Display`
//! impls render the conventional textual forms used in logs and tests.

use crate::blocks::Label;
use crate::ops::IrBinaryOp;
use crate::types::Type;
use crate::values::{NamedRef, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Right-hand side of a `SymbolDef`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RValue {
    /// Arithmetic, comparison, or bitwise operation
    Binary {
        op: IrBinaryOp,
        lhs: Value,
        rhs: Value,
    },
    /// Read through a pointer-typed value
    Load { source: Value },
    /// Allocation of one local slot of the given type
    MemoryDecl { ty: Type },
}

/// A single IR instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Bind a fresh name to the result of an rvalue
    SymbolDef { target: NamedRef, value: RValue },
    /// Write a value through a pointer-typed destination
    Store { value: Value, dest: Value },
    /// Leave the function, optionally with a value
    Return(Option<Value>),
    /// Conditional transfer: nonzero condition goes to `then_label`
    Branch {
        cond: Value,
        then_label: Label,
        else_label: Label,
    },
    /// Unconditional transfer
    Jump { target: Label },
}

impl Instruction {
    /// Whether this instruction ends a basic block.
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            Instruction::Return(_) | Instruction::Branch { .. } | Instruction::Jump { .. }
        )
    }
}

impl fmt::Display for RValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RValue::Binary { op, lhs, rhs } => write!(f, "{op} {lhs}, {rhs}"),
            RValue::Load { source } => write!(f, "load {source}"),
            RValue::MemoryDecl { ty } => write!(f, "alloc {ty}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::SymbolDef { target, value } => write!(f, "{target} = {value}"),
            Instruction::Store { value, dest } => write!(f, "store {value}, {dest}"),
            Instruction::Return(None) => write!(f, "ret"),
            Instruction::Return(Some(value)) => write!(f, "ret {value}"),
            Instruction::Branch {
                cond,
                then_label,
                else_label,
            } => write!(f, "br {cond}, {then_label}, {else_label}"),
            Instruction::Jump { target } => write!(f, "jump {target}"),
        }
    }
}
