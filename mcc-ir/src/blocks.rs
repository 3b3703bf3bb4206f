//! Labels and basic blocks

use crate::instructions::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label naming a basic block.
///
/// Labels share the `%` namespace with temporaries and are numbered by
/// the same fresh-name counter, so the two can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label(name.into())
    }

    /// Label of a function's first block.
    pub fn entry() -> Self {
        Label::new("%entry")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A maximal straight-line run of instructions.
///
/// Invariant: no terminator appears except as the single last entry. The
/// fragment assembly in [`crate::Fragment`] maintains this by trimming
/// anything lowered past a terminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub label: Label,
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(label: Label) -> Self {
        BasicBlock {
            label,
            instructions: Vec::new(),
        }
    }

    pub fn with_instructions(label: Label, instructions: Vec<Instruction>) -> Self {
        BasicBlock {
            label,
            instructions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Whether the block ends in a control-transfer instruction.
    pub fn has_terminator(&self) -> bool {
        self.instructions
            .last()
            .map_or(false, Instruction::is_terminator)
    }

    /// The terminating instruction, once the block is complete.
    pub fn terminator(&self) -> Option<&Instruction> {
        self.instructions.last().filter(|i| i.is_terminator())
    }
}

impl fmt::Display for BasicBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label)?;
        for instruction in &self.instructions {
            writeln!(f, "  {instruction}")?;
        }
        Ok(())
    }
}
