//! Function definitions

use crate::blocks::{BasicBlock, Label};
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lowered function: labeled blocks in layout order, entry first.
///
/// The parameter list is carried for forward compatibility; the current
/// source language only produces empty ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<(String, Type)>,
    pub return_type: Type,
    pub blocks: Vec<BasicBlock>,
}

impl FuncDef {
    pub fn new(
        name: impl Into<String>,
        params: Vec<(String, Type)>,
        return_type: Type,
        blocks: Vec<BasicBlock>,
    ) -> Self {
        FuncDef {
            name: name.into(),
            params,
            return_type,
            blocks,
        }
    }

    pub fn entry_block(&self) -> Option<&BasicBlock> {
        self.blocks.first()
    }

    pub fn get_block(&self, label: &Label) -> Option<&BasicBlock> {
        self.blocks.iter().find(|block| &block.label == label)
    }
}

impl fmt::Display for FuncDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun @{}(", self.name)?;
        for (i, (name, ty)) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {ty}")?;
        }
        writeln!(f, "): {} {{", self.return_type)?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{block}")?;
        }
        write!(f, "}}")
    }
}
