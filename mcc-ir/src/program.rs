//! Whole-program container

use crate::function::FuncDef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lowered compilation unit: functions in definition order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub funcs: Vec<FuncDef>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn add_function(&mut self, func: FuncDef) {
        self.funcs.push(func);
    }

    pub fn get_function(&self, name: &str) -> Option<&FuncDef> {
        self.funcs.iter().find(|func| func.name == name)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, func) in self.funcs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{func}")?;
        }
        Ok(())
    }
}
