//! Function and program assembly

use crate::ast::{CompUnit, FunctionDef};
use crate::symbols::SymbolTable;
use log::debug;
use mcc_common::{LowerError, ScopePath};
use mcc_ir::{FuncDef, Program, Type};

impl FunctionDef {
    /// Lower this function into its IR definition.
    ///
    /// The function's own symbol is declared at the root scope before the
    /// body, then the body's fragment is sealed into the block sequence.
    /// No implicit terminator is synthesized; a body that can fall off
    /// the end surfaces `MissingTerminator`.
    pub fn lower(&self, symbols: &mut SymbolTable) -> Result<FuncDef, LowerError> {
        debug!("lowering function `{}`", self.name);
        let return_type = self.return_type.ir_type();
        symbols.declare(
            &self.name,
            &ScopePath::root(),
            Type::function(Vec::new(), return_type.clone()),
            None,
        )?;
        let fragment = self.body.lower(symbols)?;
        let blocks = fragment.seal(&self.name)?;
        Ok(FuncDef::new(&self.name, Vec::new(), return_type, blocks))
    }
}

impl CompUnit {
    /// Lower the whole unit.
    ///
    /// Each invocation owns a fresh symbol table and fresh-name counter;
    /// lowering the same unit twice yields identical programs.
    pub fn lower(&self) -> Result<Program, LowerError> {
        let mut symbols = SymbolTable::new();
        let mut program = Program::new();
        program.add_function(self.func.lower(&mut symbols)?);
        Ok(program)
    }
}
