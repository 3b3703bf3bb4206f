//! Statement lowering

use crate::ast::{Block, Declaration, Expression, Identifier, Statement, TypeSpec, VarDef};
use crate::symbols::SymbolTable;
use log::{debug, trace};
use mcc_common::LowerError;
use mcc_ir::{Fragment, Instruction, RValue, Type, Value};

impl Statement {
    /// Lower this statement into a fragment.
    pub fn lower(&self, symbols: &mut SymbolTable) -> Result<Fragment, LowerError> {
        debug!("lowering {} statement", self.kind());
        match self {
            // The expression's value is discarded; its instructions are
            // kept for their side effects.
            Statement::Expr(expr) => expr.lower(symbols),
            Statement::Declaration(decl) => decl.lower(symbols),
            Statement::Assign { target, value } => lower_assign(target, value, symbols),
            Statement::Return(value) => lower_return(value.as_ref(), symbols),
            Statement::If {
                condition,
                then_stmt,
                else_stmt,
            } => lower_if(condition, then_stmt, else_stmt.as_deref(), symbols),
            Statement::Block(block) => block.lower(symbols),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Statement::Expr(_) => "expression",
            Statement::Declaration(_) => "declaration",
            Statement::Assign { .. } => "assignment",
            Statement::Return(_) => "return",
            Statement::If { .. } => "if",
            Statement::Block(_) => "block",
        }
    }
}

impl Block {
    /// Lower the statements in order, merging their fragments.
    ///
    /// No scope push or pop happens here: declarations inside carry this
    /// block's own scope path, which nothing after the closing brace can
    /// name again.
    pub fn lower(&self, symbols: &mut SymbolTable) -> Result<Fragment, LowerError> {
        let mut fragment = Fragment::new();
        for stmt in &self.stmts {
            fragment.merge(stmt.lower(symbols)?);
        }
        Ok(fragment)
    }
}

impl Declaration {
    pub fn lower(&self, symbols: &mut SymbolTable) -> Result<Fragment, LowerError> {
        let mut fragment = Fragment::new();
        for def in &self.defs {
            if self.is_const {
                lower_const_def(def, self.decl_type, symbols)?;
            } else {
                fragment.merge(lower_var_def(def, self.decl_type, symbols)?);
            }
        }
        Ok(fragment)
    }
}

/// Define a constant. Constants never occupy storage; success only
/// records the folded value in the symbol table.
fn lower_const_def(
    def: &VarDef,
    decl_type: TypeSpec,
    symbols: &mut SymbolTable,
) -> Result<(), LowerError> {
    let ident = &def.ident;
    // Redeclaration outranks initializer problems.
    if symbols.is_declared(&ident.name, &ident.scope) {
        return Err(LowerError::redeclaration(&ident.name));
    }
    let init = def
        .init
        .as_ref()
        .ok_or_else(|| LowerError::missing_initializer(&ident.name))?;
    let value = init
        .lower(symbols)?
        .value()
        .as_const()
        .ok_or_else(|| LowerError::non_const_initializer(&ident.name))?;
    symbols.declare(&ident.name, &ident.scope, decl_type.ir_type(), Some(value))?;
    trace!("const `{}` folded to {value}", ident.name);
    Ok(())
}

/// Define a mutable variable: allocate its slot and store the
/// initializer's value, if any.
fn lower_var_def(
    def: &VarDef,
    decl_type: TypeSpec,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    let ident = &def.ident;
    let ty = decl_type.ir_type();
    let slot = symbols.declare(
        &ident.name,
        &ident.scope,
        Type::pointer_to(ty.clone()),
        None,
    )?;

    let mut fragment = Fragment::new();
    fragment.append(Instruction::SymbolDef {
        target: slot.clone(),
        value: RValue::MemoryDecl { ty },
    });
    if let Some(init) = &def.init {
        let init_fragment = init.lower(symbols)?;
        let value = init_fragment.value().clone();
        fragment.merge(init_fragment);
        fragment.append(Instruction::Store {
            value,
            dest: Value::Named(slot),
        });
    }
    Ok(fragment)
}

fn lower_assign(
    target: &Identifier,
    value: &Expression,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    // The target must name a mutable slot before the value is lowered.
    let slot = match symbols.resolve(&target.name, &target.scope)? {
        Value::Named(slot) => slot,
        Value::Constant(_) => return Err(LowerError::assign_to_const(&target.name)),
    };
    let mut fragment = value.lower(symbols)?;
    let stored = fragment.value().clone();
    fragment.append(Instruction::Store {
        value: stored,
        dest: Value::Named(slot),
    });
    Ok(fragment)
}

fn lower_return(
    value: Option<&Expression>,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    let mut fragment = Fragment::new();
    let returned = match value {
        Some(expr) => {
            let expr_fragment = expr.lower(symbols)?;
            let returned = expr_fragment.value().clone();
            fragment.merge(expr_fragment);
            Some(returned)
        }
        None => None,
    };
    fragment.append(Instruction::Return(returned));
    Ok(fragment)
}

fn lower_if(
    condition: &Expression,
    then_stmt: &Statement,
    else_stmt: Option<&Statement>,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    let mut fragment = condition.lower(symbols)?;
    let cond = fragment.value().clone();

    // A constant condition selects its branch at lowering time; the dead
    // branch is neither lowered nor checked.
    if let Some(taken) = cond.as_const() {
        trace!("constant condition {taken}, keeping one branch");
        let branch = match (taken != 0, else_stmt) {
            (true, _) => then_stmt.lower(symbols)?,
            (false, Some(else_stmt)) => else_stmt.lower(symbols)?,
            (false, None) => Fragment::new(),
        };
        fragment.merge(branch);
        return Ok(fragment);
    }

    let then_label = symbols.fresh_label("then");
    match else_stmt {
        Some(else_stmt) => {
            let else_label = symbols.fresh_label("else");
            let end_label = symbols.fresh_label("end");
            fragment.finalize_block(
                then_label.clone(),
                Instruction::Branch {
                    cond,
                    then_label,
                    else_label: else_label.clone(),
                },
            );
            fragment.merge(then_stmt.lower(symbols)?);
            fragment.finalize_block(
                else_label,
                Instruction::Jump {
                    target: end_label.clone(),
                },
            );
            fragment.merge(else_stmt.lower(symbols)?);
            fragment.finalize_block(
                end_label.clone(),
                Instruction::Jump { target: end_label },
            );
        }
        None => {
            let end_label = symbols.fresh_label("end");
            fragment.finalize_block(
                then_label.clone(),
                Instruction::Branch {
                    cond,
                    then_label,
                    else_label: end_label.clone(),
                },
            );
            fragment.merge(then_stmt.lower(symbols)?);
            fragment.finalize_block(
                end_label.clone(),
                Instruction::Jump { target: end_label },
            );
        }
    }
    Ok(fragment)
}
