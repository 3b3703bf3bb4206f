//! Expression lowering
//!
//! Expressions lower bottom-up into value-carrying fragments. Folding is
//! decided before any instruction is appended: a fragment whose value is
//! constant carries no instructions at all, so a fold never has to
//! discard code after the fact and can never orphan a temporary that a
//! later instruction still references.

use crate::ast::{BinaryOp, Expression, Identifier, UnaryOp};
use crate::symbols::SymbolTable;
use log::trace;
use mcc_common::LowerError;
use mcc_ir::{Fragment, Instruction, IrBinaryOp, RValue, Type, Value};

impl Expression {
    /// Lower this expression into a fragment carrying its value.
    pub fn lower(&self, symbols: &mut SymbolTable) -> Result<Fragment, LowerError> {
        match self {
            Expression::Number(value) => Ok(Fragment::with_value(symbols.new_constant(*value))),
            Expression::Identifier(ident) => lower_identifier(ident, symbols),
            Expression::Unary { op, operand } => lower_unary(*op, operand, symbols),
            Expression::Binary { op, lhs, rhs } => lower_binary(*op, lhs, rhs, symbols),
        }
    }
}

/// Read a name: constants pass through without instructions, slots load
/// into a fresh temporary.
fn lower_identifier(
    ident: &Identifier,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    match symbols.resolve(&ident.name, &ident.scope)? {
        constant @ Value::Constant(_) => Ok(Fragment::with_value(constant)),
        Value::Named(slot) => {
            // Only slot references are loadable; the parser never puts a
            // function symbol in expression position.
            debug_assert!(
                slot.ty.is_pointer(),
                "loading non-pointer `{}`",
                slot.name
            );
            let loaded_ty = slot.ty.pointee().cloned().unwrap_or(Type::Int32);
            let loaded = symbols.fresh_temp(loaded_ty);
            let mut fragment = Fragment::new();
            fragment.append(Instruction::SymbolDef {
                target: loaded.clone(),
                value: RValue::Load {
                    source: Value::Named(slot),
                },
            });
            fragment.set_value(Value::Named(loaded));
            Ok(fragment)
        }
    }
}

fn lower_unary(
    op: UnaryOp,
    operand: &Expression,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    let mut fragment = operand.lower(symbols)?;
    let operand_value = fragment.value().clone();

    // Unary plus on a non-constant operand is a true no-op.
    if op == UnaryOp::Plus && !operand_value.is_const() {
        return Ok(fragment);
    }

    // Every unary operator is realized as a binary form with 0 on the
    // left: `-x` is `sub 0, x` and `!x` is `eq 0, x`.
    let zero = symbols.new_constant(0);
    let result = emit_binary(&mut fragment, op.ir_op(), zero, operand_value, symbols);
    fragment.set_value(result);
    Ok(fragment)
}

fn lower_binary(
    op: BinaryOp,
    lhs: &Expression,
    rhs: &Expression,
    symbols: &mut SymbolTable,
) -> Result<Fragment, LowerError> {
    // Left-to-right evaluation order is observable and preserved.
    let mut fragment = lhs.lower(symbols)?;
    let lhs_value = fragment.value().clone();
    let rhs_fragment = rhs.lower(symbols)?;
    let rhs_value = rhs_fragment.value().clone();
    fragment.merge(rhs_fragment);

    let result = match op.ir_op() {
        Some(ir_op) => emit_binary(&mut fragment, ir_op, lhs_value, rhs_value, symbols),
        None => {
            // `&&` and `||` do not short-circuit: both operands are
            // always evaluated, each coerced to 0/1, and the booleans
            // combined bitwise. Side effects of the right operand are
            // not skipped.
            let zero = symbols.new_constant(0);
            let lhs_bool =
                emit_binary(&mut fragment, IrBinaryOp::Ne, lhs_value, zero.clone(), symbols);
            let rhs_bool = emit_binary(&mut fragment, IrBinaryOp::Ne, rhs_value, zero, symbols);
            let combine = if op == BinaryOp::LogicalAnd {
                IrBinaryOp::And
            } else {
                IrBinaryOp::Or
            };
            emit_binary(&mut fragment, combine, lhs_bool, rhs_bool, symbols)
        }
    };
    fragment.set_value(result);
    Ok(fragment)
}

/// Emit `op lhs, rhs` into `fragment`, folding to a constant when both
/// operands are known.
///
/// A zero divisor refuses to fold; the instruction is emitted and the
/// fault is left to execution time.
fn emit_binary(
    fragment: &mut Fragment,
    op: IrBinaryOp,
    lhs: Value,
    rhs: Value,
    symbols: &mut SymbolTable,
) -> Value {
    if let (Some(a), Some(b)) = (lhs.as_const(), rhs.as_const()) {
        if let Some(folded) = op.fold(a, b) {
            trace!("folded {op} {a}, {b} -> {folded}");
            return symbols.new_constant(folded);
        }
    }
    let target = symbols.fresh_temp(Type::Int32);
    fragment.append(Instruction::SymbolDef {
        target: target.clone(),
        value: RValue::Binary { op, lhs, rhs },
    });
    Value::Named(target)
}
