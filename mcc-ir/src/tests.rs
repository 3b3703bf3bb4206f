//! Unit tests for the IR data model and fragment assembly

use super::*;
use mcc_common::LowerError;
use pretty_assertions::assert_eq;

fn temp(name: &str) -> NamedRef {
    NamedRef::new(name, Type::Int32)
}

fn slot(name: &str) -> NamedRef {
    NamedRef::new(name, Type::pointer_to(Type::Int32))
}

fn alloc(name: &str) -> Instruction {
    Instruction::SymbolDef {
        target: slot(name),
        value: RValue::MemoryDecl { ty: Type::Int32 },
    }
}

fn store(value: i32, dest: &str) -> Instruction {
    Instruction::Store {
        value: Value::Constant(value),
        dest: Value::Named(slot(dest)),
    }
}

fn ret(value: i32) -> Instruction {
    Instruction::Return(Some(Value::Constant(value)))
}

#[test]
fn test_types_display() {
    assert_eq!(Type::Int32.to_string(), "i32");
    assert_eq!(Type::pointer_to(Type::Int32).to_string(), "*i32");
    assert_eq!(Type::function(Vec::new(), Type::Int32).to_string(), "(): i32");
    assert_eq!(
        Type::function(vec![Type::Int32, Type::Int32], Type::Int32).to_string(),
        "(i32, i32): i32"
    );
}

#[test]
fn test_types_compare_structurally() {
    assert_eq!(Type::pointer_to(Type::Int32), Type::pointer_to(Type::Int32));
    assert_ne!(Type::Int32, Type::pointer_to(Type::Int32));

    let pointer = Type::pointer_to(Type::Int32);
    assert!(pointer.is_pointer());
    assert_eq!(pointer.pointee(), Some(&Type::Int32));
    assert_eq!(Type::Int32.pointee(), None);
}

#[test]
fn test_values() {
    let literal = Value::Constant(42);
    assert_eq!(literal.as_const(), Some(42));
    assert_eq!(literal.ty(), Type::Int32);
    assert_eq!(literal.to_string(), "42");
    assert_eq!(Value::Constant(-7).to_string(), "-7");

    let register = Value::from(temp("%0"));
    assert!(!register.is_const());
    assert_eq!(register.as_const(), None);
    assert_eq!(register.to_string(), "%0");

    let folded = Value::from(NamedRef::constant("@a", Type::Int32, 3));
    assert!(folded.is_const());
    assert_eq!(folded.as_const(), Some(3));
    assert_eq!(folded.to_string(), "@a");
}

#[test]
fn test_fold() {
    assert_eq!(IrBinaryOp::Add.fold(2, 3), Some(5));
    assert_eq!(IrBinaryOp::Sub.fold(2, 3), Some(-1));
    assert_eq!(IrBinaryOp::Mul.fold(4, 5), Some(20));
    assert_eq!(IrBinaryOp::Div.fold(7, 2), Some(3));
    assert_eq!(IrBinaryOp::Mod.fold(7, 2), Some(1));

    // Fixed-width wrap-around, not promotion to a wider integer
    assert_eq!(IrBinaryOp::Add.fold(i32::MAX, 1), Some(i32::MIN));
    assert_eq!(IrBinaryOp::Sub.fold(0, i32::MIN), Some(i32::MIN));
    assert_eq!(IrBinaryOp::Div.fold(i32::MIN, -1), Some(i32::MIN));

    // Zero divisors are a runtime concern
    assert_eq!(IrBinaryOp::Div.fold(1, 0), None);
    assert_eq!(IrBinaryOp::Mod.fold(1, 0), None);

    assert_eq!(IrBinaryOp::Eq.fold(3, 3), Some(1));
    assert_eq!(IrBinaryOp::Ne.fold(3, 3), Some(0));
    assert_eq!(IrBinaryOp::Lt.fold(5, 3), Some(0));
    assert_eq!(IrBinaryOp::Gt.fold(5, 3), Some(1));
    assert_eq!(IrBinaryOp::Le.fold(3, 3), Some(1));
    assert_eq!(IrBinaryOp::Ge.fold(2, 3), Some(0));

    assert_eq!(IrBinaryOp::And.fold(6, 3), Some(2));
    assert_eq!(IrBinaryOp::Or.fold(6, 3), Some(7));
    assert_eq!(IrBinaryOp::And.fold(1, 0), Some(0));
    assert_eq!(IrBinaryOp::Or.fold(1, 0), Some(1));
}

#[test]
fn test_instruction_display() {
    let add = Instruction::SymbolDef {
        target: temp("%0"),
        value: RValue::Binary {
            op: IrBinaryOp::Add,
            lhs: Value::Constant(1),
            rhs: Value::Constant(2),
        },
    };
    assert_eq!(add.to_string(), "%0 = add 1, 2");

    assert_eq!(alloc("@x").to_string(), "@x = alloc i32");

    let load = Instruction::SymbolDef {
        target: temp("%1"),
        value: RValue::Load {
            source: Value::Named(slot("@x")),
        },
    };
    assert_eq!(load.to_string(), "%1 = load @x");

    assert_eq!(store(5, "@x").to_string(), "store 5, @x");
    assert_eq!(Instruction::Return(None).to_string(), "ret");
    assert_eq!(ret(0).to_string(), "ret 0");

    let branch = Instruction::Branch {
        cond: Value::from(temp("%0")),
        then_label: Label::new("%then_1"),
        else_label: Label::new("%else_2"),
    };
    assert_eq!(branch.to_string(), "br %0, %then_1, %else_2");

    let jump = Instruction::Jump {
        target: Label::new("%end_3"),
    };
    assert_eq!(jump.to_string(), "jump %end_3");
}

#[test]
fn test_basic_block_terminators() {
    let empty = BasicBlock::new(Label::entry());
    assert!(empty.is_empty());
    assert!(!empty.has_terminator());
    assert_eq!(empty.terminator(), None);

    let open = BasicBlock::with_instructions(Label::entry(), vec![alloc("@x")]);
    assert!(!open.has_terminator());
    assert_eq!(open.terminator(), None);

    let done = BasicBlock::with_instructions(Label::entry(), vec![alloc("@x"), ret(0)]);
    assert!(done.has_terminator());
    assert_eq!(done.terminator(), Some(&ret(0)));
    assert_eq!(done.to_string(), "%entry:\n  @x = alloc i32\n  ret 0\n");
}

#[test]
fn test_fragment_straight_line() {
    let mut fragment = Fragment::new();
    assert!(fragment.is_empty());
    assert_eq!(fragment.last_value(), None);

    fragment.append(alloc("@x"));
    fragment.append(store(5, "@x"));
    fragment.append(ret(0));

    let blocks = fragment.seal("main").unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].label, Label::entry());
    assert_eq!(blocks[0].instructions.len(), 3);
}

#[test]
fn test_fragment_carries_value() {
    let fragment = Fragment::with_value(Value::Constant(7));
    assert!(fragment.is_empty());
    assert_eq!(fragment.value(), &Value::Constant(7));

    let mut fragment = Fragment::new();
    fragment.set_value(Value::from(temp("%0")));
    assert_eq!(fragment.last_value(), Some(&Value::from(temp("%0"))));
}

#[test]
fn test_fragment_trims_after_terminator() {
    let mut fragment = Fragment::new();
    fragment.append(ret(0));
    fragment.append(store(5, "@x"));
    fragment.append(ret(1));

    let blocks = fragment.seal("main").unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].instructions, vec![ret(0)]);
}

#[test]
fn test_fragment_missing_terminator() {
    let mut fragment = Fragment::new();
    fragment.append(alloc("@x"));
    assert_eq!(
        fragment.seal("main"),
        Err(LowerError::missing_terminator("main"))
    );

    // An empty body has no block to fall off from, but also no terminator.
    assert_eq!(
        Fragment::new().seal("main"),
        Err(LowerError::missing_terminator("main"))
    );

    // A targeted-but-empty trailing block is a real fall-off-the-end.
    let mut fragment = Fragment::new();
    let then_label = Label::new("%then_1");
    let end_label = Label::new("%end_2");
    fragment.finalize_block(
        then_label.clone(),
        Instruction::Branch {
            cond: Value::from(temp("%0")),
            then_label,
            else_label: end_label.clone(),
        },
    );
    fragment.finalize_block(
        end_label,
        Instruction::Jump {
            target: Label::new("%end_2"),
        },
    );
    assert_eq!(
        fragment.seal("main"),
        Err(LowerError::missing_terminator("main"))
    );
}

#[test]
fn test_fragment_branching() {
    let mut fragment = Fragment::new();
    let then_label = Label::new("%then_1");
    let else_label = Label::new("%else_2");
    let end_label = Label::new("%end_3");

    fragment.append(alloc("@x"));
    fragment.finalize_block(
        then_label.clone(),
        Instruction::Branch {
            cond: Value::from(temp("%0")),
            then_label: then_label.clone(),
            else_label: else_label.clone(),
        },
    );
    fragment.append(store(1, "@x"));
    fragment.finalize_block(
        else_label.clone(),
        Instruction::Jump {
            target: end_label.clone(),
        },
    );
    fragment.append(store(2, "@x"));
    fragment.finalize_block(
        end_label.clone(),
        Instruction::Jump {
            target: end_label.clone(),
        },
    );
    fragment.append(ret(0));

    let blocks = fragment.seal("main").unwrap();
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0].label, Label::entry());
    assert_eq!(blocks[1].label, then_label);
    assert_eq!(blocks[2].label, else_label);
    assert_eq!(blocks[3].label, end_label);

    assert!(matches!(
        blocks[0].terminator(),
        Some(Instruction::Branch { .. })
    ));
    assert!(matches!(
        blocks[1].terminator(),
        Some(Instruction::Jump { .. })
    ));
    assert_eq!(blocks[3].instructions, vec![ret(0)]);
}

#[test]
fn test_fragment_merge_adopts_value_and_blocks() {
    let mut outer = Fragment::new();
    outer.append(alloc("@x"));

    let mut inner = Fragment::new();
    inner.append(store(5, "@x"));
    inner.set_value(Value::Constant(5));
    outer.merge(inner);

    assert_eq!(outer.pending().len(), 2);
    assert_eq!(outer.last_value(), Some(&Value::Constant(5)));

    // A merged fragment's first block continues the open block; its later
    // blocks and open tail are adopted wholesale.
    let next_label = Label::new("%next_1");
    let mut inner = Fragment::new();
    inner.append(store(6, "@x"));
    inner.finalize_block(
        next_label.clone(),
        Instruction::Jump {
            target: next_label.clone(),
        },
    );
    inner.append(store(7, "@x"));
    outer.merge(inner);
    outer.append(ret(0));

    let blocks = outer.seal("main").unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].label, Label::entry());
    assert_eq!(blocks[0].instructions.len(), 4);
    assert_eq!(blocks[1].label, next_label);
    assert_eq!(blocks[1].instructions, vec![store(7, "@x"), ret(0)]);
}

#[test]
fn test_fragment_drops_unreachable_tail() {
    let mut fragment = Fragment::new();
    let then_label = Label::new("%then_1");
    let else_label = Label::new("%else_2");
    let end_label = Label::new("%end_3");

    fragment.finalize_block(
        then_label.clone(),
        Instruction::Branch {
            cond: Value::from(temp("%0")),
            then_label: then_label.clone(),
            else_label: else_label.clone(),
        },
    );
    fragment.append(ret(1));
    fragment.finalize_block(
        else_label.clone(),
        Instruction::Jump {
            target: end_label.clone(),
        },
    );
    fragment.append(ret(2));
    fragment.finalize_block(
        end_label,
        Instruction::Jump {
            target: Label::new("%end_3"),
        },
    );

    let blocks = fragment.seal("main").unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1].label, then_label);
    // The return already terminated each arm, so no jump was added and
    // nothing reaches the continuation.
    assert_eq!(blocks[1].instructions, vec![ret(1)]);
    assert_eq!(blocks[2].label, else_label);
    assert_eq!(blocks[2].instructions, vec![ret(2)]);
}

#[test]
fn test_function_display() {
    let body = BasicBlock::with_instructions(Label::entry(), vec![ret(0)]);
    let func = FuncDef::new("main", Vec::new(), Type::Int32, vec![body]);
    assert_eq!(func.to_string(), "fun @main(): i32 {\n%entry:\n  ret 0\n}");
    assert!(func.entry_block().is_some());
    assert_eq!(func.get_block(&Label::new("%nope")), None);
}

#[test]
fn test_program_json_round_trip() {
    let body = BasicBlock::with_instructions(
        Label::entry(),
        vec![
            alloc("@b"),
            store(6, "@b"),
            Instruction::SymbolDef {
                target: temp("%0"),
                value: RValue::Load {
                    source: Value::Named(slot("@b")),
                },
            },
            Instruction::Return(Some(Value::from(temp("%0")))),
        ],
    );
    let mut program = Program::new();
    program.add_function(FuncDef::new("main", Vec::new(), Type::Int32, vec![body]));

    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
    assert!(back.get_function("main").is_some());
}
