//! Block accumulation during lowering
//!
//! Lowering produces [`Fragment`]s: partially built instruction runs plus
//! the value of the expression just lowered. Fragments merge upward along
//! the AST until a function body is complete, at which point [`Fragment::seal`]
//! hands back the finished basic blocks.
//!
//! A fragment's first block carries no label of its own: it continues
//! whatever block the fragment is merged into. Only `seal` pins the first
//! block of a function body to `%entry`.

use crate::blocks::{BasicBlock, Label};
use crate::instructions::Instruction;
use crate::values::Value;
use log::trace;
use mcc_common::LowerError;

/// A block closed inside a fragment. The label is `None` for the leading
/// block, which continues the merge site.
#[derive(Debug, Clone, PartialEq)]
struct ClosedBlock {
    label: Option<Label>,
    instructions: Vec<Instruction>,
}

/// A partially built instruction sequence plus the value of the most
/// recently lowered expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    closed: Vec<ClosedBlock>,
    /// Label the open block will take when closed; `None` while the
    /// fragment still continues its merge site.
    open_label: Option<Label>,
    pending: Vec<Instruction>,
    last_value: Option<Value>,
}

impl Fragment {
    pub fn new() -> Self {
        Fragment::default()
    }

    /// Fragment with no instructions, carrying `value`.
    pub fn with_value(value: Value) -> Self {
        Fragment {
            last_value: Some(value),
            ..Fragment::default()
        }
    }

    /// Append one instruction to the open block.
    ///
    /// Appending past a terminator is permitted; the dead tail is trimmed
    /// when the block is closed.
    pub fn append(&mut self, instruction: Instruction) {
        self.pending.push(instruction);
    }

    pub fn set_value(&mut self, value: Value) {
        self.last_value = Some(value);
    }

    /// Value of the most recently lowered expression, if any.
    pub fn last_value(&self) -> Option<&Value> {
        self.last_value.as_ref()
    }

    /// Value of the most recently lowered expression.
    ///
    /// Expression lowering always leaves one behind; calling this on a
    /// fragment built purely from statements is a bug in the caller.
    pub fn value(&self) -> &Value {
        self.last_value
            .as_ref()
            .expect("fragment carries no expression value")
    }

    /// Instructions of the open block.
    pub fn pending(&self) -> &[Instruction] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.pending.is_empty()
    }

    /// Concatenate `other` onto this fragment and adopt its value.
    ///
    /// When `other` contains closed blocks, its leading block continues
    /// this fragment's open block: the two instruction runs are joined and
    /// closed together, the other's remaining blocks follow, and the
    /// other's open block becomes this fragment's. This is what lets a
    /// nested `if` inside a branch compose transparently.
    pub fn merge(&mut self, other: Fragment) {
        let Fragment {
            mut closed,
            open_label,
            pending,
            last_value,
        } = other;

        if closed.is_empty() {
            self.pending.extend(pending);
        } else {
            let head = closed.remove(0);
            debug_assert!(head.label.is_none(), "fragment head must be unlabeled");
            let mut instructions = std::mem::take(&mut self.pending);
            instructions.extend(head.instructions);
            self.close(instructions);
            self.closed.extend(closed);
            self.open_label = open_label;
            self.pending = pending;
        }
        self.last_value = last_value;
    }

    /// Close the open block with `terminator` and start an empty one that
    /// will take `next_label`.
    ///
    /// The terminator is not appended when the run already ends in one: a
    /// branch whose last statement was a `return` must not also jump.
    pub fn finalize_block(&mut self, next_label: Label, terminator: Instruction) {
        let mut instructions = std::mem::take(&mut self.pending);
        truncate_at_terminator(&mut instructions);
        if !ends_terminated(&instructions) {
            instructions.push(terminator);
        }
        trace!(
            "finalized block with {} instruction(s), continuing at {next_label}",
            instructions.len()
        );
        self.closed.push(ClosedBlock {
            label: self.open_label.replace(next_label),
            instructions,
        });
    }

    /// Finish the fragment into the block sequence of one function body.
    ///
    /// The leading block takes the `%entry` label. A trailing open block
    /// must end in a terminator unless it is empty and no branch or jump
    /// targets it, in which case it is unreachable and dropped.
    pub fn seal(mut self, function: &str) -> Result<Vec<BasicBlock>, LowerError> {
        let mut instructions = std::mem::take(&mut self.pending);
        truncate_at_terminator(&mut instructions);

        if ends_terminated(&instructions) {
            let label = self.open_label.take();
            self.closed.push(ClosedBlock {
                label,
                instructions,
            });
        } else if !instructions.is_empty() {
            return Err(LowerError::missing_terminator(function));
        } else {
            match self.open_label.take() {
                // Continuation left open after both branches returned:
                // nothing reaches it, so it simply disappears.
                Some(label) if !self.targets(&label) => {}
                _ => return Err(LowerError::missing_terminator(function)),
            }
        }

        trace!("sealed {} block(s) for `{function}`", self.closed.len());
        let blocks = self
            .closed
            .into_iter()
            .map(|block| {
                let label = block.label.unwrap_or_else(Label::entry);
                BasicBlock::with_instructions(label, block.instructions)
            })
            .collect();
        Ok(blocks)
    }

    // close an already-joined instruction run under the current open label
    fn close(&mut self, mut instructions: Vec<Instruction>) {
        truncate_at_terminator(&mut instructions);
        self.closed.push(ClosedBlock {
            label: self.open_label.take(),
            instructions,
        });
    }

    // whether any closed block transfers control to `label`
    fn targets(&self, label: &Label) -> bool {
        self.closed.iter().any(|block| {
            block.instructions.iter().any(|instruction| match instruction {
                Instruction::Branch {
                    then_label,
                    else_label,
                    ..
                } => then_label == label || else_label == label,
                Instruction::Jump { target } => target == label,
                _ => false,
            })
        })
    }
}

/// Drop everything after the first terminator; code lowered past a
/// `return` in the same block is dead.
fn truncate_at_terminator(instructions: &mut Vec<Instruction>) {
    if let Some(position) = instructions.iter().position(Instruction::is_terminator) {
        instructions.truncate(position + 1);
    }
}

fn ends_terminated(instructions: &[Instruction]) -> bool {
    instructions.last().map_or(false, Instruction::is_terminator)
}
