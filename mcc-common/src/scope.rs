//! Lexical scope paths
//!
//! A scope path pins a lexical block to its position in a function's
//! nesting tree. The parser computes one path per block and stamps it onto
//! every identifier reference and definition, so lowering never has to
//! recompute nesting and the symbol table can mangle names without keeping
//! a scope stack of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a lexical block in the nesting tree.
///
/// The path lists the sibling index of each enclosing block, outermost
/// first; a function's outermost block is the empty path. Sibling indices
/// make paths of distinct blocks distinct, so a closed block's
/// declarations can never be reached again through name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScopePath {
    segments: Vec<u32>,
}

impl ScopePath {
    /// Path of a function's outermost block.
    pub fn root() -> Self {
        ScopePath::default()
    }

    /// Path of the `index`-th block nested directly inside `self`.
    pub fn child(&self, index: u32) -> Self {
        let mut segments = self.segments.clone();
        segments.push(index);
        ScopePath { segments }
    }

    /// Path of the enclosing block, or `None` at the root.
    pub fn parent(&self) -> Option<ScopePath> {
        if self.segments.is_empty() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(ScopePath { segments })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nesting depth; the root block is depth 0.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Mangling suffix for names declared in this scope: empty at the
    /// root, `.i.j...` for nested blocks. Root-scope names stay unsuffixed
    /// in the flat IR namespace. The separator is not a legal identifier
    /// character, so a suffixed spelling can never equal the spelling of a
    /// different surface name in a different scope.
    pub fn suffix(&self) -> String {
        self.segments.iter().map(|i| format!(".{i}")).collect()
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
