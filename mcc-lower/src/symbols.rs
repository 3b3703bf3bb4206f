//! Scoped symbol resolution
//!
//! The table flattens lexical scoping at declaration time: every entry is
//! keyed by its mangled name, and resolution walks the scope chain by
//! re-mangling the base name per ancestor instead of keeping nested
//! tables. Paths of distinct blocks are distinct, so entries of a closed
//! block are unreachable afterwards and never need removal.

use log::trace;
use mcc_common::{LowerError, ScopePath};
use mcc_ir::{Label, NamedRef, Type, Value};
use std::collections::HashMap;

/// Symbol table and fresh-name allocator of one lowering run.
///
/// The monotonic counter behind temporaries and labels is owned here, so
/// separate runs never share numbering and a single run never reuses a
/// generated name.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    values: HashMap<String, NamedRef>,
    next_name: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Declare `base_name` in `scope`.
    ///
    /// Passing `Some(value)` declares a constant with its folded value;
    /// `None` declares a reference of type `ty`. Redeclaring a name
    /// applies per scope; shadowing an outer scope is legal.
    pub fn declare(
        &mut self,
        base_name: &str,
        scope: &ScopePath,
        ty: Type,
        const_value: Option<i32>,
    ) -> Result<NamedRef, LowerError> {
        let name = mangle(base_name, scope);
        if self.values.contains_key(&name) {
            return Err(LowerError::redeclaration(base_name));
        }
        trace!("declare `{base_name}` in {scope} as {name}");
        let named = NamedRef {
            name: name.clone(),
            ty,
            const_value,
        };
        self.values.insert(name, named.clone());
        Ok(named)
    }

    /// Resolve `base_name` as seen from `scope`, innermost scope first.
    ///
    /// A constant entry resolves to its folded value, a slot entry to its
    /// named reference.
    pub fn resolve(&self, base_name: &str, scope: &ScopePath) -> Result<Value, LowerError> {
        let mut current = Some(scope.clone());
        while let Some(scope) = current {
            if let Some(named) = self.values.get(&mangle(base_name, &scope)) {
                let value = match named.const_value {
                    Some(folded) => Value::Constant(folded),
                    None => Value::Named(named.clone()),
                };
                return Ok(value);
            }
            current = scope.parent();
        }
        Err(LowerError::undeclared(base_name))
    }

    /// Whether `base_name` is declared in exactly `scope`, ignoring
    /// enclosing scopes.
    pub fn is_declared(&self, base_name: &str, scope: &ScopePath) -> bool {
        self.values.contains_key(&mangle(base_name, scope))
    }

    /// Wrap a literal as a constant value. Pure; the table is untouched.
    pub fn new_constant(&self, value: i32) -> Value {
        Value::Constant(value)
    }

    /// Fresh `%N` temporary of type `ty`.
    pub fn fresh_temp(&mut self, ty: Type) -> NamedRef {
        let id = self.bump();
        NamedRef::new(format!("%{id}"), ty)
    }

    /// Fresh `%hint_N` block label.
    ///
    /// Labels draw from the same counter as temporaries, so the two can
    /// never collide within a run.
    pub fn fresh_label(&mut self, hint: &str) -> Label {
        let id = self.bump();
        Label::new(format!("%{hint}_{id}"))
    }

    fn bump(&mut self) -> u32 {
        let id = self.next_name;
        self.next_name += 1;
        id
    }
}

/// Flat spelling of `base_name` declared in `scope`: `@name` at the root,
/// `@name.i.j...` inside nested blocks. The `.` separator cannot appear in
/// a surface identifier, so distinct declarations always mangle to
/// distinct spellings; a `_` separator would make `x_0` at the root and
/// `x` in the first nested block collide.
fn mangle(base_name: &str, scope: &ScopePath) -> String {
    format!("@{base_name}{}", scope.suffix())
}
