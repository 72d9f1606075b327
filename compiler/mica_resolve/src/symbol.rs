//! Symbols and the symbol table.

use mica_ir::{AstArena, DeclId, DeclKind, Name, Span, SymbolId};
use rustc_hash::FxHashMap;

use crate::error::ResolveError;

/// Resolution state of a symbol.
///
/// `Unordered` is the creation state. `Ordering` marks a symbol on the
/// active resolution path; revisiting one is a cycle. `Ordered` is terminal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymState {
    Unordered,
    Ordering,
    Ordered,
}

/// What a symbol stands for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymKind {
    /// A builtin name, registered before any user declaration; born
    /// `Ordered` and never appended to the output.
    Builtin,
    /// A declaration-backed name.
    Decl,
    /// An enum item. Bound to the owning enum's declaration, not a node of
    /// its own: ordering the item means ordering the enum.
    EnumConst,
}

/// The resolver's bookkeeping record for one declared name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
    pub name: Name,
    pub kind: SymKind,
    pub state: SymState,
    /// The backing declaration; `DeclId::INVALID` for builtins. For an
    /// `EnumConst` this is the owning enum's declaration.
    pub decl: DeclId,
}

/// Maps names to symbols for one compilation pass.
///
/// Symbols live in a `Vec` in registration order - the deterministic
/// iteration order the driver relies on - with a hash index by name on the
/// side. Names are unique within the pass; enum items share the flat
/// top-level namespace.
#[derive(Default)]
pub struct SymbolTable {
    syms: Vec<Symbol>,
    by_name: FxHashMap<Name, SymbolId>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, sym: Symbol, span: Span) -> Result<SymbolId, ResolveError> {
        if self.by_name.contains_key(&sym.name) {
            return Err(ResolveError::DuplicateName {
                name: sym.name,
                span,
            });
        }
        let raw = u32::try_from(self.syms.len())
            .unwrap_or_else(|_| panic!("symbol table overflow: too many symbols"));
        let id = SymbolId::new(raw);
        self.by_name.insert(sym.name, id);
        self.syms.push(sym);
        Ok(id)
    }

    /// Register a builtin name, born `Ordered`.
    ///
    /// Builtins must be registered before any user declaration; a collision
    /// is a `DuplicateName` error like any other.
    pub fn register_builtin(&mut self, name: Name) -> Result<SymbolId, ResolveError> {
        self.insert(
            Symbol {
                name,
                kind: SymKind::Builtin,
                state: SymState::Ordered,
                decl: DeclId::INVALID,
            },
            Span::DUMMY,
        )
    }

    /// Register a declaration, born `Unordered`, and write the declaration's
    /// symbol back-reference.
    ///
    /// An enum declaration additionally registers one `EnumConst` symbol per
    /// item, each bound to the owning enum declaration.
    pub fn register_decl(
        &mut self,
        ast: &mut AstArena,
        id: DeclId,
    ) -> Result<SymbolId, ResolveError> {
        let decl = *ast.decl(id);
        let sym_id = self.insert(
            Symbol {
                name: decl.name,
                kind: SymKind::Decl,
                state: SymState::Unordered,
                decl: id,
            },
            decl.span,
        )?;
        ast.set_decl_sym(id, sym_id);

        if let DeclKind::Enum { items } = decl.kind {
            for item in ast.enum_items(items) {
                self.insert(
                    Symbol {
                        name: item.name,
                        kind: SymKind::EnumConst,
                        state: SymState::Unordered,
                        decl: id,
                    },
                    item.span,
                )?;
            }
        }
        Ok(sym_id)
    }

    /// Look up a symbol by name. Pure; no side effect.
    pub fn lookup(&self, name: Name) -> Option<SymbolId> {
        self.by_name.get(&name).copied()
    }

    /// Get a symbol by id.
    #[inline]
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.syms[id.index()]
    }

    /// Transition a symbol's resolution state.
    pub(crate) fn set_state(&mut self, id: SymbolId, state: SymState) {
        self.syms[id.index()].state = state;
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.syms.len()
    }

    /// Check if no symbols are registered.
    pub fn is_empty(&self) -> bool {
        self.syms.is_empty()
    }

    /// Iterate symbols in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.syms.iter()
    }
}
