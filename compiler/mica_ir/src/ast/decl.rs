//! Top-level declarations.

use std::fmt;

use super::ranges::{
    AggregateItemRange, EnumItemRange, NameRange, NoteRange, ParamRange, StmtRange,
};
use super::Spanned;
use crate::{ExprId, Name, Span, SymbolId, TypespecId};

/// An annotation attached to a declaration, e.g. a foreign-linkage marker.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Note {
    pub name: Name,
    pub span: Span,
}

/// One item of an enum declaration: a name with an optional initializer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumItem {
    pub name: Name,
    pub init: Option<ExprId>,
    pub span: Span,
}

/// One item of a struct/union declaration.
///
/// `names` may hold several comma-grouped field names sharing one typespec,
/// the C idiom `x, y, z: float;`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct AggregateItem {
    pub names: NameRange,
    pub ty: TypespecId,
    pub span: Span,
}

/// A function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncParam {
    pub name: Name,
    pub ty: TypespecId,
    pub span: Span,
}

/// Top-level declaration node.
///
/// `sym` is the back-reference to the registered symbol; it is
/// `SymbolId::INVALID` until registration writes it, exactly once.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Decl {
    pub kind: DeclKind,
    pub name: Name,
    pub span: Span,
    pub notes: NoteRange,
    pub sym: SymbolId,
}

impl Decl {
    /// Create a declaration with no annotations and an unset symbol slot.
    pub fn new(kind: DeclKind, name: Name, span: Span) -> Self {
        Decl {
            kind,
            name,
            span,
            notes: NoteRange::EMPTY,
            sym: SymbolId::INVALID,
        }
    }

    /// Create a declaration carrying annotations.
    pub fn with_notes(kind: DeclKind, name: Name, span: Span, notes: NoteRange) -> Self {
        Decl {
            kind,
            name,
            span,
            notes,
            sym: SymbolId::INVALID,
        }
    }
}

impl fmt::Debug for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.name, self.span)
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

/// Declaration variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// `enum E { A, B = 10 }`
    Enum { items: EnumItemRange },

    /// `struct S { x, y: int; }`
    Struct { items: AggregateItemRange },

    /// `union U { i: int; f: float; }`
    Union { items: AggregateItemRange },

    /// `var v: T = expr` - typespec and initializer each optional, at
    /// least one present (parser invariant).
    Var {
        ty: Option<TypespecId>,
        init: Option<ExprId>,
    },

    /// `const c = expr`
    Const { init: ExprId },

    /// `typedef T = U*`
    TypeAlias { ty: TypespecId },

    /// `func f(a: int, ...): int { ... }`
    Func {
        params: ParamRange,
        ret: Option<TypespecId>,
        variadic: bool,
        body: StmtRange,
    },
}
