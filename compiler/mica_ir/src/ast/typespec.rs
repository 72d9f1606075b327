//! Syntactic type references.
//!
//! A `Typespec` is what the parser saw (`S*[n]`), not a resolved type; the
//! resolver walks typespecs to discover name dependencies, and later stages
//! materialize them into canonical `TypeId`s.

use std::fmt;

use super::ranges::TypespecRange;
use super::Spanned;
use crate::{ExprId, Name, Span, TypespecId};

/// Syntactic type reference node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Typespec {
    pub kind: TypespecKind,
    pub span: Span,
}

impl Typespec {
    pub fn new(kind: TypespecKind, span: Span) -> Self {
        Typespec { kind, span }
    }
}

impl fmt::Debug for Typespec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Typespec {
    fn span(&self) -> Span {
        self.span
    }
}

/// Typespec variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypespecKind {
    /// Identifier reference: `T`
    Name(Name),

    /// Pointer: `T*`
    Ptr { base: TypespecId },

    /// Array: `T[n]`, or `T[]` with the length implied by an initializer
    Array {
        elem: TypespecId,
        size: Option<ExprId>,
    },

    /// Function type: `func(int, float...): int`
    Func {
        params: TypespecRange,
        ret: Option<TypespecId>,
        variadic: bool,
    },

    /// Immutability qualifier: `T const`
    Const { base: TypespecId },
}
