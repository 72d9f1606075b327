//! Mica IR - shared front-end data structures.
//!
//! This crate contains the data structures the Mica front end hands between
//! phases:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Flat AST nodes (Decl, Stmt, Expr, Typespec)
//! - The arena that owns every node for one compilation pass
//!
//! # Design
//!
//! - **Intern everything**: strings become `Name(u32)`, resolved types become
//!   `TypeId(u32)`.
//! - **Flatten everything**: no `Box<Expr>`; children are `u32` ids into the
//!   arena, child lists are `(start, len)` ranges into side-arrays.
//! - Floats are stored as `u64` bit patterns so every node is `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
mod span;
mod type_id;

pub use arena::AstArena;
pub use ast::{
    AggregateItem, AssignOp, BinaryOp, CompoundField, CompoundFieldKind, Decl, DeclKind, ElseIf,
    EnumItem, Expr, ExprKind, FuncParam, IntBase, LitSuffix, Note, Spanned, Stmt, StmtKind,
    SwitchCase, Typespec, TypespecKind, UnaryOp,
};
pub use ast::{
    AggregateItemRange, CompoundFieldRange, ElseIfRange, EnumItemRange, ExprRange, NameRange,
    NoteRange, ParamRange, StmtRange, SwitchCaseRange, TypespecRange,
};
pub use ids::{DeclId, ExprId, StmtId, SymbolId, TypespecId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
pub use type_id::TypeId;

// Size assertions to prevent accidental regressions in handle types.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, ExprRange, Name, Span, TypeId};
    static_assert_size!(Name, 4);
    static_assert_size!(TypeId, 4);
    static_assert_size!(ExprId, 4);
    static_assert_size!(Span, 8);
    static_assert_size!(ExprRange, 8);
}
