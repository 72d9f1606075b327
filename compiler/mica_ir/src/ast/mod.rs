//! Flat AST types using arena allocation.
//!
//! All nodes are `{ kind, span }` structs whose children are arena ids or
//! ranges, never boxes.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes and literal metadata
//! - `typespec`: syntactic type references (pre-resolution)
//! - `stmt`: statement nodes
//! - `decl`: top-level declarations and their item types
//! - `operators`: unary/binary/assignment operators
//! - `ranges`: arena range types for flattened child lists

mod decl;
mod expr;
mod operators;
mod ranges;
mod stmt;
mod typespec;

pub use decl::{AggregateItem, Decl, DeclKind, EnumItem, FuncParam, Note};
pub use expr::{CompoundField, CompoundFieldKind, Expr, ExprKind, IntBase, LitSuffix};
pub use operators::{AssignOp, BinaryOp, UnaryOp};
pub use ranges::{
    AggregateItemRange, CompoundFieldRange, ElseIfRange, EnumItemRange, ExprRange, NameRange,
    NoteRange, ParamRange, StmtRange, SwitchCaseRange, TypespecRange,
};
pub use stmt::{ElseIf, Stmt, StmtKind, SwitchCase};
pub use typespec::{Typespec, TypespecKind};

use crate::Span;

/// Trait for nodes that carry a source span.
pub trait Spanned {
    /// The node's source span.
    fn span(&self) -> Span;
}
