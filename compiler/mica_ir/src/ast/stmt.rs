//! Statement nodes.

use std::fmt;

use super::operators::AssignOp;
use super::ranges::{ElseIfRange, ExprRange, StmtRange, SwitchCaseRange};
use super::Spanned;
use crate::{DeclId, ExprId, Name, Span, StmtId, TypespecId};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// An `else if` link in an if-chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElseIf {
    pub cond: ExprId,
    pub body: StmtRange,
}

/// One case of a switch statement.
///
/// `patterns` is empty iff `is_default` is set.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchCase {
    pub patterns: ExprRange,
    pub is_default: bool,
    pub body: StmtRange,
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Local declaration statement
    Decl(DeclId),

    /// Bare expression statement
    Expr(ExprId),

    /// `return expr?`
    Return(Option<ExprId>),

    /// `break`
    Break,

    /// `continue`
    Continue,

    /// Braced block
    Block(StmtRange),

    /// `if` with else-if chain and optional else block
    If {
        cond: ExprId,
        then_block: StmtRange,
        else_ifs: ElseIfRange,
        else_block: StmtRange,
    },

    /// `while (cond) { ... }`
    While { cond: ExprId, body: StmtRange },

    /// `do { ... } while (cond)`
    DoWhile { cond: ExprId, body: StmtRange },

    /// `for (init; cond; next) { ... }` - every slot optional
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        next: Option<StmtId>,
        body: StmtRange,
    },

    /// `switch (expr) { case ...: ... default: ... }`
    Switch {
        scrutinee: ExprId,
        cases: SwitchCaseRange,
    },

    /// Assignment, plain or compound: `x = v`, `x += v`
    Assign {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },

    /// Local inferred declaration: `name := expr`
    Init {
        name: Name,
        ty: Option<TypespecId>,
        expr: ExprId,
    },
}
