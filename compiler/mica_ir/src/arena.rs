//! Arena ownership of the AST.
//!
//! The arena owns every node and every flattened child list for one
//! compilation pass. Nodes reference each other through ids and ranges, so
//! logically cyclic name references (a struct mentioning a type declared
//! later) never turn into ownership cycles. There is no per-node free; the
//! whole arena drops as a unit when the pass ends.
//!
//! Exprs and typespecs carry a parallel `TypeId` array: the post-resolution
//! annotation slot, `TypeId::NONE` until a later stage writes it once.

use crate::ast::{
    AggregateItem, CompoundField, Decl, ElseIf, EnumItem, Expr, FuncParam, Note, Stmt, SwitchCase,
    Typespec,
};
use crate::{
    AggregateItemRange, CompoundFieldRange, DeclId, ElseIfRange, EnumItemRange, ExprId, ExprRange,
    Name, NameRange, NoteRange, ParamRange, StmtId, StmtRange, SwitchCaseRange, SymbolId, TypeId,
    TypespecId, TypespecRange,
};

/// Convert a length to `u32`, aborting the pass on index exhaustion.
///
/// Running out of index space is treated like running out of memory:
/// fatal and unrecoverable, not a result the caller can handle.
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena overflow: too many {what}"))
}

/// Convert a list length to `u16`, aborting the pass on overflow.
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("arena overflow: {what} too long"))
}

/// Arena for one compilation unit's AST.
///
/// # Index Spaces
///
/// - `exprs`/`expr_types`: parallel arrays indexed by [`ExprId`]
/// - `typespecs`/`typespec_types`: parallel arrays indexed by [`TypespecId`]
/// - `stmts`, `decls`: indexed by [`StmtId`] / [`DeclId`]
/// - the remaining arrays are flattened child lists indexed by range types
#[derive(Clone, Debug, Default)]
pub struct AstArena {
    exprs: Vec<Expr>,
    expr_types: Vec<TypeId>,
    typespecs: Vec<Typespec>,
    typespec_types: Vec<TypeId>,
    stmts: Vec<Stmt>,
    decls: Vec<Decl>,

    expr_lists: Vec<ExprId>,
    typespec_lists: Vec<TypespecId>,
    stmt_lists: Vec<StmtId>,
    name_lists: Vec<Name>,
    params: Vec<FuncParam>,
    enum_items: Vec<EnumItem>,
    aggregate_items: Vec<AggregateItem>,
    switch_cases: Vec<SwitchCase>,
    else_ifs: Vec<ElseIf>,
    compound_fields: Vec<CompoundField>,
    notes: Vec<Note>,
}

impl AstArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // === Nodes ===

    /// Allocate an expression, returning its id.
    pub fn push_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        self.expr_types.push(TypeId::NONE);
        id
    }

    /// Get an expression by id.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Allocate a typespec, returning its id.
    pub fn push_typespec(&mut self, spec: Typespec) -> TypespecId {
        let id = TypespecId::new(to_u32(self.typespecs.len(), "typespecs"));
        self.typespecs.push(spec);
        self.typespec_types.push(TypeId::NONE);
        id
    }

    /// Get a typespec by id.
    #[inline]
    pub fn typespec(&self, id: TypespecId) -> &Typespec {
        &self.typespecs[id.index()]
    }

    /// Allocate a statement, returning its id.
    pub fn push_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(stmt);
        id
    }

    /// Get a statement by id.
    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Allocate a declaration, returning its id.
    pub fn push_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(to_u32(self.decls.len(), "declarations"));
        self.decls.push(decl);
        id
    }

    /// Get a declaration by id.
    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Number of allocated declarations.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Number of allocated expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // === Annotation slots (set once, post-hoc) ===

    /// Resolved type of an expression, `TypeId::NONE` if not yet written.
    #[inline]
    pub fn expr_type(&self, id: ExprId) -> TypeId {
        self.expr_types[id.index()]
    }

    /// Write an expression's resolved type. The slot is write-once.
    pub fn set_expr_type(&mut self, id: ExprId, ty: TypeId) {
        debug_assert!(
            !self.expr_types[id.index()].is_some(),
            "expr type slot written twice"
        );
        self.expr_types[id.index()] = ty;
    }

    /// Resolved type of a typespec, `TypeId::NONE` if not yet written.
    #[inline]
    pub fn typespec_type(&self, id: TypespecId) -> TypeId {
        self.typespec_types[id.index()]
    }

    /// Write a typespec's resolved type. The slot is write-once.
    pub fn set_typespec_type(&mut self, id: TypespecId, ty: TypeId) {
        debug_assert!(
            !self.typespec_types[id.index()].is_some(),
            "typespec type slot written twice"
        );
        self.typespec_types[id.index()] = ty;
    }

    /// Write a declaration's symbol back-reference. The slot is write-once;
    /// registration is the only caller.
    pub fn set_decl_sym(&mut self, id: DeclId, sym: SymbolId) {
        debug_assert!(
            !self.decls[id.index()].sym.is_valid(),
            "decl symbol slot written twice"
        );
        self.decls[id.index()].sym = sym;
    }

    // === Flattened child lists ===
    //
    // Each pusher absorbs a caller-local slice into arena-owned storage and
    // hands back a compact range; the caller's buffer can then be dropped.

    /// Absorb a list of expression ids.
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "expression list"))
    }

    /// Get expression ids from a range.
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a list of typespec ids.
    pub fn push_typespec_list(&mut self, ids: &[TypespecId]) -> TypespecRange {
        if ids.is_empty() {
            return TypespecRange::EMPTY;
        }
        let start = to_u32(self.typespec_lists.len(), "typespec lists");
        self.typespec_lists.extend_from_slice(ids);
        TypespecRange::new(start, to_u16(ids.len(), "typespec list"))
    }

    /// Get typespec ids from a range.
    pub fn typespec_list(&self, range: TypespecRange) -> &[TypespecId] {
        &self.typespec_lists[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a list of statement ids (a block body).
    pub fn push_stmt_list(&mut self, ids: &[StmtId]) -> StmtRange {
        if ids.is_empty() {
            return StmtRange::EMPTY;
        }
        let start = to_u32(self.stmt_lists.len(), "statement lists");
        self.stmt_lists.extend_from_slice(ids);
        StmtRange::new(start, to_u16(ids.len(), "statement list"))
    }

    /// Get statement ids from a range.
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a comma-grouped field name list.
    pub fn push_name_list(&mut self, names: &[Name]) -> NameRange {
        if names.is_empty() {
            return NameRange::EMPTY;
        }
        let start = to_u32(self.name_lists.len(), "name lists");
        self.name_lists.extend_from_slice(names);
        NameRange::new(start, to_u16(names.len(), "name list"))
    }

    /// Get names from a range.
    pub fn name_list(&self, range: NameRange) -> &[Name] {
        &self.name_lists[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a function parameter list.
    pub fn push_params(&mut self, params: &[FuncParam]) -> ParamRange {
        if params.is_empty() {
            return ParamRange::EMPTY;
        }
        let start = to_u32(self.params.len(), "parameters");
        self.params.extend_from_slice(params);
        ParamRange::new(start, to_u16(params.len(), "parameter list"))
    }

    /// Get function parameters from a range.
    pub fn params(&self, range: ParamRange) -> &[FuncParam] {
        &self.params[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb an enum item list.
    pub fn push_enum_items(&mut self, items: &[EnumItem]) -> EnumItemRange {
        if items.is_empty() {
            return EnumItemRange::EMPTY;
        }
        let start = to_u32(self.enum_items.len(), "enum items");
        self.enum_items.extend_from_slice(items);
        EnumItemRange::new(start, to_u16(items.len(), "enum item list"))
    }

    /// Get enum items from a range.
    pub fn enum_items(&self, range: EnumItemRange) -> &[EnumItem] {
        &self.enum_items[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a struct/union item list.
    pub fn push_aggregate_items(&mut self, items: &[AggregateItem]) -> AggregateItemRange {
        if items.is_empty() {
            return AggregateItemRange::EMPTY;
        }
        let start = to_u32(self.aggregate_items.len(), "aggregate items");
        self.aggregate_items.extend_from_slice(items);
        AggregateItemRange::new(start, to_u16(items.len(), "aggregate item list"))
    }

    /// Get struct/union items from a range.
    pub fn aggregate_items(&self, range: AggregateItemRange) -> &[AggregateItem] {
        &self.aggregate_items[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a switch case list.
    pub fn push_switch_cases(&mut self, cases: &[SwitchCase]) -> SwitchCaseRange {
        if cases.is_empty() {
            return SwitchCaseRange::EMPTY;
        }
        let start = to_u32(self.switch_cases.len(), "switch cases");
        self.switch_cases.extend_from_slice(cases);
        SwitchCaseRange::new(start, to_u16(cases.len(), "switch case list"))
    }

    /// Get switch cases from a range.
    pub fn switch_cases(&self, range: SwitchCaseRange) -> &[SwitchCase] {
        &self.switch_cases[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb an else-if chain.
    pub fn push_else_ifs(&mut self, links: &[ElseIf]) -> ElseIfRange {
        if links.is_empty() {
            return ElseIfRange::EMPTY;
        }
        let start = to_u32(self.else_ifs.len(), "else-if links");
        self.else_ifs.extend_from_slice(links);
        ElseIfRange::new(start, to_u16(links.len(), "else-if chain"))
    }

    /// Get an else-if chain from a range.
    pub fn else_ifs(&self, range: ElseIfRange) -> &[ElseIf] {
        &self.else_ifs[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a compound-literal field list.
    pub fn push_compound_fields(&mut self, fields: &[CompoundField]) -> CompoundFieldRange {
        if fields.is_empty() {
            return CompoundFieldRange::EMPTY;
        }
        let start = to_u32(self.compound_fields.len(), "compound fields");
        self.compound_fields.extend_from_slice(fields);
        CompoundFieldRange::new(start, to_u16(fields.len(), "compound field list"))
    }

    /// Get compound-literal fields from a range.
    pub fn compound_fields(&self, range: CompoundFieldRange) -> &[CompoundField] {
        &self.compound_fields[range.start as usize..range.start as usize + range.len()]
    }

    /// Absorb a declaration's annotation list.
    pub fn push_notes(&mut self, notes: &[Note]) -> NoteRange {
        if notes.is_empty() {
            return NoteRange::EMPTY;
        }
        let start = to_u32(self.notes.len(), "notes");
        self.notes.extend_from_slice(notes);
        NoteRange::new(start, to_u16(notes.len(), "note list"))
    }

    /// Get annotations from a range.
    pub fn notes(&self, range: NoteRange) -> &[Note] {
        &self.notes[range.start as usize..range.start as usize + range.len()]
    }

    /// Check whether a declaration carries an annotation with this name.
    pub fn decl_has_note(&self, id: DeclId, name: Name) -> bool {
        self.notes(self.decl(id).notes).iter().any(|n| n.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{DeclKind, ExprKind, StmtKind, TypespecKind};
    use crate::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_get_expr() {
        let mut arena = AstArena::new();
        let id = arena.push_expr(Expr::new(ExprKind::int(42), Span::new(0, 2)));
        match arena.expr(id).kind {
            ExprKind::Int { value, .. } => assert_eq!(value, 42),
            _ => panic!("expected int literal"),
        }
        assert_eq!(arena.expr_count(), 1);
        assert_eq!(arena.expr_type(id), TypeId::NONE);
    }

    #[test]
    fn test_expr_list_absorbs_caller_slice() {
        let mut arena = AstArena::new();
        let a = arena.push_expr(Expr::new(ExprKind::int(1), Span::DUMMY));
        let b = arena.push_expr(Expr::new(ExprKind::int(2), Span::DUMMY));
        let local = vec![a, b];
        let range = arena.push_expr_list(&local);
        drop(local);
        assert_eq!(arena.expr_list(range), &[a, b]);
    }

    #[test]
    fn test_empty_list_is_empty_range() {
        let mut arena = AstArena::new();
        let range = arena.push_stmt_list(&[]);
        assert_eq!(range, StmtRange::EMPTY);
        assert!(arena.stmt_list(range).is_empty());
    }

    #[test]
    fn test_type_slots_set_once() {
        let mut arena = AstArena::new();
        let id = arena.push_expr(Expr::new(ExprKind::int(1), Span::DUMMY));
        arena.set_expr_type(id, TypeId::INT);
        assert_eq!(arena.expr_type(id), TypeId::INT);

        let spec = arena.push_typespec(Typespec::new(
            TypespecKind::Name(Name::from_raw(1)),
            Span::DUMMY,
        ));
        assert_eq!(arena.typespec_type(spec), TypeId::NONE);
        arena.set_typespec_type(spec, TypeId::FLOAT);
        assert_eq!(arena.typespec_type(spec), TypeId::FLOAT);
    }

    #[test]
    fn test_stmt_storage() {
        let mut arena = AstArena::new();
        let cond = arena.push_expr(Expr::new(ExprKind::int(1), Span::DUMMY));
        let ret = arena.push_stmt(Stmt::new(StmtKind::Return(None), Span::DUMMY));
        let then_block = arena.push_stmt_list(&[ret]);
        let brk = arena.push_stmt(Stmt::new(StmtKind::Break, Span::DUMMY));
        let else_block = arena.push_stmt_list(&[brk]);
        let else_ifs = arena.push_else_ifs(&[ElseIf {
            cond,
            body: else_block,
        }]);
        let if_stmt = arena.push_stmt(Stmt::new(
            StmtKind::If {
                cond,
                then_block,
                else_ifs,
                else_block,
            },
            Span::DUMMY,
        ));
        assert!(matches!(arena.stmt(if_stmt).kind, StmtKind::If { .. }));
        assert_eq!(arena.stmt_list(then_block), &[ret]);
        assert_eq!(arena.else_ifs(else_ifs).len(), 1);

        let cases = arena.push_switch_cases(&[SwitchCase {
            patterns: ExprRange::EMPTY,
            is_default: true,
            body: then_block,
        }]);
        let switch = arena.push_stmt(Stmt::new(
            StmtKind::Switch {
                scrutinee: cond,
                cases,
            },
            Span::DUMMY,
        ));
        assert!(matches!(arena.stmt(switch).kind, StmtKind::Switch { .. }));
        assert!(arena.switch_cases(cases)[0].is_default);

        let ty = arena.push_typespec(Typespec::new(
            TypespecKind::Name(Name::from_raw(2)),
            Span::DUMMY,
        ));
        let params = arena.push_params(&[FuncParam {
            name: Name::from_raw(3),
            ty,
            span: Span::DUMMY,
        }]);
        assert_eq!(arena.params(params)[0].name, Name::from_raw(3));
    }

    #[test]
    fn test_decl_notes() {
        let mut arena = AstArena::new();
        let foreign = Name::from_raw(10);
        let other = Name::from_raw(11);
        let notes = arena.push_notes(&[Note {
            name: foreign,
            span: Span::DUMMY,
        }]);
        let decl = arena.push_decl(Decl::with_notes(
            DeclKind::Const {
                init: ExprId::INVALID,
            },
            Name::from_raw(12),
            Span::DUMMY,
            notes,
        ));
        assert!(arena.decl_has_note(decl, foreign));
        assert!(!arena.decl_has_note(decl, other));
    }
}
