//! Declaration ordering.
//!
//! The core operation is [`Resolver::order_name`]: look the name up, resolve
//! everything its declaration depends on first, then append the declaration
//! to the output. The symbol states double as the cycle detector - a name
//! re-entered while still `Ordering` is on the active call path.

use mica_ir::{
    AstArena, CompoundFieldKind, DeclId, DeclKind, ExprId, ExprKind, Name, Span, SymbolId,
    TypespecId, TypespecKind,
};

use crate::error::ResolveError;
use crate::stack::ensure_sufficient_stack;
use crate::symbol::{SymKind, SymState, SymbolTable};

/// Dependency resolver for one compilation pass.
///
/// Owns the symbol table and the append-only ordered output. Registration
/// order plus first-discovered-dependency order fully determines the output;
/// resolving the same input twice (fresh state each time) yields the same
/// sequence.
#[derive(Default)]
pub struct Resolver {
    syms: SymbolTable,
    ordered: Vec<DeclId>,
}

impl Resolver {
    /// Create a resolver with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.syms
    }

    /// Register a builtin name. Must precede user declarations.
    pub fn register_builtin(&mut self, name: Name) -> Result<SymbolId, ResolveError> {
        self.syms.register_builtin(name)
    }

    /// Register a top-level declaration (and, for enums, its items).
    pub fn register(&mut self, ast: &mut AstArena, decl: DeclId) -> Result<SymbolId, ResolveError> {
        self.syms.register_decl(ast, decl)
    }

    /// Order every registered symbol, in registration order.
    ///
    /// On success the ordered output contains each declaration exactly once,
    /// after everything it depends on. On error the output is meaningless
    /// and must be discarded with the resolver.
    #[tracing::instrument(level = "debug", skip_all, fields(symbols = self.syms.len()))]
    pub fn order_all(&mut self, ast: &AstArena) -> Result<(), ResolveError> {
        for idx in 0..self.syms.len() {
            let raw = u32::try_from(idx)
                .unwrap_or_else(|_| panic!("symbol table overflow: too many symbols"));
            let sym = *self.syms.get(SymbolId::new(raw));
            let span = if sym.decl.is_valid() {
                ast.decl(sym.decl).span
            } else {
                Span::DUMMY
            };
            self.order_name(ast, sym.name, span)?;
        }
        tracing::debug!(ordered = self.ordered.len(), "declaration ordering complete");
        Ok(())
    }

    /// Resolve one name: everything it depends on is ordered first, then -
    /// for declaration-backed, non-enum-item symbols - its declaration is
    /// appended to the output. Idempotent per name.
    ///
    /// `span` is the location of the reference, used for diagnostics.
    pub fn order_name(
        &mut self,
        ast: &AstArena,
        name: Name,
        span: Span,
    ) -> Result<(), ResolveError> {
        let Some(sym_id) = self.syms.lookup(name) else {
            return Err(ResolveError::UnresolvedName { name, span });
        };
        let sym = *self.syms.get(sym_id);
        match sym.state {
            // Already processed; a name is resolved at most once.
            SymState::Ordered => Ok(()),
            // Still on the active resolution path: a true dependency cycle.
            SymState::Ordering => Err(ResolveError::CyclicDependency { name, span }),
            SymState::Unordered => {
                self.syms.set_state(sym_id, SymState::Ordering);
                match sym.kind {
                    SymKind::Decl => self.order_decl(ast, sym.decl)?,
                    // An enum item aliases its owning enum: resolving the
                    // item resolves the enum, which appends the enum decl.
                    SymKind::EnumConst => {
                        let owner = ast.decl(sym.decl).name;
                        self.order_name(ast, owner, span)?;
                    }
                    // Builtins are born Ordered and never reach this arm.
                    SymKind::Builtin => {}
                }
                self.syms.set_state(sym_id, SymState::Ordered);
                if sym.kind == SymKind::Decl {
                    tracing::trace!(decl = ?sym.decl, "appending declaration");
                    self.ordered.push(sym.decl);
                }
                Ok(())
            }
        }
    }

    /// Resolve the dependencies of one declaration.
    ///
    /// Functions contribute nothing: their bodies may reference anything
    /// without forcing it to be ordered first, since code emission does not
    /// depend on data-layout order.
    fn order_decl(&mut self, ast: &AstArena, id: DeclId) -> Result<(), ResolveError> {
        match ast.decl(id).kind {
            DeclKind::Struct { items } | DeclKind::Union { items } => {
                for item in ast.aggregate_items(items) {
                    self.order_typespec(ast, item.ty)?;
                }
                Ok(())
            }
            DeclKind::Enum { items } => {
                for item in ast.enum_items(items) {
                    if let Some(init) = item.init {
                        self.order_expr(ast, init)?;
                    }
                }
                Ok(())
            }
            DeclKind::Var { ty, init } => {
                if let Some(ty) = ty {
                    self.order_typespec(ast, ty)?;
                }
                if let Some(init) = init {
                    self.order_expr(ast, init)?;
                }
                Ok(())
            }
            DeclKind::Const { init } => self.order_expr(ast, init),
            DeclKind::TypeAlias { ty } => self.order_typespec(ast, ty),
            DeclKind::Func { .. } => Ok(()),
        }
    }

    /// Resolve the dependencies of one typespec.
    fn order_typespec(&mut self, ast: &AstArena, id: TypespecId) -> Result<(), ResolveError> {
        ensure_sufficient_stack(|| -> Result<(), ResolveError> {
            let spec = *ast.typespec(id);
            match spec.kind {
                TypespecKind::Name(name) => self.order_name(ast, name, spec.span),
                TypespecKind::Func { params, ret, .. } => {
                    for &param in ast.typespec_list(params) {
                        self.order_typespec(ast, param)?;
                    }
                    if let Some(ret) = ret {
                        self.order_typespec(ast, ret)?;
                    }
                    Ok(())
                }
                TypespecKind::Array { elem, size } => {
                    self.order_typespec(ast, elem)?;
                    if let Some(size) = size {
                        self.order_expr(ast, size)?;
                    }
                    Ok(())
                }
                // A pointer needs only the pointee's name, not its layout;
                // not recursing here is what lets self-referential and
                // mutually-referential structures resolve.
                TypespecKind::Ptr { .. } => Ok(()),
                // The qualifier is not an indirection.
                TypespecKind::Const { base } => self.order_typespec(ast, base),
            }
        })
    }

    /// Resolve the dependencies of one expression.
    fn order_expr(&mut self, ast: &AstArena, id: ExprId) -> Result<(), ResolveError> {
        ensure_sufficient_stack(|| -> Result<(), ResolveError> {
            let expr = *ast.expr(id);
            match expr.kind {
                ExprKind::Int { .. } | ExprKind::Float { .. } | ExprKind::Str(_) => Ok(()),
                ExprKind::Name(name) => self.order_name(ast, name, expr.span),
                ExprKind::Cast { ty, expr } => {
                    self.order_typespec(ast, ty)?;
                    self.order_expr(ast, expr)
                }
                ExprKind::Call { callee, args } => {
                    self.order_expr(ast, callee)?;
                    for &arg in ast.expr_list(args) {
                        self.order_expr(ast, arg)?;
                    }
                    Ok(())
                }
                ExprKind::Index { base, index } => {
                    self.order_expr(ast, base)?;
                    self.order_expr(ast, index)
                }
                ExprKind::Field { base, .. } => self.order_expr(ast, base),
                ExprKind::Compound { ty, fields } => {
                    if let Some(ty) = ty {
                        self.order_typespec(ast, ty)?;
                    }
                    for field in ast.compound_fields(fields) {
                        if let CompoundFieldKind::Indexed(index) = field.kind {
                            self.order_expr(ast, index)?;
                        }
                        self.order_expr(ast, field.init)?;
                    }
                    Ok(())
                }
                ExprKind::Unary { expr, .. } => self.order_expr(ast, expr),
                ExprKind::Binary { lhs, rhs, .. } => {
                    self.order_expr(ast, lhs)?;
                    self.order_expr(ast, rhs)
                }
                ExprKind::Ternary {
                    cond,
                    then,
                    otherwise,
                } => {
                    self.order_expr(ast, cond)?;
                    self.order_expr(ast, then)?;
                    self.order_expr(ast, otherwise)
                }
                ExprKind::SizeofExpr(expr) => self.order_expr(ast, expr),
                ExprKind::SizeofType(ty) => self.order_typespec(ast, ty),
            }
        })
    }

    /// The ordered output so far.
    pub fn ordered(&self) -> &[DeclId] {
        &self.ordered
    }

    /// Consume the resolver, returning the ordered output.
    pub fn into_ordered(self) -> Vec<DeclId> {
        self.ordered
    }
}

/// Run a whole pass: register builtins and declarations (in source order),
/// order everything, and return the dependency-safe declaration sequence.
///
/// On error no output is produced - the ordering is either complete and
/// correct, or absent.
pub fn order_module(
    ast: &mut AstArena,
    decls: &[DeclId],
    builtins: &[Name],
) -> Result<Vec<DeclId>, ResolveError> {
    let mut resolver = Resolver::new();
    for &builtin in builtins {
        resolver.register_builtin(builtin)?;
    }
    for &decl in decls {
        resolver.register(ast, decl)?;
    }
    resolver.order_all(ast)?;
    Ok(resolver.into_ordered())
}
