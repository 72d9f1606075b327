//! Resolution errors.
//!
//! All of these are fatal: the pass stops at the first one and produces no
//! ordered output. Errors carry the interned name handle rather than the
//! string, so rendering the identifier needs the pass's interner; `Display`
//! alone shows the span and the raw handle.

use mica_ir::{Name, Span, StringInterner};
use std::fmt;

/// A fatal resolution error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A name was registered twice (builtin, declaration, or enum item).
    DuplicateName { name: Name, span: Span },
    /// A reference to a name with no symbol-table entry.
    UnresolvedName { name: Name, span: Span },
    /// The active resolution path revisited a symbol it is still resolving.
    CyclicDependency { name: Name, span: Span },
}

impl ResolveError {
    /// The offending name.
    pub fn name(&self) -> Name {
        match *self {
            ResolveError::DuplicateName { name, .. }
            | ResolveError::UnresolvedName { name, .. }
            | ResolveError::CyclicDependency { name, .. } => name,
        }
    }

    /// Where the error was detected.
    pub fn span(&self) -> Span {
        match *self {
            ResolveError::DuplicateName { span, .. }
            | ResolveError::UnresolvedName { span, .. }
            | ResolveError::CyclicDependency { span, .. } => span,
        }
    }

    /// Render a user-facing message with the identifier resolved.
    pub fn message(&self, interner: &StringInterner) -> String {
        let ident = interner.lookup(self.name());
        match self {
            ResolveError::DuplicateName { span, .. } => {
                format!("duplicate name `{ident}` at {span}")
            }
            ResolveError::UnresolvedName { span, .. } => {
                format!("unresolved name `{ident}` at {span}")
            }
            ResolveError::CyclicDependency { span, .. } => {
                format!("cyclic dependency involving `{ident}` at {span}")
            }
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::DuplicateName { name, span } => {
                write!(f, "duplicate name (#{}) at {span}", name.raw())
            }
            ResolveError::UnresolvedName { name, span } => {
                write!(f, "unresolved name (#{}) at {span}", name.raw())
            }
            ResolveError::CyclicDependency { name, span } => {
                write!(f, "cyclic dependency involving name (#{}) at {span}", name.raw())
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_resolves_identifier() {
        let mut interner = StringInterner::new();
        let name = interner.intern("Vec2");
        let err = ResolveError::CyclicDependency {
            name,
            span: Span::new(10, 14),
        };
        assert_eq!(
            err.message(&interner),
            "cyclic dependency involving `Vec2` at 10..14"
        );
        assert_eq!(err.name(), name);
        assert_eq!(err.span(), Span::new(10, 14));
    }
}
