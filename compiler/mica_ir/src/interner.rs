//! String interner for identifier storage.
//!
//! One interner lives for one compilation pass; it is threaded by reference
//! through the phases rather than stored in a global. Interned strings are
//! leaked so that lookups hand out `&'static str` without lifetime plumbing.

use crate::Name;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "string interner exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// String interner.
///
/// Provides O(1) lookup, and identity comparison of [`Name`] handles stands
/// in for string equality. The empty string is pre-interned at index 0,
/// along with the builtin type names the driver is expected to register.
pub struct StringInterner {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl StringInterner {
    /// Names every pass uses, interned ahead of user input. The empty string
    /// sits at index 0 so [`Name::EMPTY`] always resolves.
    const PRE_INTERNED: [&'static str; 4] = ["", "int", "float", "sizeof"];

    /// Create a new interner with the empty string and common names
    /// pre-interned.
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        for common in Self::PRE_INTERNED {
            interner.intern(common);
        }
        debug_assert_eq!(interner.lookup(Name::EMPTY), "");
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&idx) = self.map.get(s) {
            return Ok(Name::from_raw(idx));
        }
        let idx = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        // Leak the string to get 'static lifetime; the interner is
        // pass-scoped but its contents outlive it by design.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        self.strings.push(leaked);
        self.map.insert(leaked, idx);
        Ok(Name::from_raw(idx))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings[name.index()]
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner holds only the pre-interned entries.
    pub fn is_empty(&self) -> bool {
        self.len() <= Self::PRE_INTERNED.len()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_lookup() {
        let mut interner = StringInterner::new();

        let hello = interner.intern("hello");
        let world = interner.intern("world");
        let hello2 = interner.intern("hello");

        assert_eq!(hello, hello2);
        assert_ne!(hello, world);

        assert_eq!(interner.lookup(hello), "hello");
        assert_eq!(interner.lookup(world), "world");
    }

    #[test]
    fn test_empty_string() {
        let mut interner = StringInterner::new();
        let empty = interner.intern("");
        assert_eq!(empty, Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn test_common_names_pre_interned() {
        let mut interner = StringInterner::new();
        let before = interner.len();
        interner.intern("int");
        interner.intern("float");
        assert_eq!(interner.len(), before);
    }
}
