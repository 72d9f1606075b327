//! Stack safety for deep recursion.
//!
//! The resolver's walks recurse to the nesting depth of the input program.
//! Rather than failing at an arbitrary depth counter, recursive calls are
//! wrapped so the stack grows on demand and pathological nesting degrades
//! to heap-backed stack segments instead of an overflow.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before calling `f`.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_first(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth_first(n - 1) })
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        // Deep enough to blow a default thread stack without the guard.
        assert_eq!(depth_first(200_000), 200_000);
    }
}
