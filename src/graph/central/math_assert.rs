//! Debug-only mathematical assertion helpers.
//!
//! The finder uses these helpers to keep invariants explicit while ensuring
//! release builds remain unaffected.

/// Largest map for which debug builds cross-check elimination against the
/// exhaustive search.
pub(crate) const SOUNDNESS_CHECK_LIMIT: usize = 512;

/// Debug-asserts a mathematical invariant with a message.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Mathematical invariant violated: {}", message);
}

/// Whether the expensive cross-checks should run for a map of `node_count` nodes.
#[inline(always)]
pub(crate) const fn cross_check_enabled(node_count: usize) -> bool {
    cfg!(debug_assertions) && node_count <= SOUNDNESS_CHECK_LIMIT
}
