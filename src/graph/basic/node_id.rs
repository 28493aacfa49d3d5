//! Branded node indices.

use core::fmt;

use crate::token::InvariantLifetime;

/// A node index that is guaranteed to be valid for a specific brand.
///
/// Node ids are only created by a [`RoadMap<'brand>`](crate::RoadMap) after a
/// bounds check (or by enumerating its nodes), so they index its successor
/// lists without further validation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId<'brand> {
    idx: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> NodeId<'brand> {
    /// Caller must ensure `idx` is a node of a map carrying `brand`.
    #[inline(always)]
    pub(crate) const fn new(idx: usize, _brand: InvariantLifetime<'brand>) -> Self {
        Self { idx, _brand }
    }

    /// Returns the raw 0-based index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.idx
    }
}

impl fmt::Debug for NodeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.idx)
    }
}

impl fmt::Display for NodeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.idx, f)
    }
}

impl From<NodeId<'_>> for usize {
    #[inline(always)]
    fn from(node: NodeId<'_>) -> Self {
        node.idx
    }
}
