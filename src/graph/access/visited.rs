//! Word-packed visited sets for graph traversals.
//!
//! A traversal over `N + 1` nodes needs `N + 1` bits. The set is cleared and
//! reused between traversals instead of being reallocated.

const WORD_BITS: usize = usize::BITS as usize;

#[inline(always)]
const fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}

/// A dense, word-packed visited set for fixed-size graphs.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    bits: usize,
    words: Vec<usize>,
}

impl VisitedSet {
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            bits,
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.bits
    }

    pub(crate) fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Resizes to `bits` and clears every bit.
    pub(crate) fn reset(&mut self, bits: usize) {
        if bits == self.len() {
            self.clear();
        } else {
            *self = Self::new(bits);
        }
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    ///
    /// Out-of-range nodes are a logic error (debug-asserted) and report as already visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.bits, "node {node} out of range for {} bits", self.bits);
        let (word, mask) = bit_word_mask(node);
        match self.words.get_mut(word) {
            Some(w) if node < self.bits && *w & mask == 0 => {
                *w |= mask;
                true
            }
            _ => false,
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        let (word, mask) = bit_word_mask(node);
        node < self.bits && self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Number of visited nodes.
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_marks_once() {
        let mut set = VisitedSet::new(130);
        assert_eq!(set.len(), 130);
        assert!(set.try_visit(0));
        assert!(set.try_visit(64));
        assert!(set.try_visit(129));
        assert!(!set.try_visit(64));
        assert!(set.is_visited(129));
        assert!(!set.is_visited(128));
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn reset_clears_and_resizes() {
        let mut set = VisitedSet::new(10);
        set.try_visit(3);
        set.reset(10);
        assert!(!set.is_visited(3));
        assert_eq!(set.count(), 0);

        set.reset(200);
        assert_eq!(set.len(), 200);
        assert!(set.try_visit(199));
    }

    #[test]
    fn empty_set_has_no_words() {
        let set = VisitedSet::new(0);
        assert_eq!(set.len(), 0);
        assert_eq!(set.count(), 0);
        assert!(!set.is_visited(0));
    }
}
