//! GhostToken - the brand that ties node ids to their road map.
//!
//! A `GhostToken<'brand>` is a zero-sized value whose lifetime parameter is
//! invariant and unique to one [`GhostToken::new`] scope. Building a
//! [`RoadMap`](crate::RoadMap) consumes the token, so every
//! [`NodeId<'brand>`](crate::NodeId) handed out afterwards belongs to exactly
//! one map (and its reversal, which shares the node set).
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`.
//! Only one road map can ever be built from a brand.

mod invariant;
mod macros;

pub use invariant::InvariantLifetime;

/// A zero-sized branding capability.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// Nothing branded can escape the closure: the result type `R` cannot
    /// mention `'brand`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use capital::{GhostToken, GraphError, RoadMap};
    ///
    /// let out_degree = GhostToken::new(|token| {
    ///     let map = RoadMap::from_edges(token, &[1u32, 2], &[0, 0])?;
    ///     let node = map.node(1).expect("node 1 exists");
    ///     Ok::<_, GraphError>(map.out_degree(node))
    /// });
    /// assert_eq!(out_degree.unwrap(), 1);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }

    /// Creates a new branded scope nested within the current one.
    ///
    /// Equivalent to [`GhostToken::new`]; the sub-brand is unrelated to
    /// `'brand`, so maps built in the two scopes cannot share node ids.
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn with_scoped<F, R>(&self, f: F) -> R
    where
        F: for<'sub> FnOnce(GhostToken<'sub>) -> R,
    {
        Self::new(f)
    }

    /// Returns the invariant marker carried by this token.
    #[inline(always)]
    pub(crate) const fn brand(&self) -> InvariantLifetime<'brand> {
        self.0
    }
}
