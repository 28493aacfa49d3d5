use core::marker::PhantomData;

/// A marker that is invariant in `'id`.
///
/// Covariance would let the compiler shrink two brands to a common lifetime
/// and unify node ids of different maps. `fn(&'id ()) -> &'id ()` rules that
/// out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
