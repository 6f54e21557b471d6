//! Indexed access points built from caller supplied functions.

/// Marker for the missing side of a one way accessor.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoAccess;

/// An indexable access point over storage owned somewhere else.
///
/// An accessor pairs a lookup function with an update function and forwards
/// [`get`][Self::get] and [`set`][Self::set] calls to them verbatim; any
/// validation is up to the wrapped functions. Capability is fixed when the
/// accessor is built: the side a constructor leaves out is [`NoAccess`], and
/// calling the absent operation does not compile.
pub struct IndexedAccessor<G = NoAccess, S = NoAccess> {
    get: G,
    set: S,
}

impl<G> IndexedAccessor<G, NoAccess> {
    /// Creates an accessor that can only look values up.
    pub fn read_only(get: G) -> Self {
        Self { get, set: NoAccess }
    }
}

impl<S> IndexedAccessor<NoAccess, S> {
    /// Creates an accessor that can only store values.
    pub fn write_only(set: S) -> Self {
        Self { get: NoAccess, set }
    }
}

impl<G, S> IndexedAccessor<G, S> {
    /// Creates an accessor that can look values up and store them.
    pub fn read_write(get: G, set: S) -> Self {
        Self { get, set }
    }

    /// Looks up the value at `index` through the wrapped lookup function.
    pub fn get<I, V>(&self, index: I) -> V
    where
        G: Fn(I) -> V,
    {
        (self.get)(index)
    }

    /// Stores `value` at `index` through the wrapped update function.
    pub fn set<I, V, O>(&mut self, index: I, value: V) -> O
    where
        S: FnMut(I, V) -> O,
    {
        (self.set)(index, value)
    }
}
