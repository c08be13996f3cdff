//! Integrity levels for containers, callables and opaque values.

use std::fmt;

/// How locked down an object is.
///
/// Levels are ordered and only ever raised: freezing a sealed record makes
/// it frozen, sealing a frozen record leaves it frozen.
///
/// - `NonExtensible`: no new keys; existing entries may change or be removed.
/// - `Sealed`: non-extensible and no removals; existing entries may change.
/// - `Frozen`: sealed and no entry may change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Integrity {
    #[default]
    Extensible,
    NonExtensible,
    Sealed,
    Frozen,
}

impl Integrity {
    /// Raise to `level`, never lowering.
    #[inline]
    pub fn raise(&mut self, level: Integrity) {
        if level > *self {
            *self = level;
        }
    }

    #[inline]
    pub fn is_extensible(self) -> bool {
        self == Integrity::Extensible
    }

    /// Sealed as observed from outside.
    ///
    /// A non-extensible object with no entries has nothing left to remove,
    /// so it reports sealed without ever having been sealed.
    #[inline]
    pub fn reports_sealed(self, empty: bool) -> bool {
        self >= Integrity::Sealed || (empty && self >= Integrity::NonExtensible)
    }

    /// Frozen as observed from outside.
    ///
    /// A sealed or non-extensible object with no entries has nothing left to
    /// change, so it reports frozen as well.
    #[inline]
    pub fn reports_frozen(self, empty: bool) -> bool {
        self == Integrity::Frozen || (empty && self >= Integrity::NonExtensible)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Integrity::Extensible => "extensible",
            Integrity::NonExtensible => "non-extensible",
            Integrity::Sealed => "sealed",
            Integrity::Frozen => "frozen",
        }
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
