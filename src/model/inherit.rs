//! The inherit-or-explicit field model used by template placemarks.
//!
//! Every per-placemark attribute that can defer to a folder default is an
//! [`Inheritable<T>`] instead of an `Option<T>`-plus-flag pair. The wayline
//! deriver resolves each field with a total two-case match, so a forgotten
//! flag cannot survive into a derived document.

/// A template-placemark attribute that is either deferred to the folder
/// default or set to a concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Inheritable<T> {
    /// Defer to the folder default at derivation time.
    #[default]
    Inherit,
    /// Use this value, ignoring the folder default.
    Explicit(T),
}

impl<T> Inheritable<T> {
    /// `true` when the attribute defers to the folder default.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Inheritable::Inherit)
    }

    /// The explicit value, if one was set.
    pub fn explicit(&self) -> Option<&T> {
        match self {
            Inheritable::Inherit => None,
            Inheritable::Explicit(v) => Some(v),
        }
    }

    /// Consuming variant of [`Inheritable::explicit`].
    pub fn into_explicit(self) -> Option<T> {
        match self {
            Inheritable::Inherit => None,
            Inheritable::Explicit(v) => Some(v),
        }
    }
}

impl<T> From<T> for Inheritable<T> {
    fn from(value: T) -> Self {
        Inheritable::Explicit(value)
    }
}
