//! Result of an access operation

/// Completed access operation
///
/// Operations never fail from the caller's point of view: a failure has
/// already been reported and turned into `Fallback` or `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Value decoded from the server response
    Fetched(T),
    /// Request failed; caller-supplied fallback
    Fallback(T),
    /// Request failed and no fallback was supplied
    Empty,
}

impl<T> Outcome<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Fetched or fallback value
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) | Self::Fallback(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Fetched(value) | Self::Fallback(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Fetched(value) => Outcome::Fetched(f(value)),
            Self::Fallback(value) => Outcome::Fallback(f(value)),
            Self::Empty => Outcome::Empty,
        }
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_option()
    }
}
