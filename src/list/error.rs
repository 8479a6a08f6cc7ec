//! The error type for combinators requiring a non-empty input.

/// Error returned when a combinator requires at least one element.
///
/// This is the only failure the runtime combinator family can produce. It
/// is returned by `minimum`, `foldl1`, `foldr1` and the runtime
/// `head`/`last`/`tail`/`init`, always before any output container is
/// allocated, and is never recovered from internally. Seeded folds,
/// `map`, `zip_with` and `span` are total and never return it.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::{minimum, EmptyInputError};
///
/// let empty: Vec<i32> = vec![];
/// let error = minimum(&empty).unwrap_err();
/// assert_eq!(error, EmptyInputError::new("minimum"));
/// assert_eq!(format!("{}", error), "minimum: empty input sequence");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInputError {
    /// The name of the combinator that required a non-empty input.
    pub operation: &'static str,
}

impl EmptyInputError {
    /// Creates an error naming the combinator that rejected its input.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for EmptyInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: empty input sequence", self.operation)
    }
}

impl std::error::Error for EmptyInputError {}
