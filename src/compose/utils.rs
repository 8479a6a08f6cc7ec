//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a function that always returns the same value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit of composition and the function for
/// which `map` is the identity transform: `map(identity, &s) == s`.
///
/// # Examples
///
/// ```rust
/// use seqfn::compose::identity;
/// use seqfn::list::map;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(map(identity, &vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// The value must implement [`Clone`] since the returned function may be
/// called any number of times.
///
/// # Examples
///
/// ```rust
/// use seqfn::compose::constant;
/// use seqfn::list::map;
///
/// let zeroes = map(constant(0), &vec![1, 2, 3]);
/// assert_eq!(zeroes, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and `flip(flip(f))` behaves as `f`. Useful
/// for folding with a combining function written in the opposite argument
/// order.
///
/// # Examples
///
/// ```rust
/// use seqfn::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(subtract(10, 3), 7);
/// assert_eq!(flipped(10, 3), -7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
