//! The `curry2!` and `curry3!` macros.

/// Converts a 2-argument function into curried form.
///
/// `curry2!(f)` produces a closure taking the first argument and returning
/// a closure taking the second: `curry2!(f)(a)(b) == f(a, b)`. The
/// intermediate closure may be stored and applied any number of times.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`] and [`Clone`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ```rust
/// use seqfn::{curry2, list::span};
///
/// let spanned = curry2!(span::<Vec<i32>, _>);
/// let leading_small = spanned(|value: &i32| *value < 3);
///
/// let mixed = vec![1, 2, 9];
/// let large_only = vec![9];
/// assert_eq!(leading_small(&mixed), (vec![1, 2], vec![9]));
/// assert_eq!(leading_small(&large_only), (vec![], vec![9]));
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| function(Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`. Each intermediate closure may be
/// stored and applied any number of times.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`] and [`Clone`]
/// - The first and second argument types must implement [`Clone`]
///
/// # Examples
///
/// ```rust
/// use seqfn::{curry3, list::foldl};
///
/// let folded = curry3!(foldl::<Vec<i32>, i32, _>);
/// let summed = folded(|accumulator: i32, value: &i32| accumulator + value);
/// let summed_from_zero = summed(0);
///
/// let small = vec![1, 2, 3];
/// let tens = vec![10, 20];
/// assert_eq!(summed_from_zero(&small), 6);
/// assert_eq!(summed_from_zero(&tens), 30);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| {
                let function = function.clone();
                let first = Clone::clone(&first);
                move |third| function(Clone::clone(&first), Clone::clone(&second), third)
            }
        }
    }};
}
