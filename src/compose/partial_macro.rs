//! The `partial!` macro for partial function application.

/// Partially applies arguments to a function.
///
/// Write `__` (double underscore) for each argument that should remain a
/// parameter of the resulting closure; every other argument is fixed now.
/// `__` is matched as a literal token by the macro, so there is nothing to
/// import.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (a thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// The same patterns apply to 3-argument functions.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`], since the resulting closure may
///   be called multiple times
/// - The original function must implement [`Fn`]
///
/// # Examples
///
/// ## Supplying a predicate ahead of the sequence
///
/// ```rust
/// use seqfn::{list::span, partial};
///
/// let leading_evens = partial!(span::<Vec<i32>, _>, |value: &i32| value % 2 == 0, __);
/// let even_prefix = vec![2, 4, 5, 6];
/// let odd_first = vec![1, 2, 3];
/// assert_eq!(leading_evens(&even_prefix), (vec![2, 4], vec![5, 6]));
/// assert_eq!(leading_evens(&odd_first), (vec![], vec![1, 2, 3]));
/// ```
///
/// ## Fixing a fold's function and seed
///
/// ```rust
/// use seqfn::{list::foldl, partial};
///
/// let sum = partial!(foldl::<Vec<i32>, i32, _>, |accumulator: i32, value: &i32| accumulator + value, 0, __);
/// assert_eq!(sum(&vec![1, 2, 3]), 6);
/// ```
///
/// ## Creating a thunk
///
/// ```rust
/// use seqfn::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let thunk = partial!(add, 3, 5);
/// assert_eq!(thunk(), 8);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (most specific patterns first)
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};

    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, second.clone(), third)
    }};

    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| function(first.clone(), second.clone(), third)
    }};

    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| function(first.clone(), second, third.clone())
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| function(first, second.clone(), third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || function(first.clone(), second.clone(), third.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, second.clone())
    }};

    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || function(first.clone(), second.clone())
    }};
}
