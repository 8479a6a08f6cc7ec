//! The `compose!` and `pipe!` macros.

/// Composes functions right-to-left.
///
/// `compose!(f, g)` produces a closure equivalent to `|input| f(g(input))`;
/// the rightmost function is applied first, as in mathematical composition.
/// Any number of functions from one upward is accepted.
///
/// [`identity`](crate::compose::identity) is the unit of composition:
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```rust
/// use seqfn::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// let double_then_add_one = compose!(add_one, double);
/// assert_eq!(double_then_add_one(5), 11);
/// ```
///
/// ## With list combinators
///
/// ```rust
/// use seqfn::{compose, list::{minimum, reverse}};
///
/// let smallest_of_reversed = compose!(
///     |values: Vec<i32>| minimum(&values),
///     |values: &Vec<i32>| reverse(values),
/// );
/// assert_eq!(smallest_of_reversed(&vec![3, 1, 2]), Ok(1));
/// ```
#[macro_export]
macro_rules! compose {
    // A single function composes with nothing; hand it back unchanged.
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

/// Threads a value through functions left-to-right.
///
/// `pipe!(value, f, g)` evaluates to `g(f(value))`: the first argument is
/// the starting value, every following argument is a function applied to
/// the result so far.
///
/// # Examples
///
/// ```rust
/// use seqfn::pipe;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// assert_eq!(pipe!(5, double, add_one), 11);
/// assert_eq!(pipe!(5, add_one, double), 12);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {{
        let function = $function;
        $crate::pipe!(function($value) $(, $rest)*)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn compose_applies_right_to_left() {
        let double = |value: i32| value * 2;
        let add_one = |value: i32| value + 1;

        let composed = compose!(add_one, double);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn compose_of_one_function_is_that_function() {
        let double = |value: i32| value * 2;
        assert_eq!(compose!(double)(21), 42);
    }

    #[test]
    fn compose_chains_three_functions() {
        let add_one = |value: i32| value + 1;
        let double = |value: i32| value * 2;
        let negate = |value: i32| -value;

        // add_one(double(negate(3))) = add_one(-6) = -5
        assert_eq!(compose!(add_one, double, negate)(3), -5);
    }

    #[test]
    fn pipe_applies_left_to_right() {
        let result = pipe!(3, |value: i32| value + 1, |value: i32| value * 2);
        assert_eq!(result, 8);
    }

    #[test]
    fn pipe_with_no_functions_is_the_value() {
        assert_eq!(pipe!(42), 42);
    }
}
