//! # seqfn
//!
//! Generic functional list combinators over sequence containers, with a
//! compile-time counterpart for fixed-size arrays.
//!
//! ## Overview
//!
//! This library provides the classic list-combinator vocabulary (map, fold,
//! zip, span, minimum, ...) as pure, generic functions that work uniformly
//! across the standard sequence containers. It includes:
//!
//! - **Runtime combinators**: folds, transforms and sublist extraction over
//!   any type implementing the [`list::Sequence`] capability trait
//!   (`Vec`, `VecDeque`, `LinkedList` out of the box)
//! - **Compile-time combinators**: the same operation set as `const fn`s over
//!   fixed-size arrays, usable in constant-evaluation contexts
//! - **Function Composition**: compose!, pipe!, partial!, curry! macros
//!
//! Every combinator borrows its inputs read-only, performs a single eager
//! pass and returns a freshly built value. No combinator mutates its input
//! or retains a reference past the call.
//!
//! ## Feature Flags
//!
//! - `list`: runtime combinators over generic sequences
//! - `fixed`: compile-time combinators over fixed-size arrays
//! - `compose`: function composition utilities
//!
//! All three are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use seqfn::list::{foldl, map, span};
//!
//! let values = vec![2, 4, 5, 6];
//! let doubled = map(|value| value * 2, &values);
//! assert_eq!(doubled, vec![4, 8, 10, 12]);
//!
//! let (evens, rest) = span(|value: &i32| value % 2 == 0, &values);
//! assert_eq!((evens, rest), (vec![2, 4], vec![5, 6]));
//!
//! let sum = foldl(|accumulator, value| accumulator + value, 0, &values);
//! assert_eq!(sum, 17);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, traits and macros.
///
/// # Usage
///
/// ```rust
/// use seqfn::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "fixed")]
pub mod fixed;

#[cfg(feature = "compose")]
pub mod compose;
