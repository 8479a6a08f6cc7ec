//! Function composition and partial application utilities.
//!
//! The list combinators are designed to be chained; this module provides
//! the glue that makes chaining pleasant in point-free caller code:
//!
//! - [`compose!`](crate::compose!): compose functions right-to-left
//!   (mathematical composition)
//! - [`pipe!`](crate::pipe): thread a value through functions left-to-right
//! - [`partial!`](crate::partial): fix some arguments now, supply the rest
//!   later (`__` marks the arguments left open)
//! - [`curry2!`](crate::curry2) / [`curry3!`](crate::curry3): turn a
//!   multi-argument function into nested single-argument closures
//! - [`identity`], [`constant`], [`flip`]: the classic helper combinators
//!
//! # Examples
//!
//! Supplying `span`'s predicate ahead of the sequence:
//!
//! ```rust
//! use seqfn::{list::span, partial};
//!
//! let leading_evens = partial!(span::<Vec<i32>, _>, |value: &i32| value % 2 == 0, __);
//! assert_eq!(leading_evens(&vec![2, 4, 5, 6]), (vec![2, 4], vec![5, 6]));
//! ```
//!
//! Point-free chaining of transforms:
//!
//! ```rust
//! use seqfn::{list::{map, reverse}, pipe};
//!
//! let result = pipe!(
//!     vec![1, 2, 3],
//!     |values| map(|value| value * 10, &values),
//!     |values| reverse(&values),
//! );
//! assert_eq!(result, vec![30, 20, 10]);
//! ```

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod utils;

pub use utils::{constant, flip, identity};
