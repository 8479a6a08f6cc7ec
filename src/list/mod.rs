//! Runtime list combinators over generic sequence containers.
//!
//! Every combinator in this module is a pure, generic higher-order function
//! over any [`Sequence`]: it borrows its inputs read-only, performs a
//! single eager pass, and returns a freshly built container of the same
//! kind (or a scalar). Implementations are provided for `Vec`, `VecDeque`
//! and `LinkedList`.
//!
//! # Operations
//!
//! - Basic: [`append`], [`head`], [`last`], [`tail`], [`init`], [`null`],
//!   [`length`]
//! - Folds: [`foldl`], [`foldl1`], [`foldr`], [`foldr1`], [`minimum`],
//!   [`scanl`]
//! - Transforms: [`map`], [`zip_with`], [`reverse`], [`intersperse`],
//!   [`intercalate`], [`concat`]
//! - Sublist extraction: [`span`]
//!
//! # Error handling
//!
//! Operations whose contract requires at least one element (`minimum`,
//! `foldl1`, `foldr1`, `head`, `last`, `tail`, `init`) return
//! `Result<_, EmptyInputError>`; everything else is total, including the
//! seeded folds (which return the seed on empty input) and `zip_with`
//! (which silently truncates to the shorter input).
//!
//! # Example
//!
//! ```rust
//! use seqfn::list::{append, foldl1, init, last};
//! use std::collections::VecDeque;
//!
//! let values = VecDeque::from([3, 1, 2]);
//!
//! // init and last are inverses of appending a final element.
//! let rebuilt = append(
//!     &init(&values).unwrap(),
//!     &VecDeque::from([last(&values).unwrap()]),
//! );
//! assert_eq!(rebuilt, values);
//!
//! let smallest = foldl1(|accumulator, value| accumulator.min(*value), &values);
//! assert_eq!(smallest, Ok(1));
//! ```

mod basic;
mod error;
mod fold;
mod kind;
mod sequence;
mod sublist;
mod transform;

pub use basic::{append, head, init, last, length, null, tail};
pub use error::EmptyInputError;
pub use fold::{foldl, foldl1, foldr, foldr1, minimum, scanl};
pub use kind::SequenceKind;
pub use sequence::Sequence;
pub use sublist::span;
pub use transform::{concat, intercalate, intersperse, map, reverse, zip_with};
