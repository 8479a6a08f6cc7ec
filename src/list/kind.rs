//! Container-kind emulation through Generic Associated Types.
//!
//! The combinators in this crate promise to give back "the same kind of
//! container" as the one they were handed, even when the element type
//! changes (`map` over a `VecDeque<i32>` yields a `VecDeque<String>`, never
//! a `Vec<String>`). Rust has no Higher-Kinded Types to talk about
//! `VecDeque<_>` as a bare type constructor, so this module emulates the
//! idea with a Generic Associated Type.
//!
//! # Example
//!
//! ```rust
//! use seqfn::list::SequenceKind;
//!
//! fn rebuild<S: SequenceKind>(_source: &S) -> S::Rebind<usize>
//! where
//!     S::Rebind<usize>: Default,
//! {
//!     Default::default()
//! }
//!
//! let rebuilt: Vec<usize> = rebuild(&vec![1, 2, 3]);
//! assert!(rebuilt.is_empty());
//! ```

use std::collections::{LinkedList, VecDeque};

/// A sequence container viewed as a type constructor.
///
/// `SequenceKind` names the element type a container currently holds and,
/// through [`Rebind`](Self::Rebind), the same container shape applied to a
/// different element type. `Rebind<B>` also carries the construction
/// capability ([`FromIterator`]) that combinators use to materialize their
/// results, which is the Rust rendition of "construct a same-kind sequence
/// of a given length and fill it by position".
///
/// # Laws
///
/// For any `S: SequenceKind`:
///
/// 1. **Consistency**: `S::Rebind<S::Elem>` is the same container type as
///    `S` (up to type equality).
/// 2. **Composition**: `S::Rebind<A>::Rebind<B>` is `S::Rebind<B>`.
pub trait SequenceKind {
    /// The element type this container currently holds.
    type Elem;

    /// The same container shape holding elements of type `B`.
    type Rebind<B>: SequenceKind<Elem = B> + FromIterator<B>;
}

impl<T> SequenceKind for Vec<T> {
    type Elem = T;
    type Rebind<B> = Vec<B>;
}

impl<T> SequenceKind for VecDeque<T> {
    type Elem = T;
    type Rebind<B> = VecDeque<B>;
}

impl<T> SequenceKind for LinkedList<T> {
    type Elem = T;
    type Rebind<B> = LinkedList<B>;
}
