//! The `Sequence` capability trait.
//!
//! A [`Sequence`] is anything the combinators can consume: an ordered,
//! homogeneous container offering a length query, ordered borrowing
//! iteration from either end, and (through [`SequenceKind`] and
//! [`FromIterator`]) reconstruction of a same-kind container for results.
//!
//! Implementations are provided for `Vec`, `VecDeque` and `LinkedList`,
//! covering the contiguous, ring-buffer and node-based container shapes.

use std::collections::{LinkedList, VecDeque};

use super::kind::SequenceKind;

/// An ordered, homogeneous container usable with the list combinators.
///
/// The trait captures exactly the capabilities the combinators need and
/// nothing more:
///
/// - a length query ([`len`](Self::len))
/// - ordered borrowing iteration from the front, reversible for the
///   right-fold family ([`iter`](Self::iter))
/// - construction of a same-kind container from an iterator (the
///   [`FromIterator`] supertrait bound)
///
/// Combinators only ever borrow a `Sequence` immutably and clone elements
/// out of it into freshly built results; no implementation detail of the
/// container leaks through this surface.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::Sequence;
/// use std::collections::VecDeque;
///
/// fn total_len<S: Sequence>(left: &S, right: &S) -> usize {
///     left.len() + right.len()
/// }
///
/// assert_eq!(total_len(&vec![1, 2], &vec![3]), 3);
/// assert_eq!(total_len(&VecDeque::from([1, 2]), &VecDeque::from([3])), 3);
/// ```
pub trait Sequence: SequenceKind + FromIterator<Self::Elem> {
    /// The borrowing iterator over this container's elements.
    ///
    /// Double-ended so the right-fold family can traverse end-to-start
    /// without materializing an intermediate copy; exact-size so result
    /// containers can be allocated up front where the shape allows it.
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Elem> + ExactSizeIterator
    where
        Self: 'a,
        Self::Elem: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns a borrowing iterator from the front of the container.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for Vec<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Iter<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }
}
