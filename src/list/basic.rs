//! Basic list operations: `append`, `head`, `last`, `tail`, `init`,
//! `null` and `length`.
//!
//! Every operation borrows its input read-only, clones the elements it
//! needs into a freshly built container of the same kind, and returns. The
//! partial operations (`head`, `last`, `tail`, `init`) check emptiness
//! before building anything, so a caller never observes a partial result.

use super::error::EmptyInputError;
use super::sequence::Sequence;

/// Concatenates two sequences of the same kind.
///
/// The result holds all of `left`'s elements followed by all of `right`'s,
/// with length `left.len() + right.len()`. Concatenation is associative:
/// `append(&append(&a, &b), &c) == append(&a, &append(&b, &c))`.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::append;
///
/// assert_eq!(append(&vec![1, 2, 3], &vec![4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(append(&vec![], &vec![1]), vec![1]);
/// ```
pub fn append<S>(left: &S, right: &S) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    left.iter().chain(right.iter()).cloned().collect()
}

/// Returns the first element of a sequence.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::head;
///
/// assert_eq!(head(&vec![1, 2, 3]), Ok(1));
/// assert!(head(&Vec::<i32>::new()).is_err());
/// ```
pub fn head<S>(sequence: &S) -> Result<S::Elem, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
{
    sequence
        .iter()
        .next()
        .cloned()
        .ok_or(EmptyInputError::new("head"))
}

/// Returns the last element of a sequence.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::last;
///
/// assert_eq!(last(&vec![1, 2, 3]), Ok(3));
/// ```
pub fn last<S>(sequence: &S) -> Result<S::Elem, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
{
    sequence
        .iter()
        .next_back()
        .cloned()
        .ok_or(EmptyInputError::new("last"))
}

/// Returns all elements but the first, preserving order.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements. The
/// tail of a one-element sequence is the empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::tail;
///
/// assert_eq!(tail(&vec![1, 2, 3]), Ok(vec![2, 3]));
/// assert_eq!(tail(&vec![1]), Ok(vec![]));
/// ```
pub fn tail<S>(sequence: &S) -> Result<S, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
{
    if sequence.is_empty() {
        return Err(EmptyInputError::new("tail"));
    }
    Ok(sequence.iter().skip(1).cloned().collect())
}

/// Returns all elements but the last, preserving order.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements. The
/// init of a one-element sequence is the empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::init;
///
/// assert_eq!(init(&vec![1, 2, 3]), Ok(vec![1, 2]));
/// ```
pub fn init<S>(sequence: &S) -> Result<S, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
{
    if sequence.is_empty() {
        return Err(EmptyInputError::new("init"));
    }
    Ok(sequence.iter().take(sequence.len() - 1).cloned().collect())
}

/// Returns whether a sequence holds no elements.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::null;
///
/// assert!(null(&Vec::<i32>::new()));
/// assert!(!null(&vec![1, 2, 3]));
/// ```
pub fn null<S: Sequence>(sequence: &S) -> bool {
    sequence.is_empty()
}

/// Returns the number of elements in a sequence.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::length;
///
/// assert_eq!(length(&vec![1, 2, 3]), 3);
/// ```
pub fn length<S: Sequence>(sequence: &S) -> usize {
    sequence.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{LinkedList, VecDeque};

    #[test]
    fn append_concatenates_in_order() {
        assert_eq!(
            append(&VecDeque::from([1, 2, 3]), &VecDeque::from([4, 5, 6])),
            VecDeque::from([1, 2, 3, 4, 5, 6])
        );
        assert_eq!(
            append(&LinkedList::from([1]), &LinkedList::from([2])),
            LinkedList::from([1, 2])
        );
    }

    #[test]
    fn partial_operations_reject_empty_input() {
        let empty: Vec<i32> = vec![];
        assert_eq!(head(&empty), Err(EmptyInputError::new("head")));
        assert_eq!(last(&empty), Err(EmptyInputError::new("last")));
        assert_eq!(tail(&empty), Err(EmptyInputError::new("tail")));
        assert_eq!(init(&empty), Err(EmptyInputError::new("init")));
    }

    #[test]
    fn tail_and_init_drop_exactly_one_element() {
        assert_eq!(tail(&LinkedList::from([1, 2, 3])), Ok(LinkedList::from([2, 3])));
        assert_eq!(init(&VecDeque::from([1, 2, 3])), Ok(VecDeque::from([1, 2])));
    }
}
