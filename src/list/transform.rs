//! Element-wise transforms: `map`, `zip_with`, `reverse`, `intersperse`,
//! `intercalate` and `concat`.
//!
//! Each transform preserves the container kind of its (first) input while
//! possibly changing the element type, performs a single eager pass, and
//! builds its whole result before returning.

use super::sequence::Sequence;

/// Maps a function over every element, preserving length, order and
/// container kind.
///
/// The element type of the result may differ from the input's. Mapping the
/// identity function returns an equal sequence: `map(identity, &s) == s`.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::map;
/// use std::collections::VecDeque;
///
/// let doubled = map(|value| value * 2, &vec![1, 2, 3]);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// // The container kind is preserved even when the element type changes.
/// let rendered: VecDeque<String> =
///     map(|value: i32| value.to_string(), &VecDeque::from([1, 2]));
/// assert_eq!(rendered, VecDeque::from(["1".to_string(), "2".to_string()]));
/// ```
pub fn map<S, B, F>(mut function: F, sequence: &S) -> S::Rebind<B>
where
    S: Sequence,
    S::Elem: Clone,
    F: FnMut(S::Elem) -> B,
{
    sequence
        .iter()
        .map(|element| function(element.clone()))
        .collect()
}

/// Combines two sequences element-wise with a binary function.
///
/// The result takes its container kind from `left` and has length
/// `min(left.len(), right.len())`: a length mismatch is not an error, the
/// longer input is silently truncated.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::zip_with;
///
/// let sums = zip_with(|a, b| a + b, &vec![1, 2, 3], &vec![10, 20]);
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub fn zip_with<S1, S2, B, F>(mut function: F, left: &S1, right: &S2) -> S1::Rebind<B>
where
    S1: Sequence,
    S2: Sequence,
    S1::Elem: Clone,
    S2::Elem: Clone,
    F: FnMut(S1::Elem, S2::Elem) -> B,
{
    left.iter()
        .zip(right.iter())
        .map(|(first, second)| function(first.clone(), second.clone()))
        .collect()
}

/// Reverses the element order.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::reverse;
///
/// assert_eq!(reverse(&vec![1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn reverse<S>(sequence: &S) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    sequence.iter().rev().cloned().collect()
}

/// Inserts a separator between every pair of adjacent elements.
///
/// The result has length `2 * sequence.len() - 1` for non-empty input and
/// `0` for empty input.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::intersperse;
///
/// assert_eq!(intersperse(4, &vec![1, 2, 3]), vec![1, 4, 2, 4, 3]);
/// assert_eq!(intersperse(4, &vec![1]), vec![1]);
/// assert_eq!(intersperse(4, &Vec::<i32>::new()), vec![]);
/// ```
pub fn intersperse<S>(separator: S::Elem, sequence: &S) -> S
where
    S: Sequence,
    S::Elem: Clone,
{
    let mut elements = sequence.iter();
    let Some(first) = elements.next() else {
        return std::iter::empty().collect();
    };

    std::iter::once(first.clone())
        .chain(elements.flat_map(|element| [separator.clone(), element.clone()]))
        .collect()
}

/// Joins a sequence of sequences with a separator sequence, then flattens.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::intercalate;
///
/// let joined = intercalate(&vec![4], &vec![vec![1], vec![2], vec![3]]);
/// assert_eq!(joined, vec![1, 4, 2, 4, 3]);
///
/// let joined = intercalate(&vec![0, 0], &vec![vec![1, 2], vec![3]]);
/// assert_eq!(joined, vec![1, 2, 0, 0, 3]);
/// ```
pub fn intercalate<S, C>(separator: &S, sequences: &C) -> S
where
    S: Sequence,
    S::Elem: Clone,
    C: Sequence<Elem = S>,
{
    let mut outer = sequences.iter();
    let Some(first) = outer.next() else {
        return std::iter::empty().collect();
    };

    let mut joined: Vec<S::Elem> = first.iter().cloned().collect();
    for sequence in outer {
        joined.extend(separator.iter().cloned());
        joined.extend(sequence.iter().cloned());
    }

    joined.into_iter().collect()
}

/// Flattens a sequence of sequences into one sequence.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::concat;
///
/// assert_eq!(concat(&vec![vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
/// ```
pub fn concat<S, C>(sequences: &C) -> S
where
    S: Sequence,
    S::Elem: Clone,
    C: Sequence<Elem = S>,
{
    sequences
        .iter()
        .flat_map(|sequence| sequence.iter().cloned())
        .collect()
}
