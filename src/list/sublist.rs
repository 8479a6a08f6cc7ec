//! Sublist extraction: `span`.

use super::sequence::Sequence;

/// Splits a sequence into its longest prefix satisfying a predicate and
/// the remainder.
///
/// Scans from the start while `predicate(element)` holds. The prefix is the
/// longest initial run of matching elements; the suffix is everything from
/// the first non-matching element onward. Either part may be empty, and
/// appending the two parts always reconstructs the input.
///
/// `span` composes: supply the predicate ahead of the sequence with
/// [`partial!`](crate::partial) or [`curry2!`](crate::curry2) to obtain a
/// not-yet-fully-applied operation.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::span;
///
/// let is_even = |value: &i32| value % 2 == 0;
/// assert_eq!(span(is_even, &vec![2, 4, 5, 6]), (vec![2, 4], vec![5, 6]));
/// assert_eq!(span(is_even, &vec![1, 2, 3]), (vec![], vec![1, 2, 3]));
/// assert_eq!(span(is_even, &Vec::<i32>::new()), (vec![], vec![]));
/// ```
///
/// ## Partial application
///
/// ```rust
/// use seqfn::{list::span, partial};
///
/// let leading_evens = partial!(span::<Vec<i32>, _>, |value: &i32| value % 2 == 0, __);
/// let mixed = vec![2, 4, 5];
/// let even_only = vec![8];
/// assert_eq!(leading_evens(&mixed), (vec![2, 4], vec![5]));
/// assert_eq!(leading_evens(&even_only), (vec![8], vec![]));
/// ```
pub fn span<S, P>(mut predicate: P, sequence: &S) -> (S, S)
where
    S: Sequence,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    let boundary = sequence
        .iter()
        .take_while(|element| predicate(*element))
        .count();

    let prefix = sequence.iter().take(boundary).cloned().collect();
    let suffix = sequence.iter().skip(boundary).cloned().collect();
    (prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::LinkedList;

    #[rstest]
    #[case(vec![2, 4, 5, 6], (vec![2, 4], vec![5, 6]))]
    #[case(vec![1, 2, 3], (vec![], vec![1, 2, 3]))]
    #[case(vec![], (vec![], vec![]))]
    #[case(vec![2, 4, 6], (vec![2, 4, 6], vec![]))]
    fn span_splits_at_the_first_non_match(
        #[case] input: Vec<i32>,
        #[case] expected: (Vec<i32>, Vec<i32>),
    ) {
        assert_eq!(span(|value| value % 2 == 0, &input), expected);
    }

    #[test]
    fn span_only_consults_the_predicate_up_to_the_boundary() {
        // The first non-match ends the scan; later matches stay in the suffix.
        let (prefix, suffix) = span(|value| *value < 3, &LinkedList::from([1, 2, 9, 1]));
        assert_eq!(prefix, LinkedList::from([1, 2]));
        assert_eq!(suffix, LinkedList::from([9, 1]));
    }
}
