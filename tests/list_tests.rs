//! Behavior tests for the runtime list combinators.
//!
//! Every contract is exercised across all three provided container shapes
//! (`Vec`, `VecDeque`, `LinkedList`) through generic helpers: the
//! combinators promise identical semantics regardless of the container's
//! iterator capabilities.

#![cfg(feature = "list")]

use seqfn::list::{
    EmptyInputError, Sequence, append, concat, foldl, foldl1, foldr, foldr1, head, init,
    intercalate, intersperse, last, length, map, minimum, null, reverse, scanl, span, tail,
    zip_with,
};
use std::collections::{LinkedList, VecDeque};

/// Builds a container of kind `S` from a slice of elements.
fn build<S>(elements: &[i32]) -> S
where
    S: Sequence<Elem = i32>,
{
    elements.iter().copied().collect()
}

// =============================================================================
// Basic operations
// =============================================================================

fn check_basic_operations<S>()
where
    S: Sequence<Elem = i32> + PartialEq + std::fmt::Debug,
{
    let values: S = build(&[1, 2, 3]);

    assert_eq!(append(&values, &build(&[4, 5, 6])), build(&[1, 2, 3, 4, 5, 6]));
    assert_eq!(head(&values), Ok(1));
    assert_eq!(last(&values), Ok(3));
    assert_eq!(tail(&values), Ok(build(&[2, 3])));
    assert_eq!(init(&values), Ok(build(&[1, 2])));
    assert!(!null(&values));
    assert!(null(&build::<S>(&[])));
    assert_eq!(length(&values), 3);
}

#[test]
fn basic_operations_across_container_kinds() {
    check_basic_operations::<Vec<i32>>();
    check_basic_operations::<VecDeque<i32>>();
    check_basic_operations::<LinkedList<i32>>();
}

fn check_empty_input_errors<S>()
where
    S: Sequence<Elem = i32> + PartialEq + std::fmt::Debug,
{
    let empty: S = build(&[]);

    assert_eq!(head(&empty), Err(EmptyInputError::new("head")));
    assert_eq!(last(&empty), Err(EmptyInputError::new("last")));
    assert_eq!(tail(&empty), Err(EmptyInputError::new("tail")));
    assert_eq!(init(&empty), Err(EmptyInputError::new("init")));
    assert_eq!(minimum(&empty), Err(EmptyInputError::new("minimum")));
    assert_eq!(
        foldl1(|accumulator, value| accumulator + value, &empty),
        Err(EmptyInputError::new("foldl1"))
    );
    assert_eq!(
        foldr1(|accumulator, value| accumulator + value, &empty),
        Err(EmptyInputError::new("foldr1"))
    );
}

#[test]
fn empty_input_errors_across_container_kinds() {
    check_empty_input_errors::<Vec<i32>>();
    check_empty_input_errors::<VecDeque<i32>>();
    check_empty_input_errors::<LinkedList<i32>>();
}

// =============================================================================
// Transforms
// =============================================================================

fn check_transforms<S>()
where
    S: Sequence<Elem = i32, Rebind<i32> = S> + PartialEq + std::fmt::Debug,
{
    let values: S = build(&[1, 2, 3]);

    assert_eq!(reverse(&values), build(&[3, 2, 1]));
    assert_eq!(intersperse(4, &values), build(&[1, 4, 2, 4, 3]));
    assert_eq!(
        zip_with(|a, b| a + b, &values, &build::<S>(&[10, 20])),
        build::<S>(&[11, 22])
    );
    assert_eq!(scanl(|accumulator, value| accumulator + value, 0, &values), build::<S>(&[0, 1, 3, 6]));
}

#[test]
fn transforms_across_container_kinds() {
    check_transforms::<Vec<i32>>();
    check_transforms::<VecDeque<i32>>();
    check_transforms::<LinkedList<i32>>();
}

#[test]
fn map_scales_elements() {
    let scaled = map(|value: f64| value * 1337.42, &vec![42.0, 1337.0]);
    assert_eq!(scaled, vec![56171.64, 1788130.54]);
}

#[test]
fn intercalate_matches_intersperse_then_concat() {
    let parts = VecDeque::from([
        VecDeque::from([1]),
        VecDeque::from([2]),
        VecDeque::from([3]),
    ]);
    assert_eq!(
        intercalate(&VecDeque::from([4]), &parts),
        VecDeque::from([1, 4, 2, 4, 3])
    );
}

#[test]
fn concat_flattens_one_level() {
    let nested = LinkedList::from([LinkedList::from([1, 2]), LinkedList::from([3, 4])]);
    assert_eq!(concat(&nested), LinkedList::from([1, 2, 3, 4]));
}

// =============================================================================
// Folds
// =============================================================================

fn check_folds<S>()
where
    S: Sequence<Elem = i32> + PartialEq + std::fmt::Debug,
{
    let fold_plus_42 = |accumulator: i32, value: &i32| accumulator + value + 42;

    assert_eq!(foldl(fold_plus_42, 42, &build::<S>(&[1, 2, 3])), 174);
    assert_eq!(foldl1(fold_plus_42, &build::<S>(&[42, 1, 2, 3])), Ok(174));
    assert_eq!(foldr(fold_plus_42, 42, &build::<S>(&[1, 2, 3])), 174);
    assert_eq!(foldr1(fold_plus_42, &build::<S>(&[42, 1, 2, 3])), Ok(174));

    assert_eq!(
        foldl(|accumulator, value| accumulator + value, 0, &build::<S>(&[1, 2, 3])),
        6
    );
}

#[test]
fn folds_across_container_kinds() {
    check_folds::<Vec<i32>>();
    check_folds::<VecDeque<i32>>();
    check_folds::<LinkedList<i32>>();
}

#[test]
fn minimum_picks_the_smallest_element() {
    assert_eq!(minimum(&vec![3, 1, 2]), Ok(1));
    assert_eq!(minimum(&LinkedList::from([3, 1, 2])), Ok(1));
}

// =============================================================================
// Span
// =============================================================================

fn check_span<S>()
where
    S: Sequence<Elem = i32> + PartialEq + std::fmt::Debug,
{
    let is_even = |value: &i32| value % 2 == 0;

    assert_eq!(
        span(is_even, &build::<S>(&[2, 4, 5, 6])),
        (build(&[2, 4]), build(&[5, 6]))
    );
    assert_eq!(
        span(is_even, &build::<S>(&[1, 2, 3])),
        (build(&[]), build(&[1, 2, 3]))
    );
    assert_eq!(span(is_even, &build::<S>(&[])), (build(&[]), build(&[])));
}

#[test]
fn span_across_container_kinds() {
    check_span::<Vec<i32>>();
    check_span::<VecDeque<i32>>();
    check_span::<LinkedList<i32>>();
}

// =============================================================================
// Purity: inputs are never mutated
// =============================================================================

#[test]
fn combinators_leave_their_inputs_untouched() {
    let values = vec![3, 1, 2];

    let _ = map(|value| value * 2, &values);
    let _ = reverse(&values);
    let _ = span(|value| *value > 0, &values);
    let _ = foldl(|accumulator, value| accumulator + value, 0, &values);
    let _ = minimum(&values);

    assert_eq!(values, vec![3, 1, 2]);
}
