//! Integration tests for the composition utilities, exercised against the
//! list combinators they exist to glue together.

#![cfg(all(feature = "compose", feature = "list"))]

use seqfn::compose::{constant, flip, identity};
use seqfn::list::{foldl, map, reverse, span};
use seqfn::{compose, curry2, partial, pipe};

#[test]
fn partial_supplies_spans_predicate_ahead_of_the_sequence() {
    let leading_evens = partial!(span::<Vec<i32>, _>, |value: &i32| value % 2 == 0, __);

    let mixed = vec![2, 4, 5, 6];
    let odd_first = vec![1, 2, 3];
    let empty = vec![];
    assert_eq!(leading_evens(&mixed), (vec![2, 4], vec![5, 6]));
    assert_eq!(leading_evens(&odd_first), (vec![], vec![1, 2, 3]));
    assert_eq!(leading_evens(&empty), (vec![], vec![]));
}

#[test]
fn curry2_supplies_spans_predicate_ahead_of_the_sequence() {
    let spanned = curry2!(span::<Vec<i32>, _>);
    let leading_small = spanned(|value: &i32| *value < 3);

    assert_eq!(leading_small(&vec![1, 2, 9, 1]), (vec![1, 2], vec![9, 1]));
}

#[test]
fn partial_fixes_a_folds_function_and_seed() {
    let sum = partial!(
        foldl::<Vec<i32>, i32, _>,
        |accumulator: i32, value: &i32| accumulator + value,
        0,
        __
    );

    let values = vec![1, 2, 3];
    let empty = vec![];
    assert_eq!(sum(&values), 6);
    assert_eq!(sum(&empty), 0);
}

#[test]
fn pipe_chains_combinators_left_to_right() {
    let result = pipe!(
        vec![3, 1, 2],
        |values| map(|value| value * 10, &values),
        |values| reverse(&values),
    );
    assert_eq!(result, vec![20, 10, 30]);
}

#[test]
fn compose_chains_combinators_right_to_left() {
    let reverse_then_double = compose!(
        |values: Vec<i32>| map(|value| value * 2, &values),
        |values: &Vec<i32>| reverse(values),
    );
    assert_eq!(reverse_then_double(&vec![1, 2, 3]), vec![6, 4, 2]);
}

#[test]
fn identity_is_the_unit_of_map() {
    assert_eq!(map(identity, &vec![1, 2, 3]), vec![1, 2, 3]);
}

#[test]
fn constant_replaces_every_element() {
    assert_eq!(map(constant(0), &vec![1, 2, 3]), vec![0, 0, 0]);
}

#[test]
fn flip_reverses_a_folds_argument_order() {
    let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
    let flipped = flip(subtract);

    assert_eq!(subtract(10, 3), 7);
    assert_eq!(flipped(10, 3), -7);
}
