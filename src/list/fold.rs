//! The fold family: `foldl`, `foldl1`, `foldr`, `foldr1`, plus `minimum`
//! and `scanl`.
//!
//! Left and right folds are mirror images differing only in traversal
//! direction, and the self-seeding variants differ from the seeded ones
//! only in where the initial accumulator comes from. All four are therefore
//! thin wrappers over one direction-parameterized engine rather than four
//! separate bodies.
//!
//! The combining function is always applied as `function(accumulator,
//! element)`, in both directions; "right" only changes which end of the
//! sequence the traversal starts from.

use super::error::EmptyInputError;
use super::sequence::Sequence;

/// Traversal direction of the fold engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// A sequence iterator running in either direction with a single type.
enum Directed<I> {
    Forward(I),
    Backward(std::iter::Rev<I>),
}

impl<I: DoubleEndedIterator> Iterator for Directed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Forward(iter) => iter.next(),
            Self::Backward(iter) => iter.next(),
        }
    }
}

fn directed<S: Sequence>(sequence: &S, direction: Direction) -> Directed<S::Iter<'_>> {
    match direction {
        Direction::Forward => Directed::Forward(sequence.iter()),
        Direction::Backward => Directed::Backward(sequence.iter().rev()),
    }
}

/// The single fold engine behind the seeded variants.
fn fold_seeded<S, B, F>(direction: Direction, mut function: F, seed: B, sequence: &S) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Elem) -> B,
{
    directed(sequence, direction).fold(seed, |accumulator, element| {
        function(accumulator, element)
    })
}

/// The single fold engine behind the self-seeding variants, which take the
/// first element encountered (in traversal order) as the seed.
fn fold_self_seeded<S, F>(
    direction: Direction,
    operation: &'static str,
    mut function: F,
    sequence: &S,
) -> Result<S::Elem, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
    F: FnMut(S::Elem, &S::Elem) -> S::Elem,
{
    let mut elements = directed(sequence, direction);
    let seed = elements
        .next()
        .cloned()
        .ok_or(EmptyInputError::new(operation))?;

    Ok(elements.fold(seed, |accumulator, element| function(accumulator, element)))
}

/// Folds a sequence start-to-end with an explicit seed.
///
/// The accumulator starts at `seed` and is updated as
/// `function(accumulator, element)` for each element in order. Folding an
/// empty sequence returns the seed unchanged.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::foldl;
///
/// let sum = foldl(|accumulator, value| accumulator + value, 0, &vec![1, 2, 3]);
/// assert_eq!(sum, 6);
///
/// let untouched = foldl(|accumulator, value| accumulator + value, 7, &Vec::<i32>::new());
/// assert_eq!(untouched, 7);
/// ```
pub fn foldl<S, B, F>(function: F, seed: B, sequence: &S) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Elem) -> B,
{
    fold_seeded(Direction::Forward, function, seed, sequence)
}

/// Folds a sequence end-to-start with an explicit seed.
///
/// Identical to [`foldl`] except the traversal starts from the last
/// element. Folding an empty sequence returns the seed unchanged.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::foldr;
///
/// let visited = foldr(
///     |mut order, value: &i32| {
///         order.push(*value);
///         order
///     },
///     Vec::new(),
///     &vec![1, 2, 3],
/// );
/// assert_eq!(visited, vec![3, 2, 1]);
/// ```
pub fn foldr<S, B, F>(function: F, seed: B, sequence: &S) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Elem) -> B,
{
    fold_seeded(Direction::Backward, function, seed, sequence)
}

/// Folds a sequence start-to-end, seeded with its first element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::foldl1;
///
/// let folded = foldl1(
///     |accumulator, value| accumulator + value + 42,
///     &vec![42, 1, 2, 3],
/// );
/// assert_eq!(folded, Ok(174));
/// ```
pub fn foldl1<S, F>(function: F, sequence: &S) -> Result<S::Elem, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
    F: FnMut(S::Elem, &S::Elem) -> S::Elem,
{
    fold_self_seeded(Direction::Forward, "foldl1", function, sequence)
}

/// Folds a sequence end-to-start, seeded with its last element.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::foldr1;
///
/// let largest = foldr1(|accumulator, value| accumulator.max(*value), &vec![3, 1, 2]);
/// assert_eq!(largest, Ok(3));
/// ```
pub fn foldr1<S, F>(function: F, sequence: &S) -> Result<S::Elem, EmptyInputError>
where
    S: Sequence,
    S::Elem: Clone,
    F: FnMut(S::Elem, &S::Elem) -> S::Elem,
{
    fold_self_seeded(Direction::Backward, "foldr1", function, sequence)
}

/// Returns the smallest element per the natural ordering of the element
/// type.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence holds no elements.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::minimum;
///
/// assert_eq!(minimum(&vec![3, 1, 2]), Ok(1));
/// assert!(minimum(&Vec::<i32>::new()).is_err());
/// ```
pub fn minimum<S>(sequence: &S) -> Result<S::Elem, EmptyInputError>
where
    S: Sequence,
    S::Elem: Ord + Clone,
{
    sequence
        .iter()
        .min()
        .cloned()
        .ok_or(EmptyInputError::new("minimum"))
}

/// Returns the successive accumulator states of a left fold.
///
/// The result starts with `seed` and appends `function(accumulator,
/// element)` for each element in order, so its length is always
/// `sequence.len() + 1` and its last element equals
/// `foldl(function, seed, sequence)`.
///
/// # Examples
///
/// ```rust
/// use seqfn::list::scanl;
///
/// let states = scanl(|accumulator, value| accumulator + value, 0, &vec![1, 2, 3]);
/// assert_eq!(states, vec![0, 1, 3, 6]);
/// ```
pub fn scanl<S, B, F>(mut function: F, seed: B, sequence: &S) -> S::Rebind<B>
where
    S: Sequence,
    B: Clone,
    F: FnMut(B, &S::Elem) -> B,
{
    let mut accumulator = seed;
    let mut states = Vec::with_capacity(sequence.len() + 1);
    states.push(accumulator.clone());

    for element in sequence.iter() {
        accumulator = function(accumulator, element);
        states.push(accumulator.clone());
    }

    states.into_iter().collect()
}
