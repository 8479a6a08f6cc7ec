//! Compile-time list combinators over fixed-size arrays.
//!
//! The same basic operation set as [`crate::list`], specialized to
//! sequences whose length is part of their type (`[T; N]`) and implemented
//! as `const fn`s, so every operation is evaluable during translation and
//! its result can feed `const` items and static assertions:
//!
//! ```rust
//! use seqfn::fixed::{append, head, length};
//!
//! const JOINED: [i32; 6] = append([1, 2, 3], [4, 5, 6]);
//! const FIRST: i32 = head(JOINED);
//!
//! assert_eq!(JOINED, [1, 2, 3, 4, 5, 6]);
//! assert_eq!(FIRST, 1);
//! assert_eq!(length(&JOINED), 6);
//! ```
//!
//! # Static rejection of empty-input misuse
//!
//! Where the runtime family returns an `EmptyInputError`, this family
//! rejects the misuse before the program ever runs: the length is a const
//! generic, so `head`, `last`, `tail` and `init` assert `N > 0` in an
//! inline `const` block, turning a zero-length call site into a
//! translation error instead of a runtime fault:
//!
//! ```compile_fail
//! use seqfn::fixed::head;
//!
//! // The empty array has no first element; this does not compile.
//! let _ = head::<i32, 0>([]);
//! ```
//!
//! Output lengths are likewise part of the signature: `tail`/`init` return
//! `[T; L]` with `L == N - 1`, and `append` returns `[T; L]` with
//! `L == N + M`, both checked at translation time. The caller names `L`
//! (usually through inference from a type annotation).
//!
//! Elements must be `Copy` where an output array is built: constant
//! evaluation offers no heap, so results are filled in place starting from
//! a copied seed element.

/// Concatenates two fixed-size arrays.
///
/// The output length `L` must equal `N + M`; any other instantiation fails
/// to compile. Concatenation is associative. Appending two empty arrays is
/// statically rejected as well: the result would be `[]`, which the caller
/// can write directly.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::append;
///
/// const JOINED: [i32; 6] = append([1, 2, 3], [4, 5, 6]);
/// assert_eq!(JOINED, [1, 2, 3, 4, 5, 6]);
///
/// // Either side may be empty.
/// assert_eq!(append::<_, 0, 1, 1>([], [42]), [42]);
/// ```
///
/// A wrong output length is a translation error:
///
/// ```compile_fail
/// use seqfn::fixed::append;
///
/// const WRONG: [i32; 5] = append([1, 2, 3], [4, 5, 6]);
/// ```
#[must_use]
pub const fn append<T: Copy, const N: usize, const M: usize, const L: usize>(
    left: [T; N],
    right: [T; M],
) -> [T; L] {
    const {
        assert!(L == N + M, "append: output length must be the sum of the input lengths");
        assert!(L > 0, "append: appending two empty lists; write `[]` directly");
    }

    let seed = if N > 0 { left[0] } else { right[0] };
    let mut result = [seed; L];

    let mut index = 0;
    while index < N {
        result[index] = left[index];
        index += 1;
    }
    while index < L {
        result[index] = right[index - N];
        index += 1;
    }

    result
}

/// Returns the first element of a non-empty fixed-size array.
///
/// Calling this with `N == 0` fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::head;
///
/// const FIRST: i32 = head([42, 1337, 10]);
/// assert_eq!(FIRST, 42);
/// ```
#[must_use]
pub const fn head<T: Copy, const N: usize>(list: [T; N]) -> T {
    const {
        assert!(N > 0, "head: empty list");
    }

    list[0]
}

/// Returns the last element of a non-empty fixed-size array.
///
/// Calling this with `N == 0` fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::last;
///
/// const FINAL: i32 = last([42, 1337, 10]);
/// assert_eq!(FINAL, 10);
/// ```
///
/// ```compile_fail
/// use seqfn::fixed::last;
///
/// let _ = last::<i32, 0>([]);
/// ```
#[must_use]
pub const fn last<T: Copy, const N: usize>(list: [T; N]) -> T {
    const {
        assert!(N > 0, "last: empty list");
    }

    list[N - 1]
}

/// Returns all elements but the first of a non-empty fixed-size array.
///
/// The output length `L` must equal `N - 1`; calling this with `N == 0` or
/// a mismatched `L` fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::tail;
///
/// const REST: [i32; 2] = tail([42, 1337, 10]);
/// assert_eq!(REST, [1337, 10]);
///
/// const EMPTY: [i32; 0] = tail([1]);
/// assert_eq!(EMPTY, []);
/// ```
///
/// ```compile_fail
/// use seqfn::fixed::tail;
///
/// let _: [i32; 0] = tail::<i32, 0, 0>([]);
/// ```
#[must_use]
pub const fn tail<T: Copy, const N: usize, const L: usize>(list: [T; N]) -> [T; L] {
    const {
        assert!(N > 0, "tail: empty list");
        assert!(L == N - 1, "tail: output length must be the input length minus one");
    }

    let mut result = [list[0]; L];
    let mut index = 0;
    while index < L {
        result[index] = list[index + 1];
        index += 1;
    }

    result
}

/// Returns all elements but the last of a non-empty fixed-size array.
///
/// The output length `L` must equal `N - 1`; calling this with `N == 0` or
/// a mismatched `L` fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::init;
///
/// const FRONT: [i32; 2] = init([42, 1337, 10]);
/// assert_eq!(FRONT, [42, 1337]);
/// ```
///
/// ```compile_fail
/// use seqfn::fixed::init;
///
/// let _: [i32; 0] = init::<i32, 0, 0>([]);
/// ```
#[must_use]
pub const fn init<T: Copy, const N: usize, const L: usize>(list: [T; N]) -> [T; L] {
    const {
        assert!(N > 0, "init: empty list");
        assert!(L == N - 1, "init: output length must be the input length minus one");
    }

    let mut result = [list[0]; L];
    let mut index = 0;
    while index < L {
        result[index] = list[index];
        index += 1;
    }

    result
}

/// Returns whether a fixed-size array holds no elements.
///
/// Available without inspecting element values; the answer is part of the
/// type.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::null;
///
/// const EMPTY: bool = null(&[1, 2, 3]);
/// assert!(!EMPTY);
/// assert!(null::<i32, 0>(&[]));
/// ```
#[must_use]
pub const fn null<T, const N: usize>(_list: &[T; N]) -> bool {
    N == 0
}

/// Returns the length of a fixed-size array.
///
/// Available without inspecting element values; the answer is part of the
/// type.
///
/// # Examples
///
/// ```rust
/// use seqfn::fixed::length;
///
/// const LEN: usize = length(&[42, 1337, 10]);
/// assert_eq!(LEN, 3);
/// assert_eq!(length::<f64, 0>(&[]), 0);
/// ```
#[must_use]
pub const fn length<T, const N: usize>(_list: &[T; N]) -> usize {
    N
}
