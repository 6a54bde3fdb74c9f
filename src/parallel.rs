//! Rayon versions of the slice transforms.
//!
//! `par_apply` and `par_filter` return exactly what their sequential
//! counterparts return, in the same order. `par_reduce` splits the slice
//! into chunks and folds each one, so it only agrees with
//! [`crate::transforms::reduce`] when `op` is associative and `identity`
//! is its neutral element.

use rayon::prelude::*;

pub fn par_apply<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    T: Copy + Sync,
    U: Send,
    F: Fn(T) -> U + Sync + Send,
{
    seq.par_iter().map(|&x| f(x)).collect()
}

pub fn par_filter<T, P>(seq: &[T], predicate: P) -> Vec<T>
where
    T: Copy + Send + Sync,
    P: Fn(T) -> bool + Sync + Send,
{
    seq.par_iter().copied().filter(|&x| predicate(x)).collect()
}

/// Parallel fold with an identity element.
///
/// ```
/// use closure_combinators::parallel::par_reduce;
///
/// let numbers: Vec<i64> = (1..=100).collect();
/// assert_eq!(par_reduce(&numbers, 0, |a, b| a + b), 5050);
/// ```
pub fn par_reduce<T, F>(seq: &[T], identity: T, op: F) -> T
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync + Send,
{
    seq.par_iter()
        .copied()
        .fold(|| identity, &op)
        .reduce(|| identity, &op)
}
