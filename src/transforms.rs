//! Higher-order functions over slices: map, filter, fold and composition.

/// Applies `f` to every element, preserving order and length.
///
/// ```
/// use closure_combinators::transforms::apply;
///
/// assert_eq!(apply(&[1, 2, 3], |x| x * x), vec![1, 4, 9]);
/// ```
pub fn apply<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    seq.iter().copied().map(f).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Copy,
    P: FnMut(T) -> bool,
{
    seq.iter().copied().filter(|&x| predicate(x)).collect()
}

/// Left fold: `op(...op(op(initial, seq[0]), seq[1])..., seq[n-1])`.
///
/// An empty slice returns `initial` untouched.
pub fn reduce<T, A, F>(seq: &[T], initial: A, op: F) -> A
where
    T: Copy,
    F: FnMut(A, T) -> A,
{
    seq.iter().copied().fold(initial, op)
}

/// `x -> f(g(x))`. `g` runs first.
///
/// ```
/// use closure_combinators::transforms::compose;
///
/// let double_then_add_five = compose(|x: i64| x + 5, |x: i64| x * 2);
/// assert_eq!(double_then_add_five(7), 19);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x: A| f(g(x))
}

pub fn identity<T>(x: T) -> T {
    x
}
