//! Argument-shaping adapters for fixed-arity functions.

/// Fix the first argument of a binary function.
pub fn partial<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// Fix the last argument of a binary function.
pub fn partial_right<A, B, R, F>(f: F, b: B) -> impl Fn(A) -> R
where
    F: Fn(A, B) -> R,
    B: Clone,
{
    move |a| f(a, b.clone())
}

pub fn reverse_args<A, B, R, F>(f: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |b, a| f(a, b)
}

pub fn reverse_args3<A, B, C, R, F>(f: F) -> impl Fn(C, B, A) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |c, b, a| f(a, b, c)
}

/// Adapt a binary function to take its arguments as one tuple.
pub fn spread_args<A, B, R, F>(f: F) -> impl Fn((A, B)) -> R
where
    F: Fn(A, B) -> R,
{
    move |(a, b)| f(a, b)
}

pub fn spread_args3<A, B, C, R, F>(f: F) -> impl Fn((A, B, C)) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |(a, b, c)| f(a, b, c)
}

pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}
