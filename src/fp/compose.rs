//! Function composition over a single threaded value.
//!
//! [`compose`] and [`pipe`] take a list of stages of one type; the
//! [`compose!`](crate::compose) and [`pipe!`](crate::pipe) macros accept
//! stages whose input and output types differ.

pub fn identity<T>(value: T) -> T {
    value
}

/// Run `fns` right to left: the last function sees the initial value.
pub fn compose<T, F>(fns: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |initial| fns.iter().rev().fold(initial, |result, f| f(result))
}

/// Run `fns` left to right: the first function sees the initial value.
pub fn pipe<T, F>(fns: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |initial| fns.iter().fold(initial, |result, f| f(result))
}

/// Right-to-left composition of heterogeneous stages.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`.
#[macro_export]
macro_rules! compose {
    () => {
        |value| value
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |value| outer(inner(value))
    }};
}

/// Left-to-right composition of heterogeneous stages.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`.
#[macro_export]
macro_rules! pipe {
    () => {
        |value| value
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let first = $f;
        let rest = $crate::pipe!($($rest),+);
        move |value| rest(first(value))
    }};
}
