//! Container operations as curried, data-last functions.
//!
//! Each adapter takes its behaviour first and returns a function awaiting the
//! list, so transforms can be built once and reused or composed.

use std::sync::Arc;

use super::args::not;
use super::curry::Unary;

pub fn map<T, U, F>(mapper: F) -> impl Fn(Vec<T>) -> Vec<U>
where
    F: Fn(T) -> U,
{
    move |list| list.into_iter().map(&mapper).collect()
}

/// Keep the elements `predicate` accepts.
pub fn filter_in<T, P>(predicate: P) -> impl Fn(Vec<T>) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    move |list| list.into_iter().filter(|item| predicate(item)).collect()
}

pub fn filter<T, P>(predicate: P) -> impl Fn(Vec<T>) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    filter_in(predicate)
}

/// Keep the elements `predicate` rejects.
pub fn filter_out<T, P>(predicate: P) -> impl Fn(Vec<T>) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    filter_in(not(predicate))
}

pub fn flat_map<T, U, I, F>(mapper: F) -> impl Fn(Vec<T>) -> Vec<U>
where
    F: Fn(T) -> I,
    I: IntoIterator<Item = U>,
{
    move |list| list.into_iter().flat_map(&mapper).collect()
}

/// Run `effect` on every element in order.
pub fn each<T, F>(mut effect: F) -> impl FnMut(Vec<T>)
where
    F: FnMut(T),
{
    move |list| {
        for item in list {
            effect(item);
        }
    }
}

/// `reduce(reducer)(initial)(list)`.
pub fn reduce<T, Acc, F>(reducer: F) -> Unary<Acc, Unary<Vec<T>, Acc>>
where
    F: Fn(Acc, T) -> Acc + Send + Sync + 'static,
    Acc: Clone + Send + Sync + 'static,
    T: 'static,
{
    let reducer = Arc::new(reducer);
    Box::new(move |initial: Acc| {
        let reducer = Arc::clone(&reducer);
        Box::new(move |list: Vec<T>| {
            list.into_iter()
                .fold(initial.clone(), |acc, item| reducer(acc, item))
        }) as Unary<Vec<T>, Acc>
    })
}

/// Pair elements positionally. The shorter input bounds the output.
pub fn zip<A, B, L, R>(left: L, right: R) -> Vec<(A, B)>
where
    L: IntoIterator<Item = A>,
    R: IntoIterator<Item = B>,
{
    left.into_iter().zip(right).collect()
}
