//! Combinators over functions that take their arguments as one list.
//!
//! This is the dynamic-arity counterpart of [`crate::fp::curry`]: a
//! [`Curry`] accumulates arguments one at a time and only calls the wrapped
//! function once the configured arity is reached.

use std::fmt;
use std::sync::Arc;

use crate::error::TickerError;

pub type VariadicFn<T, R> = Arc<dyn Fn(Vec<T>) -> R + Send + Sync>;

pub struct Curry<T, R> {
    f: VariadicFn<T, R>,
    arity: usize,
    args: Vec<T>,
}

/// Result of feeding one argument to a [`Curry`].
pub enum Applied<T, R> {
    Partial(Curry<T, R>),
    Complete(R),
}

pub fn curry<T, R, F>(f: F, arity: usize) -> Curry<T, R>
where
    F: Fn(Vec<T>) -> R + Send + Sync + 'static,
{
    Curry {
        f: Arc::new(f),
        arity,
        args: Vec::new(),
    }
}

impl<T: Clone, R> Curry<T, R> {
    /// Supply the next argument. `self` is left untouched, so the same
    /// partial application can be extended along several branches.
    pub fn apply(&self, next: T) -> Applied<T, R> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.extend(self.args.iter().cloned());
        args.push(next);

        if args.len() >= self.arity {
            Applied::Complete((self.f)(args))
        } else {
            Applied::Partial(Curry {
                f: Arc::clone(&self.f),
                arity: self.arity,
                args,
            })
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn supplied(&self) -> &[T] {
        &self.args
    }

    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.args.len()).max(1)
    }
}

impl<T: Clone, R> Clone for Curry<T, R> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            arity: self.arity,
            args: self.args.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curry<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curry")
            .field("arity", &self.arity)
            .field("args", &self.args)
            .finish()
    }
}

impl<T: Clone, R> Applied<T, R> {
    pub fn complete(self) -> Option<R> {
        match self {
            Applied::Complete(result) => Some(result),
            Applied::Partial(_) => None,
        }
    }

    pub fn partial(self) -> Option<Curry<T, R>> {
        match self {
            Applied::Partial(curried) => Some(curried),
            Applied::Complete(_) => None,
        }
    }
}

/// Feed a whole argument list to a curried function one argument at a time.
///
/// Fewer arguments than the arity yields a partial application; more than
/// the arity is rejected once the call has completed.
pub fn uncurry<T, R>(curried: &Curry<T, R>, args: Vec<T>) -> Result<Applied<T, R>, TickerError>
where
    T: Clone,
{
    let supplied = curried.supplied().len() + args.len();
    let mut state = Applied::Partial(curried.clone());
    for arg in args {
        state = match state {
            Applied::Partial(next) => next.apply(arg),
            Applied::Complete(_) => {
                return Err(TickerError::Overapplied {
                    arity: curried.arity().max(1),
                    supplied,
                })
            }
        };
    }
    Ok(state)
}

pub fn partial<T, R, F>(f: F, preset: Vec<T>) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
    T: Clone,
{
    move |later| {
        let mut args = preset.clone();
        args.extend(later);
        f(args)
    }
}

pub fn partial_right<T, R, F>(f: F, preset: Vec<T>) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
    T: Clone,
{
    move |mut later| {
        later.extend(preset.iter().cloned());
        f(later)
    }
}

pub fn reverse_args<T, R, F>(f: F) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
{
    move |mut args| {
        args.reverse();
        f(args)
    }
}
