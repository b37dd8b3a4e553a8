//! Function-composition primitives.
//!
//! Typed combinators live in [`curry`], [`args`] and [`compose`]; the
//! dynamic-arity versions that accumulate argument lists live in
//! [`variadic`]. Container operations are exposed curried and data-last in
//! [`list`], and [`record`] provides copy-on-write access to key/value
//! records.

pub mod args;
pub mod compose;
pub mod curry;
pub mod list;
pub mod record;
pub mod variadic;

pub use args::{
    not, partial, partial_right, reverse_args, reverse_args3, spread_args, spread_args3,
};
pub use compose::{compose, identity, pipe};
pub use curry::{curry2, curry3, uncurry2, uncurry3, Unary};
pub use list::{each, filter, filter_in, filter_out, flat_map, map, reduce, zip};
pub use record::{prop, set_prop};
