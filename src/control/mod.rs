//! Control structures the capability hierarchy is built on.
//!
//! - [`Either`]: the step type of `tail_rec_m` and a right-biased container
//! - [`Eval`]: lazy, stack-safe evaluation used by `fold_right` and `map2_eval`
//!
//! # Examples
//!
//! ```rust
//! use kindred::control::{Either, Eval};
//!
//! let countdown = Eval::tail_rec_m(10_u32, |remaining| {
//!     Eval::now(if remaining == 0 {
//!         Either::Right("liftoff")
//!     } else {
//!         Either::Left(remaining - 1)
//!     })
//! });
//! assert_eq!(countdown.value(), "liftoff");
//! ```

mod either;
mod eval;

pub use either::Either;
pub use eval::Eval;
