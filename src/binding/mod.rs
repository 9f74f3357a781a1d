//! Direct-style sequencing over any monad.
//!
//! [`binding`] turns a closure that reads like straight-line code into a
//! chain of `flat_map`s:
//!
//! ```rust
//! use kindred::binding::binding;
//! use kindred::instances::VecInstance;
//!
//! let sums: Vec<i32> = binding(&VecInstance, |scope| {
//!     let x = scope.bind(vec![1, 2])?;
//!     let y = scope.bind(vec![10, 20])?;
//!     let z = scope.bind(vec![100])?;
//!     Ok(x + y + z)
//! });
//! assert_eq!(sums, vec![111, 121, 112, 122]);
//! ```
//!
//! # Overview
//!
//! - [`binding`], [`binding_catch`], [`binding_filter`]: run a block against
//!   a monad, a monad with errors, or a monad with an empty value
//! - [`Scope`]: `bind`, `bind_in`, `raise`, `bind_result`, `continue_if`
//! - [`cobinding`] / [`CoScope`]: extraction from comonads
//! - [`ExecutionContext`] and its implementations, for [`Scope::bind_in`]
//! - [`mdo!`](crate::mdo): the same sequencing as a macro, expanded at
//!   compile time
//!
//! # Short-circuits
//!
//! A bind, raise or failed filter returns a [`Shift`] that the block passes
//! back with `?`. The shift belongs to the scope that produced it: a
//! `binding` nested inside another block has its own scope and driver, and
//! its result is an ordinary value of the monad for the outer block.

mod cobinding;
mod context;
mod error;
mod latch;
mod mdo;
mod scope;

pub use cobinding::{CoScope, cobinding};
#[cfg(feature = "rayon")]
pub use context::RayonContext;
#[cfg(feature = "async")]
pub use context::TokioContext;
pub use context::{ExecutionContext, InlineContext, Task, ThreadContext, ThreadContextBuilder, run_on};
pub use error::BindingError;
pub use scope::{Bound, Scope, Shift, binding, binding_catch, binding_filter};
