//! Monad transformers over any base monad.
//!
//! A transformer adds one effect on top of a base family `F`:
//!
//! - [`OptionT<F, A>`](OptionT) wraps `F::Of<Option<A>>` (possibly absent values)
//! - [`EitherT<F, L, A>`](EitherT) wraps `F::Of<Either<L, A>>` (failure with `L`)
//!
//! Their instances take the base instance at construction, so
//! `OptionTInstance::new(VecInstance)` is a monad for `OptionT<VecK, _>`.
//! `tail_rec_m` is delegated to the base monad's own `tail_rec_m`, and
//! Foldable and Traverse come from [`Composed`](crate::compose::Composed).

mod either_t;
mod option_t;

pub use either_t::{EitherT, EitherTInstance, EitherTK};
pub use option_t::{OptionT, OptionTInstance, OptionTK};
