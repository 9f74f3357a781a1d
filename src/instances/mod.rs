//! Witnesses and capability instances for the standard containers.
//!
//! Each container family gets an uninhabited witness (`OptionK`, `VecK`, ...)
//! implementing [`Kind`](crate::typeclass::Kind), plus a zero-sized instance
//! value (`OptionInstance`, `VecInstance`, ...) implementing the capabilities
//! the family supports:
//!
//! | Witness         | Container          | Instance                 | Capabilities                                                    |
//! |-----------------|--------------------|--------------------------|-----------------------------------------------------------------|
//! | [`OptionK`]     | `Option<A>`        | [`OptionInstance`]       | Monad, Traverse, MonoidK, ApplicativeError<()>                  |
//! | [`ResultK<E>`]  | `Result<A, E>`     | [`ResultInstance<E>`]    | Monad, Traverse, SemigroupK, ApplicativeError<E>                |
//! | [`EitherK<L>`]  | `Either<L, A>`     | [`EitherInstance<L>`]    | Monad, Traverse, SemigroupK, ApplicativeError<L>                |
//! | [`VecK`]        | `Vec<A>`           | [`VecInstance`]          | Monad, Traverse, MonoidK                                        |
//! | [`IdK`]         | `Identity<A>`      | [`IdentityInstance`]     | Monad, Comonad, Traverse                                        |
//! | [`EvalK`]       | `Eval<A>`          | [`EvalInstance`]         | Monad, Comonad, Foldable                                        |
//! | [`EitherBiK`]   | `Either<A, B>`     | [`EitherBiInstance`]     | Bitraverse                                                      |
//! | [`ResultBiK`]   | `Result<B, A>`     | [`ResultBiInstance`]     | Bitraverse                                                      |
//! | [`PairK`]       | `(A, B)`           | [`PairInstance`]         | Bitraverse                                                      |
//!
//! Instances are `Copy`, `Send` and `Sync`; they carry no data.

mod bi;
mod either;
mod eval;
mod identity;
mod option;
mod result;
mod vec;

pub use bi::{EitherBiInstance, EitherBiK, PairInstance, PairK, ResultBiInstance, ResultBiK};
pub use either::{EitherInstance, EitherK};
pub use eval::{EvalInstance, EvalK};
pub use identity::{IdK, IdentityInstance};
pub use option::{OptionInstance, OptionK};
pub use result::{ResultInstance, ResultK};
pub use vec::{VecInstance, VecK};
