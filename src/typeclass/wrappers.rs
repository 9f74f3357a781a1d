//! Newtype wrappers selecting a monoid for a numeric or ordered type.
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: [`Bounded::MIN_VALUE`])
//! - [`Min`]: minimum (identity: [`Bounded::MAX_VALUE`])
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::VecInstance;
//! use kindred::typeclass::{Foldable, Max};
//!
//! let highest: Max<i32> = VecInstance.fold_map(vec![3, 9, 4], Max);
//! assert_eq!(highest.into_inner(), 9);
//! ```

macro_rules! wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Unwraps the value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

wrapper!(
    /// The additive semigroup/monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    Sum
);

wrapper!(
    /// The multiplicative semigroup/monoid: `Product(a).combine(Product(b)) == Product(a * b)`.
    Product
);

wrapper!(
    /// The semigroup keeping the larger value.
    Max
);

wrapper!(
    /// The semigroup keeping the smaller value.
    Min
);

/// Types with a least and a greatest value.
///
/// Gives [`Max`] and [`Min`] their monoid identities.
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;
    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
