//! `mdo!`: compile-time do-notation against an explicit instance.
//!
//! Where [`binding`](super::binding) interprets a block at run time, `mdo!`
//! rewrites it at compile time into nested `flat_map` calls on the given
//! instance, so it needs no replay and binds values by move.
//!
//! # Syntax
//!
//! ```text
//! mdo! { instance;
//!     pattern <= expression;   // bind through flat_map
//!     let pattern = expression; // plain let
//!     yield expression          // final value, wrapped with pure
//! }
//! ```
//!
//! The block may also end with an expression that is already a value of the
//! monad. Patterns are identifiers, tuples, or `_`.
//!
//! `<=` stands in for Haskell's `<-`, which `macro_rules!` cannot match.

/// Monadic do-notation over an explicit instance.
///
/// The instance is cloned into every continuation; instances are cheap
/// stateless values.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::VecInstance;
/// use kindred::mdo;
///
/// let sums: Vec<i32> = mdo! { VecInstance;
///     x <= vec![1, 2];
///     y <= vec![10, 20];
///     let total = x + y;
///     yield total
/// };
/// assert_eq!(sums, vec![11, 21, 12, 22]);
/// ```
///
/// ```rust
/// use kindred::instances::OptionInstance;
/// use kindred::mdo;
///
/// let missing: Option<i32> = mdo! { OptionInstance;
///     x <= Some(1);
///     _ <= None::<()>;
///     yield x
/// };
/// assert_eq!(missing, None);
/// ```
#[macro_export]
macro_rules! mdo {
    // Final value, wrapped with pure
    (@step $monad:ident; yield $result:expr $(;)?) => {
        $crate::typeclass::Applicative::pure(&$monad, $result)
    };

    // Bind with identifier pattern
    (@step $monad:ident; $pattern:ident <= $fa:expr ; $($rest:tt)+) => {{
        let next = ::core::clone::Clone::clone(&$monad);
        $crate::typeclass::Monad::flat_map(&$monad, $fa, move |$pattern| {
            let $monad = ::core::clone::Clone::clone(&next);
            $crate::mdo!(@step $monad; $($rest)+)
        })
    }};

    // Bind with tuple pattern
    (@step $monad:ident; ($($pattern:tt)*) <= $fa:expr ; $($rest:tt)+) => {{
        let next = ::core::clone::Clone::clone(&$monad);
        $crate::typeclass::Monad::flat_map(&$monad, $fa, move |($($pattern)*)| {
            let $monad = ::core::clone::Clone::clone(&next);
            $crate::mdo!(@step $monad; $($rest)+)
        })
    }};

    // Bind discarding the value
    (@step $monad:ident; _ <= $fa:expr ; $($rest:tt)+) => {{
        let next = ::core::clone::Clone::clone(&$monad);
        $crate::typeclass::Monad::flat_map(&$monad, $fa, move |_| {
            let $monad = ::core::clone::Clone::clone(&next);
            $crate::mdo!(@step $monad; $($rest)+)
        })
    }};

    // Plain let with identifier pattern
    (@step $monad:ident; let $pattern:ident = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::mdo!(@step $monad; $($rest)+)
    }};

    // Plain let with tuple pattern
    (@step $monad:ident; let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $value;
        $crate::mdo!(@step $monad; $($rest)+)
    }};

    // Final expression, already in the monad
    (@step $monad:ident; $result:expr $(;)?) => {{
        let _ = &$monad;
        $result
    }};

    ($instance:expr ; $($rest:tt)+) => {{
        let monad = ::core::clone::Clone::clone(&$instance);
        $crate::mdo!(@step monad; $($rest)+)
    }};
}
