//! Property-based tests for the Traverse laws.
//!
//! - **Naturality of sequence**: `traverse(g, fa, f) == sequence(g, map(fa, f))`
//!
//! Each traversable is checked against an `Option` and a `Vec` applicative.

use kindred::compose::{Nested, compose};
use kindred::instances::{OptionInstance, OptionK, ResultInstance, VecInstance, VecK};
use kindred::typeclass::{Functor, Traverse};
use proptest::prelude::*;

type VecOption<A> = Nested<VecK, OptionK, A>;

fn third(n: i32) -> Option<i32> {
    (n % 3 != 0).then_some(n / 3)
}

fn branches(n: i32) -> Vec<i32> {
    if n % 4 == 0 { Vec::new() } else { vec![n, n.wrapping_neg()] }
}

fn short_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..6)
}

// =============================================================================
// Vec
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_traverse_option_is_map_then_sequence(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let traversed = VecInstance.traverse(&OptionInstance, values.clone(), third);
        let sequenced = VecInstance.sequence(&OptionInstance, VecInstance.map(values, third));
        prop_assert_eq!(traversed, sequenced);
    }

    #[test]
    fn prop_vec_traverse_vec_is_map_then_sequence(values in short_vec()) {
        let traversed = VecInstance.traverse(&VecInstance, values.clone(), branches);
        let sequenced = VecInstance.sequence(&VecInstance, VecInstance.map(values, branches));
        prop_assert_eq!(traversed, sequenced);
    }
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_traverse_option_is_map_then_sequence(value in any::<Option<i32>>()) {
        let traversed = OptionInstance.traverse(&OptionInstance, value, third);
        let sequenced = OptionInstance.sequence(&OptionInstance, OptionInstance.map(value, third));
        prop_assert_eq!(traversed, sequenced);
    }

    #[test]
    fn prop_option_traverse_vec_is_map_then_sequence(value in any::<Option<i32>>()) {
        let traversed = OptionInstance.traverse(&VecInstance, value, branches);
        let sequenced = OptionInstance.sequence(&VecInstance, OptionInstance.map(value, branches));
        prop_assert_eq!(traversed, sequenced);
    }
}

// =============================================================================
// Result<_, String>
// =============================================================================

proptest! {
    #[test]
    fn prop_result_traverse_option_is_map_then_sequence(value in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,6}")) {
        let instance = ResultInstance::<String>::new();
        let traversed = instance.traverse(&OptionInstance, value.clone(), third);
        let sequenced = instance.sequence(&OptionInstance, instance.map(value, third));
        prop_assert_eq!(traversed, sequenced);
    }

    #[test]
    fn prop_result_traverse_vec_is_map_then_sequence(value in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,6}")) {
        let instance = ResultInstance::<String>::new();
        let traversed = instance.traverse(&VecInstance, value.clone(), branches);
        let sequenced = instance.sequence(&VecInstance, instance.map(value, branches));
        prop_assert_eq!(traversed, sequenced);
    }
}

// =============================================================================
// Composed Vec-of-Option
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_traverse_option_is_map_then_sequence(values in prop::collection::vec(any::<Option<i32>>(), 0..16)) {
        let instance = compose(VecInstance, OptionInstance);
        let traversed = instance.traverse(&OptionInstance, VecOption::nest(values.clone()), third);
        let sequenced = instance.sequence(&OptionInstance, instance.map(VecOption::nest(values), third));
        prop_assert_eq!(traversed.map(Nested::unnest), sequenced.map(Nested::unnest));
    }

    #[test]
    fn prop_composed_traverse_vec_is_map_then_sequence(values in prop::collection::vec(any::<Option<i32>>(), 0..6)) {
        let instance = compose(VecInstance, OptionInstance);
        let traversed = instance.traverse(&VecInstance, VecOption::nest(values.clone()), branches);
        let sequenced = instance.sequence(&VecInstance, instance.map(VecOption::nest(values), branches));
        prop_assert_eq!(
            traversed.into_iter().map(Nested::unnest).collect::<Vec<_>>(),
            sequenced.into_iter().map(Nested::unnest).collect::<Vec<_>>()
        );
    }
}
