//! Property-based tests for the composition combinators.
//!
//! - Functor identity and composition hold for F-of-G
//! - A composed fold equals folding the inner layer inside the outer fold
//! - Traversing with `pure` equals `pure` of the structure
//! - Composed `map2` agrees with the nested `map2`s

use kindred::compose::{Nested, compose};
use kindred::control::Eval;
use kindred::instances::{OptionInstance, OptionK, ResultInstance, ResultK, VecInstance, VecK};
use kindred::typeclass::{Applicative, Foldable, Functor, Traverse};
use proptest::prelude::*;

type VecOption<A> = Nested<VecK, OptionK, A>;
type OptionVec<A> = Nested<OptionK, VecK, A>;

fn vec_of_options() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(any::<Option<i32>>(), 0..16)
}

fn option_of_vec() -> impl Strategy<Value = Option<Vec<i32>>> {
    prop::option::of(prop::collection::vec(any::<i32>(), 0..16))
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_identity_law(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let nested: VecOption<i32> = Nested::nest(values.clone());
        prop_assert_eq!(instance.map(nested, |x: i32| x).unnest(), values);
    }

    #[test]
    fn prop_composed_composition_law(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let increment = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);
        let left: VecOption<i32> = instance.map(instance.map(Nested::nest(values.clone()), increment), double);
        let right: VecOption<i32> = instance.map(Nested::nest(values), move |n: i32| double(increment(n)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_composed_map_agrees_with_nested_maps(values in option_of_vec()) {
        let instance = compose(OptionInstance, VecInstance);
        let nested: OptionVec<i32> = Nested::nest(values.clone());
        let composed = instance.map(nested, |n: i32| n.wrapping_sub(4)).unnest();
        let by_hand = OptionInstance.map(values, |inner: Vec<i32>| VecInstance.map(inner, |n: i32| n.wrapping_sub(4)));
        prop_assert_eq!(composed, by_hand);
    }
}

// =============================================================================
// Foldable
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_fold_left_equals_nested_fold(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let nested: VecOption<i32> = Nested::nest(values.clone());
        let composed = instance.fold_left(nested, Vec::new(), |mut seen: Vec<i32>, n: i32| {
            seen.push(n);
            seen
        });
        let by_hand = VecInstance.fold_left(values, Vec::new(), |seen: Vec<i32>, inner: Option<i32>| {
            OptionInstance.fold_left(inner, seen, |mut seen: Vec<i32>, n: i32| {
                seen.push(n);
                seen
            })
        });
        prop_assert_eq!(composed, by_hand);
    }

    #[test]
    fn prop_composed_fold_right_equals_fold_left_reversed(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let left = instance.fold_left(Nested::<VecK, OptionK, i32>::nest(values.clone()), Vec::new(), |mut seen: Vec<i32>, n: i32| {
            seen.insert(0, n);
            seen
        });
        let right = instance
            .fold_right(Nested::<VecK, OptionK, i32>::nest(values), Eval::now(Vec::new()), |n: i32, rest: Eval<Vec<i32>>| {
                rest.map(move |mut seen: Vec<i32>| {
                    seen.push(n);
                    seen
                })
            })
            .value();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_composed_size_counts_inner_elements(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let expected = values.iter().flatten().count();
        prop_assert_eq!(instance.size(Nested::<VecK, OptionK, i32>::nest(values)), expected);
    }
}

// =============================================================================
// Traverse
// =============================================================================

proptest! {
    #[test]
    fn prop_traverse_with_pure_is_pure(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let nested: VecOption<i32> = Nested::nest(values.clone());
        let traversed = instance.traverse(&OptionInstance, nested, Some);
        prop_assert_eq!(traversed.map(Nested::unnest), Some(values));
    }

    #[test]
    fn prop_traverse_result_fails_on_first_negative(values in vec_of_options()) {
        let instance = compose(VecInstance, OptionInstance);
        let nested: VecOption<i32> = Nested::nest(values.clone());
        let checked = instance.traverse(&ResultInstance::<i32>::new(), nested, |n: i32| if n < 0 { Err(n) } else { Ok(n) });
        let first_negative = values.iter().flatten().copied().find(|n| *n < 0);
        match first_negative {
            Some(negative) => prop_assert_eq!(checked.map(Nested::unnest), Err(negative)),
            None => prop_assert_eq!(checked.map(Nested::unnest), Ok(values)),
        }
    }

    #[test]
    fn prop_traverse_keeps_shape(values in option_of_vec()) {
        let instance = compose(OptionInstance, VecInstance);
        let nested: OptionVec<i32> = Nested::nest(values.clone());
        let traversed = instance.traverse(&OptionInstance, nested, |n: i32| Some(i64::from(n)));
        let expected = values.map(|inner| inner.into_iter().map(i64::from).collect::<Vec<i64>>());
        prop_assert_eq!(traversed.map(Nested::unnest), Some(expected));
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_pure_nests_pure(value in any::<i32>()) {
        let instance = compose(VecInstance, OptionInstance);
        let pure: VecOption<i32> = instance.pure(value);
        prop_assert_eq!(pure.unnest(), vec![Some(value)]);
    }

    #[test]
    fn prop_composed_map2_agrees_with_nested_map2(
        left in prop::collection::vec(any::<Option<i8>>(), 0..6),
        right in prop::collection::vec(any::<Option<i8>>(), 0..6),
    ) {
        let instance = compose(VecInstance, OptionInstance);
        let composed = instance
            .map2(
                Nested::<VecK, OptionK, i8>::nest(left.clone()),
                Nested::<VecK, OptionK, i8>::nest(right.clone()),
                |a: i8, b: i8| (a, b),
            )
            .unnest();
        let by_hand = VecInstance.map2(left, right, |a: Option<i8>, b: Option<i8>| {
            OptionInstance.map2(a, b, |a: i8, b: i8| (a, b))
        });
        prop_assert_eq!(composed, by_hand);
    }

    #[test]
    fn prop_result_of_option_map2_short_circuits(value in any::<i32>(), failure in "[a-z]{1,8}") {
        let instance = compose(ResultInstance::<String>::new(), OptionInstance);
        let present: Nested<ResultK<String>, OptionK, i32> = Nested::nest(Ok(Some(value)));
        let failed: Nested<ResultK<String>, OptionK, i32> = Nested::nest(Err(failure.clone()));
        let combined = instance.map2(present, failed, |a: i32, b: i32| a.wrapping_add(b));
        prop_assert_eq!(combined.unnest(), Err(failure));
    }
}
