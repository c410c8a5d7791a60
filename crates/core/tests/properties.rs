//! Property-based tests for the railway containers using proptest.
//!
//! Properties verified:
//! - Accessors return exactly the constructed payload
//! - Combinators agree with direct function application
//! - Empty/failure states short-circuit and never invoke closures
//! - Fallback suppliers stay un-invoked on present/success containers
//! - serde round-trips preserve discriminant and payload

use std::cell::Cell;

use proptest::prelude::*;
use railway_core::{Maybe, Outcome};

// ==========================================================================
// PROPERTY: Construction and access
// ==========================================================================

proptest! {
    /// Property: a present container returns exactly the wrapped value.
    #[test]
    fn prop_present_get_round_trips(v in any::<i64>()) {
        prop_assert_eq!(Maybe::present(v).get(), v);
    }

    /// Property: success and failure payloads come back unchanged.
    #[test]
    fn prop_outcome_payload_round_trips(v in any::<i64>(), e in ".*") {
        prop_assert_eq!(Outcome::<i64, String>::success(v).into_value(), v);
        prop_assert_eq!(Outcome::<i64, String>::failure(e.clone()).into_error(), e);
    }
}

// ==========================================================================
// PROPERTY: Combinators agree with direct application
// ==========================================================================

proptest! {
    /// Property: mapping a present container equals applying the function.
    #[test]
    fn prop_map_applies_the_function(v in any::<i64>()) {
        let f = |x: i64| x.wrapping_mul(2).wrapping_add(1);
        prop_assert_eq!(Maybe::present(v).map(f).get(), f(v));
        prop_assert_eq!(Outcome::<i64, String>::success(v).map(f).into_value(), f(v));
    }

    /// Property: a failure rides through `map` with its error untouched.
    #[test]
    fn prop_map_preserves_the_error(e in ".*") {
        let invoked = Cell::new(false);
        let mapped = Outcome::<i64, String>::failure(e.clone()).map(|v| {
            invoked.set(true);
            v
        });
        prop_assert!(!invoked.get());
        prop_assert_eq!(mapped.into_error(), e);
    }

    /// Property: `filter` keeps the value iff the predicate holds.
    #[test]
    fn prop_filter_matches_the_predicate(v in any::<i64>()) {
        let even = |x: &i64| x % 2 == 0;
        let filtered = Maybe::present(v).filter(even);
        prop_assert_eq!(filtered.is_present(), even(&v));
    }
}

// ==========================================================================
// PROPERTY: Short-circuiting and fallback laziness
// ==========================================================================

proptest! {
    /// Property: once a chain fails, no later closure runs and the first
    /// error is the one reported.
    #[test]
    fn prop_flat_map_short_circuits(v in any::<i64>(), e in ".*") {
        let later_calls = Cell::new(0_u32);
        let outcome = Outcome::<i64, String>::success(v)
            .flat_map(|_| Outcome::failure(e.clone()))
            .flat_map(|x: i64| {
                later_calls.set(later_calls.get() + 1);
                Outcome::success(x)
            })
            .map(|x| {
                later_calls.set(later_calls.get() + 1);
                x
            });
        prop_assert_eq!(later_calls.get(), 0);
        prop_assert_eq!(outcome.into_error(), e);
    }

    /// Property: fallback suppliers never run on present/success containers.
    #[test]
    fn prop_fallbacks_stay_lazy(v in any::<i64>(), d in any::<i64>()) {
        let supplier_calls = Cell::new(0_u32);

        let from_maybe = Maybe::present(v).value_or_else(|| {
            supplier_calls.set(supplier_calls.get() + 1);
            d
        });
        let from_outcome = Outcome::<i64, String>::success(v).value_or_else(|_| {
            supplier_calls.set(supplier_calls.get() + 1);
            d
        });

        prop_assert_eq!(supplier_calls.get(), 0);
        prop_assert_eq!(from_maybe, v);
        prop_assert_eq!(from_outcome, v);
    }

    /// Property: an empty chain invokes no mapper at all.
    #[test]
    fn prop_empty_chain_runs_nothing(d in any::<i64>()) {
        let mapper_calls = Cell::new(0_u32);
        let result = Maybe::<i64>::empty()
            .map(|x| {
                mapper_calls.set(mapper_calls.get() + 1);
                x
            })
            .flat_map(|x| {
                mapper_calls.set(mapper_calls.get() + 1);
                Maybe::present(x)
            })
            .value_or(d);
        prop_assert_eq!(mapper_calls.get(), 0);
        prop_assert_eq!(result, d);
    }
}

// ==========================================================================
// PROPERTY: serde round-trips
// ==========================================================================

proptest! {
    /// Property: serializing and deserializing preserves the container.
    #[test]
    fn prop_serde_round_trips(v in any::<i64>(), e in ".*") {
        let present = Maybe::present(v);
        let json = serde_json::to_string(&present)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let decoded: Maybe<i64> = serde_json::from_str(&json)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(decoded, present);

        let failure = Outcome::<i64, String>::failure(e);
        let json = serde_json::to_string(&failure)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let decoded: Outcome<i64, String> = serde_json::from_str(&json)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(decoded, failure);
    }
}
