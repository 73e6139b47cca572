//! Property-based tests for optional bounds

use std::num::NonZeroU64;

use boundkit::OptionalBoundInteger;
use proptest::prelude::*;

fn limit() -> impl Strategy<Value = OptionalBoundInteger> {
    prop_oneof![
        (1i64..=i64::MAX).prop_map(|n| OptionalBoundInteger::of(n).unwrap()),
        (1u64..=u64::MAX).prop_map(|n| OptionalBoundInteger::try_from(n).unwrap()),
        Just(OptionalBoundInteger::Bounded(NonZeroU64::MAX)),
        Just(OptionalBoundInteger::of_unbounded()),
    ]
}

proptest! {
    #[test]
    fn prop_positive_values_are_accepted(n in 1i64..=i64::MAX) {
        let limit = OptionalBoundInteger::of(n).unwrap();
        prop_assert_eq!(limit.int_value().unwrap(), n as u64);
    }

    #[test]
    fn prop_non_positive_values_are_rejected(n in i64::MIN..=0) {
        prop_assert!(OptionalBoundInteger::of(n).unwrap_err().is_validation());
    }

    #[test]
    fn prop_unbounded_is_greatest(a in limit()) {
        prop_assert!(a <= OptionalBoundInteger::of_unbounded());
    }

    #[test]
    fn prop_ordering_is_total(a in limit(), b in limit()) {
        let forward = a.cmp(&b);
        prop_assert_eq!(forward.reverse(), b.cmp(&a));
        prop_assert_eq!(forward == std::cmp::Ordering::Equal, a == b);
    }

    #[test]
    fn prop_addition_commutes(a in limit(), b in limit()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_addition_never_shrinks(a in limit(), b in limit()) {
        let sum = a + b;
        prop_assert!(sum >= a);
        prop_assert!(sum >= b);
    }

    #[test]
    fn prop_unbounded_absorbs(a in limit(), k in any::<i64>()) {
        let unbounded = OptionalBoundInteger::of_unbounded();
        prop_assert!((a + unbounded).is_unbounded());
        prop_assert!((unbounded + k).unwrap().is_unbounded());
    }

    #[test]
    fn prop_small_sums_are_exact(a in 1i64..1_000_000, b in 1i64..1_000_000) {
        let sum = OptionalBoundInteger::of(a).unwrap() + OptionalBoundInteger::of(b).unwrap();
        prop_assert_eq!(sum.int_value().unwrap(), (a + b) as u64);
    }

    #[test]
    fn prop_string_round_trip(a in limit()) {
        prop_assert_eq!(a.to_string().parse::<OptionalBoundInteger>().unwrap(), a);
    }
}
