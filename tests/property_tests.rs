// Property-based tests for countdown decomposition and formatting
// Exercises the pure helpers with random inputs

use countdown_timer::models::countdown::{
    pad_unit, RemainingDuration, DAY_MS, HOUR_MS, MINUTE_MS, SECOND_MS,
};
use proptest::prelude::*;

proptest! {
    /// Property: whole units never exceed the input and miss it by under a second
    #[test]
    fn prop_decomposition_reconstructs_within_a_second(ms in 0u64..10_000 * DAY_MS) {
        let remaining = RemainingDuration::from_millis(ms);
        let whole = remaining.whole_millis();

        prop_assert!(whole <= ms);
        prop_assert!(ms - whole < SECOND_MS);
    }

    /// Property: every unit below days stays within its bound
    #[test]
    fn prop_units_within_bounds(ms in any::<u32>().prop_map(u64::from)) {
        let remaining = RemainingDuration::from_millis(ms);

        prop_assert!(remaining.hours < 24);
        prop_assert!(remaining.minutes < 60);
        prop_assert!(remaining.seconds < 60);
        prop_assert_eq!(remaining.days, ms / DAY_MS);
    }

    /// Property: adding whole units to a span bumps exactly those units
    #[test]
    fn prop_hierarchical_split(
        days in 0u64..5_000,
        hours in 0u64..24,
        minutes in 0u64..60,
        seconds in 0u64..60,
        millis in 0u64..1_000,
    ) {
        let ms = days * DAY_MS + hours * HOUR_MS + minutes * MINUTE_MS + seconds * SECOND_MS + millis;
        let remaining = RemainingDuration::from_millis(ms);

        prop_assert_eq!(remaining, RemainingDuration { days, hours, minutes, seconds });
    }

    /// Property: padding only ever adds leading zeros up to width two
    #[test]
    fn prop_padding_is_minimum_width_two(value in 0u64..1_000_000) {
        let padded = pad_unit(value);

        prop_assert!(padded.len() >= 2);
        if value >= 10 {
            prop_assert_eq!(padded, value.to_string());
        } else {
            prop_assert_eq!(padded, format!("0{}", value));
        }
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_one_day_one_hour_one_minute_one_second() {
        let remaining = RemainingDuration::from_millis(90_061_000);
        assert_eq!(
            remaining,
            RemainingDuration {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_zero_is_all_zero() {
        assert!(RemainingDuration::from_millis(0).is_zero());
        assert!(RemainingDuration::from_millis(999).is_zero());
    }
}
