//! Property-based tests for parsing and summation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use tally::parser::parse_numbers;
use tally::{Calculator, is_prime};

proptest! {
    /// Joining integers with commas and parsing them back yields the list
    #[test]
    fn parse_recovers_joined_integers(numbers in prop::collection::vec(-10_000i64..10_000, 2..10)) {
        let input = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(parse_numbers(&input).unwrap(), numbers);
    }

    /// add returns the arithmetic sum of the joined integers
    #[test]
    fn add_returns_arithmetic_sum(numbers in prop::collection::vec(-10_000i64..10_000, 2..10)) {
        let input = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let calc = Calculator::new();
        prop_assert_eq!(calc.add(&input).unwrap(), numbers.iter().sum::<i64>());
    }

    /// A lone integer token needs no comma
    #[test]
    fn single_integer_is_valid(n in any::<i64>()) {
        prop_assert_eq!(parse_numbers(&n.to_string()).unwrap(), vec![n]);
    }

    /// Non-numeric comma-less strings always report the separator error
    #[test]
    fn commaless_garbage_is_separator_error(s in "[a-z;|]{1,12}") {
        let err = parse_numbers(&s).unwrap_err();
        prop_assert!(err.to_string().contains("Separator is incorrect"));
    }

    /// Primes other than 2 are odd
    #[test]
    fn primes_above_two_are_odd(n in 3i64..100_000) {
        if is_prime(n) {
            prop_assert_eq!(n % 2, 1);
        }
    }

    /// A prime has no divisor in 2..n
    #[test]
    fn primes_have_no_small_divisor(n in 2i64..5_000) {
        if is_prime(n) {
            prop_assert!((2..n).all(|d| n % d != 0));
        }
    }
}
