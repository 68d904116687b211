//! Unit tests for the coin codec.

use super::*;

mod display_tests {
    use super::*;

    fn shown(copper: u64) -> String {
        Money::from_copper(copper).to_string()
    }

    #[test]
    fn zero_is_shown_as_copper() {
        assert_eq!(shown(0), "0c");
    }

    #[test]
    fn single_denominations() {
        assert_eq!(shown(1), "1c");
        assert_eq!(shown(5), "5c");
        assert_eq!(shown(10), "1s");
        assert_eq!(shown(100), "1g");
        assert_eq!(shown(1000), "1p");
    }

    #[test]
    fn full_breakdown_in_descending_order() {
        assert_eq!(shown(1234), "1p 2g 3s 4c");
    }

    #[test]
    fn zero_terms_are_skipped() {
        assert_eq!(shown(1010), "1p 1s");
        assert_eq!(shown(1001), "1p 1c");
        assert_eq!(shown(181), "1g 8s 1c");
        assert_eq!(shown(13), "1s 3c");
    }

    #[test]
    fn platinum_is_unbounded() {
        assert_eq!(shown(12_345), "12p 3g 4s 5c");
        assert_eq!(shown(2_000_000), "2000p");
    }
}

mod conversion_tests {
    use super::*;

    #[test]
    fn from_parts_uses_fixed_ratios() {
        let money = Money::from_parts(1, 2, 3, 4).unwrap();
        assert_eq!(money.copper(), 1234);
    }

    #[test]
    fn from_parts_accepts_unnormalised_input() {
        let money = Money::from_parts(0, 0, 25, 17).unwrap();
        assert_eq!(money.copper(), 267);
    }

    #[test]
    fn from_parts_reports_overflow() {
        assert_eq!(
            Money::from_parts(u64::MAX, 0, 0, 0),
            Err(CurrencyError::Overflow)
        );
    }

    #[test]
    fn blank_inputs_default_to_zero() {
        let money = Money::from_inputs("", " ", "1", "").unwrap();
        assert_eq!(money.copper(), 10);
    }

    #[test]
    fn inputs_are_trimmed() {
        let money = Money::from_inputs(" 2 ", "0", "0", "5 ").unwrap();
        assert_eq!(money.copper(), 2005);
    }

    #[test]
    fn non_numeric_input_names_the_denomination() {
        let err = Money::from_inputs("1", "abc", "0", "0").unwrap_err();
        assert_eq!(
            err,
            CurrencyError::InvalidAmount {
                denomination: "Gold",
                input: "abc".to_string(),
            }
        );
    }

    #[test]
    fn negative_input_is_rejected() {
        let err = Money::from_inputs("0", "0", "0", "-3").unwrap_err();
        assert!(matches!(
            err,
            CurrencyError::InvalidAmount { denomination: "Copper", .. }
        ));
    }

    #[test]
    fn denominations_split_canonically() {
        let parts = Money::from_copper(9876).denominations();
        assert_eq!(
            parts,
            Denominations {
                platinum: 9,
                gold: 8,
                silver: 7,
                copper: 6,
            }
        );
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Money::from_copper(10).times(3), Money::from_copper(30));
        assert_eq!(Money::from_copper(u64::MAX).times(2), Money::from_copper(u64::MAX));
    }

    #[test]
    fn sum_adds_all_amounts() {
        let total: Money = [10, 27, 181].into_iter().map(Money::from_copper).sum();
        assert_eq!(total.copper(), 218);
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn display_form_round_trips() {
        for copper in (0..5000).chain([12_345, 1_000_000, 99_999_999]) {
            let money = Money::from_copper(copper);
            let parsed: Money = money.to_string().parse().unwrap();
            assert_eq!(parsed, money, "round trip failed for {copper}");
        }
    }

    #[test]
    fn canonical_split_round_trips() {
        for copper in [0, 1, 9, 10, 99, 100, 999, 1000, 1234, 50_505] {
            let parts = Money::from_copper(copper).denominations();
            let rebuilt =
                Money::from_parts(parts.platinum, parts.gold, parts.silver, parts.copper).unwrap();
            assert_eq!(rebuilt.copper(), copper);
        }
    }

    #[test]
    fn accepts_any_order_and_case() {
        let parsed: Money = "4C 1P".parse().unwrap();
        assert_eq!(parsed.copper(), 1004);
    }

    #[test]
    fn rejects_unknown_units() {
        assert!(matches!(
            "3x".parse::<Money>(),
            Err(CurrencyError::InvalidTerm(_))
        ));
    }

    #[test]
    fn rejects_repeated_units() {
        assert_eq!(
            "1s 2s".parse::<Money>(),
            Err(CurrencyError::RepeatedTerm('s'))
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!("   ".parse::<Money>().is_err());
        assert!("p".parse::<Money>().is_err());
    }
}
