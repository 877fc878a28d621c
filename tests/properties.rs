use fraction_engine::{gcd, BigFraction, Fraction, FractionError, Operation};
use num_bigint::BigInt;
use proptest::prelude::*;
use proptest::test_runner::Config;

const RANGE: std::ops::Range<i64> = -1_000_000_000..1_000_000_000;

fn non_zero() -> impl Strategy<Value = i64> {
    RANGE.prop_filter("denominator must not be zero", |d| *d != 0)
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (RANGE, non_zero()).prop_map(|(n, d)| Fraction::reduce(n, d).unwrap())
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn reduce_is_canonical(n in RANGE, d in non_zero()) {
        let f = Fraction::reduce(n, d).unwrap();
        prop_assert!(*f.denominator() > 0);
        prop_assert_eq!(gcd(f.numerator(), f.denominator()), Ok(1));
        // Same value as the input
        prop_assert_eq!(*f.numerator() as i128 * d as i128, n as i128 * *f.denominator() as i128);
    }

    #[test]
    fn reduce_is_idempotent(n in RANGE, d in non_zero()) {
        let once = Fraction::reduce(n, d).unwrap();
        let twice = Fraction::reduce(*once.numerator(), *once.denominator()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn zero_denominator_is_an_error(n in RANGE) {
        prop_assert_eq!(Fraction::reduce(n, 0), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn mixed_round_trip(f in fraction()) {
        let mixed = f.to_mixed().unwrap();
        prop_assert!(mixed.numerator().abs() < *mixed.denominator());
        if *mixed.whole() != 0 {
            prop_assert!(*mixed.numerator() >= 0);
        }
        prop_assert_eq!(mixed.to_improper(), Ok(f));
    }

    #[test]
    fn fixed_and_big_agree(a in fraction(), b in fraction(), op in operation()) {
        let fixed = a.apply(op, &b);
        let big = BigFraction::from(a).apply(op, &BigFraction::from(b));
        match fixed {
            Ok(result) => prop_assert_eq!(Ok(BigFraction::from(result)), big),
            Err(FractionError::DivisionByZero) => prop_assert_eq!(big, Err(FractionError::DivisionByZero)),
            Err(err) => prop_assert!(false, "unexpected error {}", err),
        }
    }

    #[test]
    fn big_results_are_canonical(
        n in "-?[1-9][0-9]{0,19}",
        d in "[1-9][0-9]{0,19}",
        m in "-?[1-9][0-9]{0,19}",
        e in "[1-9][0-9]{0,19}",
        op in operation(),
    ) {
        let a = BigFraction::parse(&n, &d, Some(20)).unwrap();
        let b = BigFraction::parse(&m, &e, Some(20)).unwrap();
        let (numerator, denominator) = a.apply(op, &b).unwrap().into_parts();
        prop_assert!(denominator > BigInt::from(0u8));
        prop_assert_eq!(gcd(&numerator, &denominator), Ok(BigInt::from(1u8)));
    }
}
