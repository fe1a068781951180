use num_integer::Integer;
use proptest::prelude::*;

use crate::numbers::Rational;

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn rational() -> impl Strategy<Value = Rational<i64>> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn denominator_is_positive(n in small_int(), d in non_zero_int()) {
        prop_assert!(Rational::new(n, d).unwrap().denominator() > 0);
    }

    #[test]
    fn fully_reduced(n in small_int(), d in non_zero_int()) {
        let value = Rational::new(n, d).unwrap();
        if value.numerator() == 0 {
            prop_assert_eq!(value.denominator(), 1);
        } else {
            prop_assert_eq!(value.numerator().abs().gcd(&value.denominator()), 1);
        }
    }

    #[test]
    fn construction_idempotent(value in rational()) {
        prop_assert_eq!(
            Rational::new(value.numerator(), value.denominator()).unwrap(),
            value
        );
    }

    #[test]
    fn text_round_trip(value in rational()) {
        prop_assert_eq!(Rational::parse(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn same_value_same_representation(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
        prop_assert_eq!(Rational::new(n * k, d * k).unwrap(), Rational::new(n, d).unwrap());
    }

    #[test]
    fn add_commutative(a in rational(), b in rational()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn sub_inverts_add(a in rational(), b in rational()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn div_inverts_mul(a in rational(), b in rational()) {
        prop_assume!(b.numerator() != 0);
        prop_assert_eq!(((a * b) / b).unwrap(), a);
    }

    #[test]
    fn order_matches_float(a in rational(), b in rational()) {
        let fa = a.numerator() as f64 / a.denominator() as f64;
        let fb = b.numerator() as f64 / b.denominator() as f64;
        if a != b {
            prop_assert_eq!(a < b, fa < fb);
        }
    }
}
