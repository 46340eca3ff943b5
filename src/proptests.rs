//! Property-based tests for the decimal arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::BigInt;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -100_000i64..100_000i64
    }

    // Strategy for generating non-zero divisors
    fn non_zero_divisor() -> impl Strategy<Value = i64> {
        prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
    }

    // Strategy for canonical decimal text of arbitrary magnitude
    fn decimal_string() -> impl Strategy<Value = String> {
        "(-?[1-9][0-9]{0,50}|0)"
    }

    proptest! {
        #[test]
        fn parse_render_roundtrip(s in decimal_string()) {
            let a: BigInt = s.parse().unwrap();
            prop_assert_eq!(a.to_decimal_string(), s);
        }

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_commutative_large(sa in decimal_string(), sb in decimal_string()) {
            let a: BigInt = sa.parse().unwrap();
            let b: BigInt = sb.parse().unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            let c = BigInt::from(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_commutative_large(sa in decimal_string(), sb in decimal_string()) {
            let a: BigInt = sa.parse().unwrap();
            let b: BigInt = sb.parse().unwrap();
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn additive_inverse(s in decimal_string()) {
            let a: BigInt = s.parse().unwrap();
            let inverse = BigInt::zero() - a.clone();
            prop_assert!((a + inverse).is_zero());
        }

        #[test]
        fn sub_is_add_of_negation(sa in decimal_string(), sb in decimal_string()) {
            let a: BigInt = sa.parse().unwrap();
            let b: BigInt = sb.parse().unwrap();
            prop_assert_eq!(&a - &b, &a + &(BigInt::zero() - b.clone()));
        }

        #[test]
        fn add_matches_i64(a in small_int(), b in small_int()) {
            let sum = BigInt::from(a) + BigInt::from(b);
            prop_assert_eq!(sum.to_i64(), Some(a + b));
        }

        #[test]
        fn mul_matches_i64(a in small_int(), b in small_int()) {
            let product = BigInt::from(a) * BigInt::from(b);
            prop_assert_eq!(product.to_i64(), Some(a * b));
        }

        #[test]
        fn div_rem_identity(s in decimal_string(), d in non_zero_divisor()) {
            let a: BigInt = s.parse().unwrap();
            let (q, r) = a.div_rem(d).unwrap();

            // remainder is bounded by the divisor and carries the
            // dividend's sign
            prop_assert!(r.abs() < d.abs());
            prop_assert!(r == 0 || (r < 0) == (a.signum() < 0));

            prop_assert_eq!(q * BigInt::from(d) + BigInt::from(r), a);
        }

        #[test]
        fn div_rem_matches_i64(a in small_int(), d in non_zero_divisor()) {
            let (q, r) = BigInt::from(a).div_rem(d).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a / d));
            prop_assert_eq!(r, a % d);
        }

        #[test]
        fn compare_reflexive(s in decimal_string()) {
            let a: BigInt = s.parse().unwrap();
            prop_assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        }

        #[test]
        fn compare_matches_i64(a in small_int(), b in small_int()) {
            let big_a = BigInt::from(a);
            let big_b = BigInt::from(b);
            prop_assert_eq!(big_a.cmp(&big_b), a.cmp(&b));
        }
    }
}
