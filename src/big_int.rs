//! # BigInt
//! Immutable arbitrary-precision signed integers stored as decimal digits.
//! Every operation returns a new value; operands are never mutated.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "999999999999999999".parse().unwrap();
//! let b: BigInt = "-1".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "999999999999999998");
//! assert_eq!((&a - &b).to_string(), "1000000000000000000");
//! assert_eq!((&a * &b).to_string(), "-999999999999999999");
//!
//! let (q, r) = a.div_rem(7).unwrap();
//! assert_eq!(q.to_string(), "142857142857142857");
//! assert_eq!(r, 0);
//! ```

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_int_cache::*;
use crate::error::BigIntError;

macro_rules! strip_trailing_zeros {
    ($vec: expr) => {{
        let mut v = $vec;
        while v.len() > 1 && v.ends_with(&[0]) {
            v.pop();
        }
        v
    }};
}

/// An arbitrary-precision signed integer.
///
/// The magnitude is a sequence of decimal digits, least-significant first,
/// with no most-significant zero digit except for the single digit `0`
/// representing zero. Zero is never negative.
#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u8>,
}

// construction
impl BigInt {
    /// Invariant-trusting constructor: `mag` must be normalized and a zero
    /// magnitude must not be marked negative.
    pub(crate) fn from_raw(mag: Vec<u8>, negative: bool) -> Self {
        debug_assert!(!mag.is_empty());
        debug_assert!(mag.iter().all(|d| *d <= 9));
        debug_assert!(mag.len() == 1 || *mag.last().unwrap() != 0);
        debug_assert!(!(negative && mag == [0]));
        BigInt { negative, mag }
    }

    /// The value zero.
    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    fn value_of(mut val: u64, negative: bool) -> Self {
        if val <= MAX_CONSTANT as u64 {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut mag = Vec::new();
        while val != 0 {
            mag.push((val % 10) as u8);
            val /= 10;
        }
        BigInt { negative, mag }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// parsing
impl BigInt {
    /// Parses decimal text: an optional leading `-` followed by one or
    /// more ASCII digits. Leading zeros are accepted and normalized away;
    /// `"-0"` and `"000"` both parse to canonical zero.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::InvalidFormat`] when the text is empty,
    /// consists only of `-`, or contains any character other than a
    /// leading `-` and ASCII digits.
    pub fn from_decimal_str(val: &str) -> Result<Self, BigIntError> {
        let bytes = val.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, bytes),
        };
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(BigIntError::InvalidFormat {
                input: val.to_owned(),
            });
        }

        // skip leading zeros, at least one digit remains
        let digits = match digits.iter().position(|b| *b != b'0') {
            Some(first) => &digits[first..],
            None => return Ok(BigInt::zero()),
        };

        let mag = digits.iter().rev().map(|b| b - b'0').collect();
        Ok(BigInt::from_raw(mag, negative))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal_str(val)
    }
}

// rendering
impl BigInt {
    /// Canonical decimal text: an optional leading `-` (omitted for zero
    /// and positive values) followed by the digits most-significant first.
    pub fn to_decimal_string(&self) -> String {
        let mut s = String::with_capacity(self.mag.len() + 1);
        if self.negative {
            s.push('-');
        }
        for &d in self.mag.iter().rev() {
            s.push((b'0' + d) as char);
        }
        s
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

// comparison
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_mag = &self.mag;
        let other_mag = &other.mag;

        if self_mag.len() != other_mag.len() {
            return self_mag.len().cmp(&other_mag.len());
        }

        for (a, b) in self_mag.iter().rev().zip(other_mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.compare_mag(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.compare_mag(other),
            (true, true) => self.compare_mag(other).reverse(),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

// sign helpers
impl BigInt {
    /// Returns `true` when the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            mag: self.mag.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Attempts a narrowing conversion, `None` if the value does not fit
    /// in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        // accumulate on the negative side so i64::MIN converts
        let mut acc: i64 = 0;
        for &d in self.mag.iter().rev() {
            acc = acc.checked_mul(10)?.checked_sub(d as i64)?;
        }
        if self.negative {
            Some(acc)
        } else {
            acc.checked_neg()
        }
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            self
        } else {
            BigInt {
                negative: !self.negative,
                mag: self.mag,
            }
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// addition
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return val;
        }

        if val.negative == self.negative {
            let negative = self.negative;
            return BigInt::from_raw(BigInt::add_mag(&self.mag, &val.mag), negative);
        }

        match self.compare_mag(&val) {
            Ordering::Less => {
                let mag = BigInt::sub_mag(&val.mag, &self.mag);
                BigInt::from_raw(mag, val.negative)
            }
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let mag = BigInt::sub_mag(&self.mag, &val.mag);
                BigInt::from_raw(mag, self.negative)
            }
        }
    }
}

impl BigInt {
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for i in 0..long.len() {
            let mut sum = long[i] + carry;
            if i < short.len() {
                sum += short[i];
            }
            result.push(sum % 10);
            carry = sum / 10;
        }

        if carry > 0 {
            result.push(carry);
        }

        result
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// subtraction
impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return -val;
        }

        if val.negative != self.negative {
            let negative = self.negative;
            return BigInt::from_raw(BigInt::add_mag(&self.mag, &val.mag), negative);
        }

        match self.compare_mag(&val) {
            Ordering::Less => {
                let mag = BigInt::sub_mag(&val.mag, &self.mag);
                BigInt::from_raw(mag, !self.negative)
            }
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let mag = BigInt::sub_mag(&self.mag, &val.mag);
                BigInt::from_raw(mag, self.negative)
            }
        }
    }
}

impl BigInt {
    /// Magnitude subtraction, `big` must compare greater than or equal to
    /// `little`.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;
        for i in 0..big.len() {
            let mut diff = big[i] as i8 - borrow;
            if i < little.len() {
                diff -= little[i] as i8;
            }

            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }

        strip_trailing_zeros!(result)
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() - rhs.clone();
    }
}

// multiplication
impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return BigInt::zero();
        }
        let negative = self.negative != val.negative;
        BigInt::from_raw(BigInt::mul_mag(&self.mag, &val.mag), negative)
    }
}

impl BigInt {
    /// Schoolbook long multiplication over normalized magnitudes.
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; x.len() + y.len()];

        for (i, &xd) in x.iter().enumerate() {
            let mut carry = 0u32;
            for (j, &yd) in y.iter().enumerate() {
                let product = xd as u32 * yd as u32 + result[i + j] as u32 + carry;
                result[i + j] = (product % 10) as u8;
                carry = product / 10;
            }
            // residual carry of this pass lands one past y's digits
            result[i + y.len()] = carry as u8;
        }

        strip_trailing_zeros!(result)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() * rhs.clone()
    }
}

// division by a machine-word divisor
impl BigInt {
    /// Truncating division by a non-zero native integer, returning the
    /// quotient and the remainder. The remainder carries the dividend's
    /// sign; the quotient sign is the XOR of the operand signs.
    ///
    /// ```
    /// use big_int::BigInt;
    ///
    /// let a: BigInt = "-10".parse().unwrap();
    /// let (q, r) = a.div_rem(3).unwrap();
    /// assert_eq!(q.to_string(), "-3");
    /// assert_eq!(r, -1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: i64) -> Result<(BigInt, i64), BigIntError> {
        if divisor == 0 {
            return Err(BigIntError::DivisionByZero);
        }

        // u128 intermediates keep rem * 10 + digit in range for any
        // i64 divisor, i64::MIN included
        let d = divisor.unsigned_abs() as u128;
        let mut rem: u128 = 0;
        let mut quotient = Vec::with_capacity(self.mag.len());
        for &digit in self.mag.iter().rev() {
            rem = rem * 10 + digit as u128;
            quotient.push((rem / d) as u8);
            rem %= d;
        }
        quotient.reverse();
        let mag = strip_trailing_zeros!(quotient);

        let negative = (self.negative ^ (divisor < 0)) && (mag.len() > 1 || mag[0] != 0);
        let mut remainder = rem as i64;
        if self.negative {
            remainder = -remainder;
        }

        Ok((BigInt::from_raw(mag, negative), remainder))
    }
}

#[test]
fn test_parse_normalizes() {
    let a = BigInt::from_decimal_str("007").unwrap();
    assert_eq!(a.to_string(), "7");

    let zero = BigInt::from_decimal_str("000").unwrap();
    assert_eq!(zero.to_string(), "0");
    assert!(zero.is_zero());

    let neg_zero = BigInt::from_decimal_str("-0").unwrap();
    assert_eq!(neg_zero.to_string(), "0");
    assert_eq!(neg_zero.signum(), 0);
    assert_eq!(neg_zero, zero);

    let a = BigInt::from_decimal_str("-00123").unwrap();
    assert_eq!(a.to_string(), "-123");

    let a: BigInt = "12345678909876523784950683472613487560983287654321"
        .parse()
        .unwrap();
    assert_eq!(
        a.to_string(),
        "12345678909876523784950683472613487560983287654321"
    );
}

#[test]
fn test_parse_rejects_malformed() {
    for input in ["", "-", "--1", "+5", "12a3", "1-2", " 1", "1 ", "12.3"] {
        assert_eq!(
            input.parse::<BigInt>(),
            Err(BigIntError::InvalidFormat {
                input: input.to_owned()
            }),
            "input = {:?}",
            input
        );
    }
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: BigInt = num.into();
    assert_eq!(big.to_string(), "12");

    let num: i16 = -100;
    let big: BigInt = num.into();
    assert_eq!(big.to_string(), "-100");

    let num: u32 = 0;
    let big: BigInt = num.into();
    assert!(big.is_zero());

    let num: u64 = u64::MAX;
    let big: BigInt = num.into();
    assert_eq!(big.to_string(), "18446744073709551615");

    let num: i64 = i64::MIN;
    let big: BigInt = num.into();
    assert_eq!(big.to_string(), "-9223372036854775808");

    // cached constants on both sides of zero
    assert_eq!(BigInt::from(16_u8).to_string(), "16");
    assert_eq!(BigInt::from(-16_i32).to_string(), "-16");
}

#[test]
fn test_add_carry() {
    let a: BigInt = "999".parse().unwrap();
    let b: BigInt = "1".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "1000");
    assert_eq!((&b + &a).to_string(), "1000");

    let a: BigInt = "99999999999999999999999999".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "100000000000000000000000000");
}

#[test]
fn test_add_sign_combinations() {
    let five: BigInt = "5".parse().unwrap();
    let three: BigInt = "3".parse().unwrap();

    assert_eq!((&five + &three).to_string(), "8");
    assert_eq!((&five + &-&three).to_string(), "2");
    assert_eq!((&-&five + &three).to_string(), "-2");
    assert_eq!((&-&five + &-&three).to_string(), "-8");

    // smaller magnitude on the left
    assert_eq!((&three + &-&five).to_string(), "-2");
    assert_eq!((&-&three + &five).to_string(), "2");

    // opposite values cancel to sign-free zero
    let sum = &five + &-&five;
    assert!(sum.is_zero());
    assert_eq!(sum.to_string(), "0");
}

#[test]
fn test_sub_sign_combinations() {
    let a: BigInt = "100".parse().unwrap();
    let b: BigInt = "999".parse().unwrap();
    assert_eq!((&a - &b).to_string(), "-899");
    assert_eq!((&b - &a).to_string(), "899");

    let five: BigInt = "5".parse().unwrap();
    let three: BigInt = "3".parse().unwrap();

    assert_eq!((&five - &three).to_string(), "2");
    assert_eq!((&three - &five).to_string(), "-2");
    assert_eq!((&five - &-&three).to_string(), "8");
    assert_eq!((&-&five - &three).to_string(), "-8");
    assert_eq!((&-&five - &-&three).to_string(), "-2");
    assert_eq!((&-&three - &-&five).to_string(), "2");

    let diff = &five - &five;
    assert!(diff.is_zero());
    assert_eq!(diff.to_string(), "0");
}

#[test]
fn test_mul() {
    let a: BigInt = "123456789".parse().unwrap();
    let b: BigInt = "987654321".parse().unwrap();
    let product = "121932631112635269";
    assert_eq!((&a * &b).to_string(), product);
    assert_eq!((&b * &a).to_string(), product);

    assert_eq!((&-&a * &b).to_string(), format!("-{}", product));
    assert_eq!((&a * &-&b).to_string(), format!("-{}", product));
    assert_eq!((&-&a * &-&b).to_string(), product);
}

#[test]
fn test_mul_carry_flush() {
    // every pass ends with a residual carry
    let a: BigInt = "99".parse().unwrap();
    assert_eq!((&a * &a).to_string(), "9801");

    let a: BigInt = "999999999".parse().unwrap();
    assert_eq!((&a * &a).to_string(), "999999998000000001");
}

#[test]
fn test_mul_by_zero() {
    let a: BigInt = "-987654321".parse().unwrap();
    let product = &a * &BigInt::zero();
    assert!(product.is_zero());
    assert_eq!(product.to_string(), "0");
    assert_eq!(product.signum(), 0);
}

#[test]
fn test_div_rem() {
    let a: BigInt = "1000".parse().unwrap();
    let (q, r) = a.div_rem(123).unwrap();
    assert_eq!(q.to_string(), "8");
    assert_eq!(r, 16);

    let a: BigInt = "100000000000000000000".parse().unwrap();
    let (q, r) = a.div_rem(3).unwrap();
    assert_eq!(q.to_string(), "33333333333333333333");
    assert_eq!(r, 1);

    let a: BigInt = "999999999999999999999999".parse().unwrap();
    let (q, r) = a.div_rem(9).unwrap();
    assert_eq!(q.to_string(), "111111111111111111111111");
    assert_eq!(r, 0);

    let (q, r) = BigInt::zero().div_rem(5).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, 0);
}

#[test]
fn test_div_rem_signs() {
    // truncating division, remainder carries the dividend's sign
    let a: BigInt = "-10".parse().unwrap();
    let (q, r) = a.div_rem(3).unwrap();
    assert_eq!(q.to_string(), "-3");
    assert_eq!(r, -1);

    let a: BigInt = "10".parse().unwrap();
    let (q, r) = a.div_rem(-3).unwrap();
    assert_eq!(q.to_string(), "-3");
    assert_eq!(r, 1);

    let a: BigInt = "-10".parse().unwrap();
    let (q, r) = a.div_rem(-3).unwrap();
    assert_eq!(q.to_string(), "3");
    assert_eq!(r, -1);

    // a zero quotient never keeps the computed sign
    let a: BigInt = "-1".parse().unwrap();
    let (q, r) = a.div_rem(2).unwrap();
    assert_eq!(q.to_string(), "0");
    assert_eq!(q.signum(), 0);
    assert_eq!(r, -1);
}

#[test]
fn test_div_rem_extreme_divisors() {
    let a: BigInt = "170141183460469231731687303715884105727".parse().unwrap();
    let (q, r) = a.div_rem(i64::MAX).unwrap();
    let back = q * BigInt::from(i64::MAX) + BigInt::from(r);
    assert_eq!(back.to_string(), "170141183460469231731687303715884105727");

    let (q, r) = BigInt::from(i64::MIN).div_rem(i64::MIN).unwrap();
    assert_eq!(q.to_string(), "1");
    assert_eq!(r, 0);
}

#[test]
fn test_divide_by_zero() {
    let a: BigInt = "5".parse().unwrap();
    assert_eq!(a.div_rem(0), Err(BigIntError::DivisionByZero));
    assert_eq!(BigInt::zero().div_rem(0), Err(BigIntError::DivisionByZero));
}

#[test]
fn test_compare() {
    let sorted = ["-1000", "-100", "-2", "0", "1", "999", "1000"];
    for (i, a) in sorted.iter().enumerate() {
        for (j, b) in sorted.iter().enumerate() {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            assert_eq!(a.cmp(&b), i.cmp(&j), "{} vs {}", a, b);
        }
    }

    let a: BigInt = "12345".parse().unwrap();
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
}

#[test]
fn test_to_i64() {
    let a: BigInt = "123456789110".parse().unwrap();
    assert_eq!(a.to_i64(), Some(123456789110));
    assert_eq!(BigInt::zero().to_i64(), Some(0));
    assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
    assert_eq!(BigInt::from(i64::MAX).to_i64(), Some(i64::MAX));

    let too_big: BigInt = "9223372036854775808".parse().unwrap();
    assert_eq!(too_big.to_i64(), None);
    assert_eq!((-too_big).to_i64(), Some(i64::MIN));

    let way_too_big: BigInt = "99999999999999999999".parse().unwrap();
    assert_eq!(way_too_big.to_i64(), None);
}

#[test]
fn test_neg_abs_signum() {
    let a: BigInt = "42".parse().unwrap();
    assert_eq!((-&a).to_string(), "-42");
    assert_eq!((-&-&a).to_string(), "42");
    assert_eq!((-&a).abs().to_string(), "42");
    assert_eq!(a.signum(), 1);
    assert_eq!((-&a).signum(), -1);

    // negating zero stays sign-free
    let zero = -BigInt::zero();
    assert_eq!(zero.signum(), 0);
    assert_eq!(zero.to_string(), "0");
}

#[test]
fn test_assign_ops() {
    let mut a: BigInt = "10".parse().unwrap();
    a += BigInt::from(5_u8);
    assert_eq!(a.to_string(), "15");
    a -= &BigInt::from(20_u8);
    assert_eq!(a.to_string(), "-5");
    a *= BigInt::from(-3_i8);
    assert_eq!(a.to_string(), "15");
}
