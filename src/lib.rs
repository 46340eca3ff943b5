//! Big Int \
//! This crate provides:
//! - [`BigInt`]: immutable arbitrary-precision signed integers stored as
//!   decimal digits, with schoolbook addition, subtraction, multiplication,
//!   division by a machine-word divisor, comparison, parsing and rendering.
//! - [`BigIntError`]: the failure cases, malformed decimal text and a zero
//!   divisor, reported to the caller instead of a wrong numeric answer.

mod big_int;
mod big_int_cache;
mod error;

#[cfg(test)]
mod proptests;

pub use big_int::BigInt;
pub use error::BigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&b - &a).to_string(), "-9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert!(a > b);

        let (q, r) = a.div_rem(7).unwrap();
        assert_eq!(q.to_string(), "1428571428571");
        assert_eq!(r, 3);
    }
}
