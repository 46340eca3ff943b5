use thiserror::Error;

/// Errors reported by [`BigInt`](crate::BigInt) construction and division.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The input string is not an optional `-` followed by one or more
    /// ASCII decimal digits.
    #[error("invalid decimal format: {input:?}")]
    InvalidFormat {
        /// The rejected input text.
        input: String,
    },
    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
