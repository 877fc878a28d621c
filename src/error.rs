use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractionError>;

/// Everything that can stop a calculation from producing a fraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// The input could not be read as an integer (or decimal)
    #[error("invalid operand {input:?}: {reason}")]
    InvalidOperand { input: String, reason: &'static str },

    /// A denominator is zero, or the divisor of a division is zero
    #[error("division by zero")]
    DivisionByZero,

    /// A fixed-width intermediate value left the i64 range
    #[error("integer overflow, the operands need the big integer path")]
    Overflow,
}

impl FractionError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        FractionError::InvalidOperand {
            input: input.to_string(),
            reason,
        }
    }
}
