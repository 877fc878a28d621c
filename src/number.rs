use crate::{FractionError, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Signed, ToPrimitive};
use std::{fmt, mem};

/// An integer type fractions can be built on. Implemented for `i64`, where
/// every step is overflow checked, and for `BigInt`, where nothing overflows.
pub trait FractionNumber:
    Clone + fmt::Debug + fmt::Display + Integer + Signed + CheckedAdd + CheckedSub + CheckedMul + ToPrimitive
{
    /// Convert text already validated as `-?[0-9]+`
    fn from_digits(text: &str) -> Result<Self>;
    /// Negate, or None if the result can't be represented
    fn checked_negate(&self) -> Option<Self>;
    /// Small constants such as the radix
    fn small(value: u8) -> Self;
    /// Widen into an arbitrary precision integer
    fn to_bigint(&self) -> BigInt;
}

impl FractionNumber for i64 {
    fn from_digits(text: &str) -> Result<Self> {
        // The text is validated, so the only way to fail is being out of range
        text.parse().map_err(|_| FractionError::Overflow)
    }
    fn checked_negate(&self) -> Option<Self> {
        self.checked_neg()
    }
    fn small(value: u8) -> Self {
        i64::from(value)
    }
    fn to_bigint(&self) -> BigInt {
        BigInt::from(*self)
    }
}

impl FractionNumber for BigInt {
    fn from_digits(text: &str) -> Result<Self> {
        text.parse()
            .map_err(|_| FractionError::invalid(text, "not a decimal integer"))
    }
    fn checked_negate(&self) -> Option<Self> {
        Some(-self)
    }
    fn small(value: u8) -> Self {
        BigInt::from(value)
    }
    fn to_bigint(&self) -> BigInt {
        self.clone()
    }
}

/// Absolute value, or `Overflow` for `i64::MIN`
pub(crate) fn magnitude<T: FractionNumber>(value: &T) -> Result<T> {
    if value.is_negative() {
        value.checked_negate().ok_or(FractionError::Overflow)
    } else {
        Ok(value.clone())
    }
}

/// Find the greatest common divisor of two numbers using Euclid's algorithm.
/// The result is never negative, and `gcd(0, 0)` is 0.
pub fn gcd<T: FractionNumber>(x: &T, y: &T) -> Result<T> {
    let mut x = magnitude(x)?;
    let mut y = magnitude(y)?;

    // gcd(x, 0) = x
    while !y.is_zero() {
        // gcd(x, y) = gcd(y, x mod y)
        let rem = x.mod_floor(&y);
        x = mem::replace(&mut y, rem);
    }
    Ok(x)
}

/// The single validated parse step every operand goes through: an optional
/// leading minus followed by ASCII digits. Whitespace around the field is
/// ignored, since form inputs arrive padded, but nothing may appear between
/// the sign and the digits or inside the digits.
/// `max_digits` caps the number of significant digits.
pub fn parse_integer<T: FractionNumber>(input: &str, max_digits: Option<usize>) -> Result<T> {
    let text = input.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() {
        return Err(FractionError::invalid(input, "expected an integer"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FractionError::invalid(input, "only digits may follow the sign"));
    }
    if let Some(max) = max_digits {
        if digits.trim_start_matches('0').len() > max {
            return Err(FractionError::invalid(input, "too many digits"));
        }
    }

    T::from_digits(text)
}
