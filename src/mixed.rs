use crate::{number::magnitude, parse_integer, FractionError, FractionNumber, GenericFraction, Result};
use std::fmt;

/// A number written as `whole numerator/denominator`, such as `1 1/4`.
///
/// The sign lives on the whole part whenever the whole part isn't zero, in
/// which case the fractional part is never negative. With a zero whole part
/// the numerator carries the sign instead, so `-1/2` is `0 -1/2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MixedNumber<T> {
    whole: T,
    numerator: T,
    denominator: T,
}

fn checked_mul<T: FractionNumber>(x: &T, y: &T) -> Result<T> {
    x.checked_mul(y).ok_or(FractionError::Overflow)
}

impl<T: FractionNumber> MixedNumber<T> {
    /// Construct a mixed number from its three parts. The fractional part may
    /// be improper or unreduced (`1 5/4` is stored as `2 1/4`), but a negative
    /// fractional part next to a non-zero whole part is ambiguous and rejected.
    /// Fails with `Overflow` if the value's canonical parts don't fit in `T`.
    pub fn new(whole: T, numerator: T, denominator: T) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        if !whole.is_zero() && (numerator.is_negative() || denominator.is_negative()) {
            return Err(FractionError::InvalidOperand {
                input: format!("{} {}/{}", whole, numerator, denominator),
                reason: "the sign belongs on the whole part",
            });
        }
        let raw = Self {
            whole,
            numerator,
            denominator,
        };
        raw.to_improper()?.to_mixed()
    }
    /// Parse the three form fields of a mixed number
    pub fn parse(whole: &str, numerator: &str, denominator: &str, max_digits: Option<usize>) -> Result<Self> {
        Self::new(
            parse_integer(whole, max_digits)?,
            parse_integer(numerator, max_digits)?,
            parse_integer(denominator, max_digits)?,
        )
    }
    pub fn whole(&self) -> &T {
        &self.whole
    }
    pub fn numerator(&self) -> &T {
        &self.numerator
    }
    pub fn denominator(&self) -> &T {
        &self.denominator
    }
    /// Convert back into a single reduced fraction:
    /// `whole * denominator + sign(whole) * numerator`, where a zero whole
    /// part counts as positive.
    pub fn to_improper(&self) -> Result<GenericFraction<T>> {
        let sign = if self.whole.is_zero() { T::one() } else { self.whole.signum() };
        let scaled = checked_mul(&self.whole, &self.denominator)?;
        let part = checked_mul(&sign, &self.numerator)?;
        let numerator = scaled.checked_add(&part).ok_or(FractionError::Overflow)?;
        GenericFraction::reduce(numerator, self.denominator.clone())
    }
}

impl<T: FractionNumber> GenericFraction<T> {
    /// Split into a whole part and a proper fraction. 5/4 becomes 1 1/4,
    /// -5/4 becomes -1 1/4 and -1/2 stays 0 -1/2.
    pub fn to_mixed(&self) -> Result<MixedNumber<T>> {
        let negative = self.is_negative();
        let (quotient, remainder) = magnitude(self.numerator())?.div_rem(self.denominator());

        let negate = |value: T| -> Result<T> {
            if negative {
                value.checked_negate().ok_or(FractionError::Overflow)
            } else {
                Ok(value)
            }
        };
        let (whole, numerator) = if quotient.is_zero() {
            (quotient, negate(remainder)?)
        } else {
            (negate(quotient)?, remainder)
        };

        Ok(MixedNumber {
            whole,
            numerator,
            denominator: self.denominator().clone(),
        })
    }
}

impl<T: FractionNumber> fmt::Display for MixedNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.whole.is_zero(), self.numerator.is_zero()) {
            (true, true) => write!(f, "0"),
            (true, false) => write!(f, "{}/{}", self.numerator, self.denominator),
            (false, true) => write!(f, "{}", self.whole),
            (false, false) => write!(f, "{} {}/{}", self.whole, self.numerator, self.denominator),
        }
    }
}
