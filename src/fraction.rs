use crate::{gcd, parse_integer, FractionError, FractionNumber, Operand, Operation, Result, Settings};
use num_bigint::BigInt;
use std::{cmp::Ordering, fmt, str::FromStr};

/// A rational number kept in canonical form: numerator and denominator share
/// no common factor and the denominator is always positive. Every constructor
/// goes through `reduce`, so two equal values always compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericFraction<T> {
    numerator: T,
    denominator: T,
}

/// Fixed-width fraction. Values whose intermediate products leave the `i64`
/// range fail with `FractionError::Overflow`.
pub type Fraction = GenericFraction<i64>;

/// Arbitrary precision fraction for operands beyond native integer range
pub type BigFraction = GenericFraction<BigInt>;

fn checked_mul<T: FractionNumber>(x: &T, y: &T) -> Result<T> {
    x.checked_mul(y).ok_or(FractionError::Overflow)
}

impl<T: FractionNumber> GenericFraction<T> {
    /// Reduce `numerator/denominator` to lowest terms with the sign moved to
    /// the numerator. A zero denominator is an error, never 0/1.
    pub fn reduce(numerator: T, denominator: T) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        // Not zero, since the denominator isn't
        let divisor = gcd(&numerator, &denominator)?;
        let mut numerator = numerator.div_floor(&divisor);
        let mut denominator = denominator.div_floor(&divisor);

        // 1/-2 becomes -1/2, -1/-2 becomes 1/2
        if denominator.is_negative() {
            numerator = numerator.checked_negate().ok_or(FractionError::Overflow)?;
            denominator = denominator.checked_negate().ok_or(FractionError::Overflow)?;
        }
        Ok(Self { numerator, denominator })
    }
    /// Alias to `reduce`
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        Self::reduce(numerator, denominator)
    }
    /// Parse a numerator and denominator given as separate strings, the way
    /// calculator forms submit them.
    pub fn parse(numerator: &str, denominator: &str, max_digits: Option<usize>) -> Result<Self> {
        let numerator = parse_integer(numerator, max_digits)?;
        let denominator = parse_integer(denominator, max_digits)?;
        Self::reduce(numerator, denominator)
    }
    /// Construct a fraction from a string such as `1.25`, `-0.5` or `.75`
    pub fn from_decimal_str(input: &str) -> Result<Self> {
        let text = input.trim();
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let negative = unsigned.len() != text.len();

        let (whole, decimals) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && decimals.is_empty() {
            return Err(FractionError::invalid(input, "expected a decimal number"));
        }
        if !whole.bytes().chain(decimals.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(FractionError::invalid(input, "expected a decimal number"));
        }

        let radix = T::small(10);
        let mut numerator = T::zero();
        let mut denominator = T::one();

        for digit in whole.bytes().chain(decimals.bytes()) {
            numerator = checked_mul(&numerator, &radix)?
                .checked_add(&T::small(digit - b'0'))
                .ok_or(FractionError::Overflow)?;
        }
        for _ in decimals.bytes() {
            denominator = checked_mul(&denominator, &radix)?;
        }
        if negative {
            numerator = numerator.checked_negate().ok_or(FractionError::Overflow)?;
        }
        Self::reduce(numerator, denominator)
    }
    /// A whole number as a fraction over 1
    pub fn from_integer(numerator: T) -> Self {
        Self {
            numerator,
            denominator: T::one(),
        }
    }
    pub fn zero() -> Self {
        Self::from_integer(T::zero())
    }
    pub fn one() -> Self {
        Self::from_integer(T::one())
    }
    /// Return the numerator, which carries the sign
    pub fn numerator(&self) -> &T {
        &self.numerator
    }
    /// Return the denominator, which is always positive
    pub fn denominator(&self) -> &T {
        &self.denominator
    }
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }
    /// Numerator and denominator as decimal strings
    pub fn to_strings(&self) -> (String, String) {
        (self.numerator.to_string(), self.denominator.to_string())
    }
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
    /// True if the denominator is 1
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the negated value, or `Overflow` if the numerator can't be negated
    pub fn checked_neg(&self) -> Result<Self> {
        Ok(Self {
            numerator: self.numerator.checked_negate().ok_or(FractionError::Overflow)?,
            denominator: self.denominator.clone(),
        })
    }
    /// Return this value with a positive sign.
    /// abs of -1/2 is 1/2.
    pub fn abs(&self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self.clone())
        }
    }
    /// Same thing as in mathematics taking the power of -1.
    /// Fails with `DivisionByZero` for 0.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::reduce(self.denominator.clone(), self.numerator.clone())
    }

    /// a/b + c/d = (ad + cb) / bd
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let left = checked_mul(&self.numerator, &other.denominator)?;
        let right = checked_mul(&other.numerator, &self.denominator)?;
        let numerator = left.checked_add(&right).ok_or(FractionError::Overflow)?;
        Self::reduce(numerator, checked_mul(&self.denominator, &other.denominator)?)
    }
    /// a/b - c/d = (ad - cb) / bd
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let left = checked_mul(&self.numerator, &other.denominator)?;
        let right = checked_mul(&other.numerator, &self.denominator)?;
        let numerator = left.checked_sub(&right).ok_or(FractionError::Overflow)?;
        Self::reduce(numerator, checked_mul(&self.denominator, &other.denominator)?)
    }
    /// a/b * c/d = ac / bd
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        Self::reduce(
            checked_mul(&self.numerator, &other.numerator)?,
            checked_mul(&self.denominator, &other.denominator)?,
        )
    }
    /// a/b / c/d = ad / bc. Dividing by zero is an error even though the
    /// zero fraction itself is valid.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::reduce(
            checked_mul(&self.numerator, &other.denominator)?,
            checked_mul(&self.denominator, &other.numerator)?,
        )
    }
    /// Run one of the four calculator operations
    pub fn apply(&self, op: Operation, other: &Self) -> Result<Self> {
        match op {
            Operation::Add => self.checked_add(other),
            Operation::Subtract => self.checked_sub(other),
            Operation::Multiply => self.checked_mul(other),
            Operation::Divide => self.checked_div(other),
        }
    }

    /// Calculates the float result of this fraction. Big values that don't
    /// fit a float turn into infinity.
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
    }
    /// Calculates the integer part, rounding towards zero
    pub fn trunc(&self) -> T {
        let (quotient, _) = self.numerator.div_rem(&self.denominator);
        quotient
    }
}
impl From<Fraction> for BigFraction {
    fn from(fraction: Fraction) -> Self {
        Self {
            numerator: BigInt::from(fraction.numerator),
            denominator: BigInt::from(fraction.denominator),
        }
    }
}
impl<T: FractionNumber> Default for GenericFraction<T> {
    fn default() -> Self {
        Self::zero()
    }
}
impl<T: FractionNumber> PartialOrd for GenericFraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: FractionNumber> Ord for GenericFraction<T> {
    /// Compares by cross multiplication on big integers, so it can't overflow
    fn cmp(&self, other: &Self) -> Ordering {
        let me = self.numerator.to_bigint() * other.denominator.to_bigint();
        let other = other.numerator.to_bigint() * self.denominator.to_bigint();
        me.cmp(&other)
    }
}
impl<T: FractionNumber> fmt::Display for GenericFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
impl<T: fmt::Debug> fmt::Debug for GenericFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.numerator, self.denominator)
    }
}
impl<T: FractionNumber> FromStr for GenericFraction<T> {
    type Err = FractionError;

    /// Accepts `n`, `n/d` and mixed numbers written as `w n/d`, with no limit
    /// on the number of digits
    fn from_str(input: &str) -> Result<Self> {
        let settings = Settings::default().with_max_digits(None);
        input.parse::<Operand>()?.to_fraction(&settings)
    }
}
