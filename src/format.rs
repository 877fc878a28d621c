use crate::{FractionNumber, GenericFraction};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Write `numerator / denominator` with a fixed number of decimals, rounding
/// half away from zero. The division happens on big integers so scaling
/// never overflows, whatever integer type the fraction uses.
fn render(numerator: &BigInt, denominator: &BigInt, places: usize) -> String {
    let scale = (0..places).fold(BigInt::one(), |scale, _| scale * 10u8);
    let (mut quotient, remainder) = (numerator.abs() * &scale).div_rem(denominator);
    if remainder * 2u8 >= *denominator {
        quotient += 1u8;
    }

    let mut out = String::new();
    // -0.0001 rounds to 0.000, not -0.000
    if numerator.is_negative() && !quotient.is_zero() {
        out.push('-');
    }
    let (whole, decimals) = quotient.div_rem(&scale);
    out.push_str(&whole.to_string());
    if places > 0 {
        out.push_str(&format!(".{:0>width$}", decimals.to_string(), width = places));
    }
    out
}

impl<T: FractionNumber> GenericFraction<T> {
    /// Decimal view of the fraction: 5/4 with 3 places is `1.250`
    pub fn to_decimal_string(&self, places: usize) -> String {
        render(&self.numerator().to_bigint(), &self.denominator().to_bigint(), places)
    }
    /// Percentage view of the fraction: 5/4 with 1 place is `125.0%`
    pub fn to_percentage_string(&self, places: usize) -> String {
        let hundredfold = self.numerator().to_bigint() * 100u8;
        format!("{}%", render(&hundredfold, &self.denominator().to_bigint(), places))
    }
}
