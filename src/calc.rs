use crate::{FractionError, FractionNumber, GenericFraction, MixedNumber, Result, Settings};
use num_bigint::BigInt;
use std::{fmt, str::FromStr};
use tracing::{debug, instrument, trace};

/// The four calculator operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}
impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }
}
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FromStr for Operation {
    type Err = FractionError;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" | "×" => Ok(Operation::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Operation::Divide),
            _ => Err(FractionError::invalid(input, "unknown operation")),
        }
    }
}

/// One side of a calculation, as submitted by a form: the raw text of each
/// field. Nothing is interpreted until `to_fraction`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operand {
    /// Whole part for mixed number input. Blank counts as absent.
    pub whole: Option<String>,
    pub numerator: String,
    pub denominator: String,
}
impl Operand {
    pub fn simple<S: Into<String>>(numerator: S, denominator: S) -> Self {
        Self {
            whole: None,
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }
    pub fn mixed<S: Into<String>>(whole: S, numerator: S, denominator: S) -> Self {
        Self {
            whole: Some(whole.into()),
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }
    /// Validate every field and build the reduced fraction
    pub fn to_fraction<T: FractionNumber>(&self, settings: &Settings) -> Result<GenericFraction<T>> {
        match self.whole.as_deref().map(str::trim) {
            Some(whole) if !whole.is_empty() => {
                MixedNumber::parse(whole, &self.numerator, &self.denominator, settings.max_digits)?.to_improper()
            }
            _ => GenericFraction::parse(&self.numerator, &self.denominator, settings.max_digits),
        }
    }
}
impl FromStr for Operand {
    type Err = FractionError;

    /// Split `n`, `n/d` or `w n/d` into fields
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.trim().splitn(2, '/');
        let head = parts.next().unwrap_or_default();
        let denominator = parts.next();

        let mut words = head.split_whitespace();
        match (words.next(), words.next(), words.next(), denominator) {
            (Some(numerator), None, None, None) => Ok(Self::simple(numerator, "1")),
            (Some(numerator), None, None, Some(denominator)) => Ok(Self::simple(numerator, denominator.trim())),
            (Some(whole), Some(numerator), None, Some(denominator)) => Ok(Self::mixed(whole, numerator, denominator.trim())),
            _ => Err(FractionError::invalid(input, "expected n, n/d or w n/d")),
        }
    }
}

/// The outcome of one calculation with every view a calculator page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculation<T> {
    lhs: GenericFraction<T>,
    operation: Operation,
    rhs: GenericFraction<T>,
    result: GenericFraction<T>,
    mixed: MixedNumber<T>,
    decimal: String,
    percentage: String,
}
impl<T: FractionNumber> Calculation<T> {
    pub fn lhs(&self) -> &GenericFraction<T> {
        &self.lhs
    }
    pub fn operation(&self) -> Operation {
        self.operation
    }
    pub fn rhs(&self) -> &GenericFraction<T> {
        &self.rhs
    }
    /// The result in lowest terms
    pub fn result(&self) -> &GenericFraction<T> {
        &self.result
    }
    pub fn mixed(&self) -> &MixedNumber<T> {
        &self.mixed
    }
    pub fn decimal(&self) -> &str {
        &self.decimal
    }
    pub fn percentage(&self) -> &str {
        &self.percentage
    }
    pub fn into_result(self) -> GenericFraction<T> {
        self.result
    }
}
impl<T: FractionNumber> fmt::Display for Calculation<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {} (mixed {}, decimal {}, percentage {})",
            self.lhs, self.operation, self.rhs, self.result, self.mixed, self.decimal, self.percentage
        )
    }
}

/// Parse both operands, run the operation and project the result. Generic
/// over the integer domain; `calculate` and `calculate_big` pick one.
#[instrument(level = "debug", skip(settings))]
pub fn evaluate<T: FractionNumber>(
    lhs: &Operand,
    operation: Operation,
    rhs: &Operand,
    settings: &Settings,
) -> Result<Calculation<T>> {
    let run = || -> Result<Calculation<T>> {
        let left = lhs.to_fraction::<T>(settings)?;
        let right = rhs.to_fraction::<T>(settings)?;
        trace!(%left, %right, "operands parsed");

        let result = left.apply(operation, &right)?;
        let mixed = result.to_mixed()?;
        Ok(Calculation {
            decimal: result.to_decimal_string(settings.decimal_places),
            percentage: result.to_percentage_string(settings.percentage_places),
            lhs: left,
            operation,
            rhs: right,
            result,
            mixed,
        })
    };

    match run() {
        Ok(calculation) => {
            debug!(result = %calculation.result, "calculated");
            Ok(calculation)
        }
        Err(err) => {
            debug!(%err, "calculation failed");
            Err(err)
        }
    }
}

/// Calculate on `i64`. Operands or products beyond that range give
/// `FractionError::Overflow`; retry with `calculate_big` in that case.
pub fn calculate(lhs: &Operand, operation: Operation, rhs: &Operand, settings: &Settings) -> Result<Calculation<i64>> {
    evaluate(lhs, operation, rhs, settings)
}

/// Calculate on arbitrary precision integers
pub fn calculate_big(
    lhs: &Operand,
    operation: Operation,
    rhs: &Operand,
    settings: &Settings,
) -> Result<Calculation<BigInt>> {
    evaluate(lhs, operation, rhs, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fraction;

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn add_with_views() {
        let settings = Settings::default();
        let calc = calculate(&Operand::simple("3", "4"), Operation::Add, &Operand::simple("1", "2"), &settings).unwrap();
        assert_eq!(*calc.result(), frac(5, 4));
        assert_eq!(calc.decimal(), "1.250");
        assert_eq!(calc.mixed().to_string(), "1 1/4");
        assert_eq!(calc.percentage(), "125.0%");
        assert_eq!(calc.to_string(), "3/4 + 1/2 = 5/4 (mixed 1 1/4, decimal 1.250, percentage 125.0%)");
    }

    #[test]
    fn four_operations() {
        let settings = Settings::default();
        let half = Operand::simple("1", "2");
        let run = |op, rhs: &Operand| calculate(&half, op, rhs, &settings).map(Calculation::into_result);

        assert_eq!(run(Operation::Multiply, &Operand::simple("2", "3")), Ok(frac(1, 3)));
        assert_eq!(run(Operation::Divide, &Operand::simple("1", "4")), Ok(frac(2, 1)));
        assert_eq!(run(Operation::Subtract, &Operand::simple("3", "4")), Ok(frac(-1, 4)));
        assert_eq!(run(Operation::Divide, &Operand::simple("0", "1")), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn mixed_operands() {
        let settings = Settings::default();
        let calc = calculate(
            &Operand::mixed("1", "1", "2"),
            Operation::Add,
            &Operand::mixed("-2", "1", "4"),
            &settings,
        )
        .unwrap();
        assert_eq!(*calc.result(), frac(-3, 4));
        assert_eq!(calc.mixed().to_string(), "-3/4");

        // A blank whole field is a plain fraction
        let blank = Operand {
            whole: Some("  ".to_string()),
            ..Operand::simple("3", "8")
        };
        assert_eq!(blank.to_fraction::<i64>(&settings), Ok(frac(3, 8)));
    }

    #[test]
    fn rejected_input() {
        let settings = Settings::default();
        let one = Operand::simple("1", "1");
        assert_eq!(
            calculate(&Operand::simple("1", "0"), Operation::Add, &one, &settings).map(|_| ()),
            Err(FractionError::DivisionByZero)
        );
        match calculate(&Operand::simple("1.5", "2"), Operation::Add, &one, &settings) {
            Err(FractionError::InvalidOperand { input, .. }) => assert_eq!(input, "1.5"),
            other => panic!("expected invalid operand, got {:?}", other),
        }
        match calculate(&Operand::mixed("-1", "-1", "2"), Operation::Add, &one, &settings) {
            Err(FractionError::InvalidOperand { .. }) => (),
            other => panic!("expected invalid operand, got {:?}", other),
        }
    }

    #[test]
    fn overflow_then_big() {
        let settings = Settings::default();
        let lhs = Operand::simple("99999999999999999999", "7");
        let rhs = Operand::simple("3", "99999999999999999998");
        assert_eq!(
            calculate(&lhs, Operation::Multiply, &rhs, &settings).map(|_| ()),
            Err(FractionError::Overflow)
        );
        let calc = calculate_big(&lhs, Operation::Multiply, &rhs, &settings).unwrap();
        assert_eq!(
            calc.result().to_strings(),
            ("299999999999999999997".to_string(), "699999999999999999986".to_string())
        );

        let calc = calculate_big(
            &Operand::simple("123456789", "987654321"),
            Operation::Multiply,
            &Operand::simple("987654321", "123456789"),
            &settings,
        )
        .unwrap();
        assert_eq!(calc.result().to_strings(), ("1".to_string(), "1".to_string()));
        assert_eq!(calc.decimal(), "1.000");
    }

    #[test]
    fn digit_cap() {
        let settings = Settings::default().with_max_digits(Some(5));
        match calculate_big(&Operand::simple("123456", "1"), Operation::Add, &Operand::simple("1", "1"), &settings) {
            Err(FractionError::InvalidOperand { reason, .. }) => assert_eq!(reason, "too many digits"),
            other => panic!("expected too many digits, got {:?}", other),
        }
    }

    #[test]
    fn parse_operation() {
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!(" Subtract ".parse(), Ok(Operation::Subtract));
        assert_eq!("*".parse(), Ok(Operation::Multiply));
        assert_eq!("x".parse(), Ok(Operation::Multiply));
        assert_eq!("÷".parse(), Ok(Operation::Divide));
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn parse_operand() {
        assert_eq!("3/4".parse(), Ok(Operand::simple("3", "4")));
        assert_eq!("7".parse(), Ok(Operand::simple("7", "1")));
        assert_eq!(" -1 1 / 4 ".parse(), Ok(Operand::mixed("-1", "1", "4")));
        assert!("".parse::<Operand>().is_err());
        assert!("1 2".parse::<Operand>().is_err());
        assert!("1 2 3/4".parse::<Operand>().is_err());
    }
}
