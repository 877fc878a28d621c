use clap::{ArgAction, Parser};
use fraction_engine::{calculate, calculate_big, Calculation, FractionError, FractionNumber, Operand, Operation, Settings};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fraccalc")]
#[command(about = "Add, subtract, multiply or divide two fractions exactly")]
struct Args {
    /// Left operand: `n`, `n/d` or `"w n/d"`
    #[arg(allow_hyphen_values = true)]
    lhs: String,
    /// add, subtract, multiply, divide (or + - x /)
    #[arg(allow_hyphen_values = true)]
    operation: String,
    /// Right operand: `n`, `n/d` or `"w n/d"`
    #[arg(allow_hyphen_values = true)]
    rhs: String,
    /// Always use arbitrary precision integers
    #[arg(long, default_value_t = false)]
    big: bool,
    /// Decimal places in the decimal view
    #[arg(long, default_value_t = 3)]
    places: usize,
    /// Decimal places in the percentage view
    #[arg(long = "percent-places", default_value_t = 1)]
    percent_places: usize,
    /// Maximum digits per operand field, 0 for no limit
    #[arg(long = "max-digits", default_value_t = 20)]
    max_digits: usize,
    /// Log every calculation step to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn render<T: FractionNumber>(calc: &Calculation<T>) -> String {
    format!(
        "{} {} {} = {}\n  mixed:      {}\n  decimal:    {}\n  percentage: {}",
        calc.lhs(),
        calc.operation(),
        calc.rhs(),
        calc.result(),
        calc.mixed(),
        calc.decimal(),
        calc.percentage()
    )
}

fn run(args: &Args) -> Result<String, FractionError> {
    let settings = Settings::default()
        .with_decimal_places(args.places)
        .with_percentage_places(args.percent_places)
        .with_max_digits(Some(args.max_digits).filter(|&max| max > 0));

    let lhs: Operand = args.lhs.parse()?;
    let operation: Operation = args.operation.parse()?;
    let rhs: Operand = args.rhs.parse()?;

    if args.big {
        return Ok(render(&calculate_big(&lhs, operation, &rhs, &settings)?));
    }
    match calculate(&lhs, operation, &rhs, &settings) {
        Ok(calc) => Ok(render(&calc)),
        Err(FractionError::Overflow) => {
            info!("out of i64 range, retrying with big integers");
            Ok(render(&calculate_big(&lhs, operation, &rhs, &settings)?))
        }
        Err(err) => Err(err),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose > 0 { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
