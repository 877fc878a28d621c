mod calc;
mod config;
mod error;
mod format;
mod fraction;
mod mixed;
mod number;

pub use self::calc::*;
pub use self::config::*;
pub use self::error::*;
pub use self::fraction::*;
pub use self::mixed::*;
pub use self::number::{gcd, parse_integer, FractionNumber};
