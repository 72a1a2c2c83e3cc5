//! Business logic services
//!
//! - `calculator` - parses, sums, and conditionally persists results
//! - `prime` - primality test used to decide whether a sum is persisted

mod calculator;
mod prime;

pub use calculator::{Calculator, CalculatorError};
pub use prime::is_prime;
