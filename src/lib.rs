//! tally - sum comma-separated numbers, keep the prime results
//!
//! This library parses a comma-separated string of integers, validates its
//! format, and returns the sum. When a persistence backend is configured and
//! the sum is prime, the result is recorded through that backend.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod parser;

pub use crate::core::ports::ResultStore;
pub use crate::core::services::{Calculator, CalculatorError, is_prime};
pub use crate::parser::FormatError;
