//! Calculator service - validates, sums, and conditionally persists
//!
//! The calculator is stateless between calls. Each `add` invocation is
//! independent and pure apart from the single optional side effect of
//! saving a prime sum through the configured [`ResultStore`].
//!
//! # Examples
//!
//! ```
//! use tally::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add("2,3").unwrap(), 5);
//! assert_eq!(calc.add("").unwrap(), 0);
//! ```

use thiserror::Error;

use super::prime::is_prime;
use crate::core::ports::ResultStore;
use crate::parser::{self, FormatError};

/// Errors returned by [`Calculator::add`]
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Input failed format validation
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The configured result store failed while saving a prime sum
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Sums comma-separated numbers and persists prime results
///
/// The store reference is shared and non-owning; the calculator never
/// manages the store's lifecycle.
#[derive(Clone, Copy)]
pub struct Calculator<'s> {
    store: Option<&'s dyn ResultStore>,
}

impl std::fmt::Debug for Calculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("store", &self.store.map(|_| "dyn ResultStore"))
            .finish()
    }
}

impl Default for Calculator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> Calculator<'s> {
    /// Create a calculator with no persistence backend
    #[must_use]
    pub const fn new() -> Self {
        Self { store: None }
    }

    /// Create a calculator that saves prime sums to `store`
    #[must_use]
    pub const fn with_store(store: &'s dyn ResultStore) -> Self {
        Self { store: Some(store) }
    }

    /// Sum the comma-separated numbers in `input`
    ///
    /// An empty input yields `0` without validation and without touching
    /// the store. Otherwise the input is validated and parsed by
    /// [`parser::parse_numbers`] and the tokens are summed in order. When a
    /// store is configured and the sum is prime, the sum is saved exactly
    /// once; store errors propagate to the caller unwrapped.
    pub fn add(&self, input: &str) -> Result<i64, CalculatorError> {
        if input.is_empty() {
            return Ok(0);
        }

        let numbers = parser::parse_numbers(input)?;
        let total: i64 = numbers.iter().sum();
        log::trace!("parsed {} token(s), total {total}", numbers.len());

        if let Some(store) = self.store {
            if is_prime(total) {
                log::debug!("sum {total} is prime, saving");
                store.save(total)?;
            }
        }

        Ok(total)
    }
}
