//! Comma-separated number parsing
//!
//! Splits an input string on the `,` delimiter and parses every token as an
//! integer. The separator check runs first, before any token parsing is
//! attempted, so a string without a comma never reports a token error.
//!
//! One deliberate exception: a comma-less string that is itself a single
//! valid integer (for example `"5"`) is accepted and yields that number.
//! Every other comma-less string is a separator error.
//!
//! # Examples
//!
//! ```
//! use tally::parser::parse_numbers;
//!
//! assert_eq!(parse_numbers("2,3").unwrap(), vec![2, 3]);
//! assert_eq!(parse_numbers("5").unwrap(), vec![5]);
//! assert!(parse_numbers("1;1").is_err());
//! ```

use thiserror::Error;

/// The token delimiter recognized by the parser
pub const DELIMITER: char = ',';

/// Errors raised for malformed input
///
/// Both variants are the same kind of failure from the caller's point of
/// view; they are distinguished by message text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Input is non-empty, contains no delimiter, and is not a single
    /// integer token
    #[error("Separator is incorrect")]
    Separator,

    /// A token between delimiters failed integer parsing
    #[error("Input format is incorrect")]
    Token,
}

/// Parse a non-empty input string into its integer tokens
///
/// Tokens are parsed left to right; the first malformed token aborts the
/// parse. Tokens may carry surrounding whitespace and an explicit sign.
/// Empty tokens (as produced by `"1,,2"` or a trailing comma) are malformed.
pub fn parse_numbers(input: &str) -> Result<Vec<i64>, FormatError> {
    if !input.contains(DELIMITER) {
        // A bare single integer is accepted even though it carries no
        // delimiter; anything else without a comma is a separator error.
        return match parse_token(input) {
            Ok(n) => Ok(vec![n]),
            Err(_) => Err(FormatError::Separator),
        };
    }

    input.split(DELIMITER).map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<i64, FormatError> {
    token.trim().parse().map_err(|_| FormatError::Token)
}
