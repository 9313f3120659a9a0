use crate::grammar::{BID_FORMAT, HEADER_FORMAT};

/// Errors raised while reading auction definitions.
///
/// Only the first problem is ever reported; the line carried by the grammar
/// variants is the normalized line, with all whitespace removed.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace was provided
    #[error("The input is empty")]
    Empty,

    /// The first line of an auction is not `name:reserve_price`
    #[error("The auction '{line}' didn't match the input format: {}", HEADER_FORMAT)]
    MalformedHeader {
        /// The offending line
        line: String,
    },

    /// A bidder line is not `name:bid,bid,...`
    #[error("The bid '{line}' didn't match the input format: {}", BID_FORMAT)]
    MalformedBid {
        /// The offending line
        line: String,
    },

    /// A run of digits does not fit the integer type
    #[error("The value '{value}' in '{line}' is not a valid integer")]
    Number {
        /// The digits that failed to convert
        value: String,
        /// The line they appeared in
        line: String,
    },
}
