#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use spa_core::models::AuctionRecord;

mod convert;
mod error;
mod format;
mod grammar;

pub use convert::to_records;
pub use error::ParseError;
pub use format::validate_and_format;
pub use grammar::{BID_FORMAT, HEADER_FORMAT, SEPARATOR};

/// Validate the raw text and convert it into auction records in one go.
///
/// Conversion only starts once every line of every auction has been
/// validated, so a malformed line late in the input still means no records
/// are produced at all.
pub fn parse(raw: &str) -> Result<Vec<AuctionRecord>, ParseError> {
    let groups = validate_and_format(raw)?;
    to_records(&groups)
}
