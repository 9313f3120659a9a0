use crate::{ParseError, grammar};
use spa_core::models::{AuctionRecord, Bidder};

/// Convert validated line groups into auction records.
///
/// The groups are expected to come from [`validate_and_format`](crate::validate_and_format).
/// Lines that do not match the grammar are still rejected, and digit runs
/// too large for an `i64` are reported as [`ParseError::Number`].
pub fn to_records(groups: &[Vec<String>]) -> Result<Vec<AuctionRecord>, ParseError> {
    let records = groups
        .iter()
        .map(|lines| to_record(lines))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(records = records.len(), "converted auction definitions");
    Ok(records)
}

fn to_record(lines: &[String]) -> Result<AuctionRecord, ParseError> {
    let (header, bids) = lines.split_first().ok_or(ParseError::Empty)?;

    let (name, reserve_price) =
        grammar::header(header).ok_or_else(|| ParseError::MalformedHeader {
            line: header.clone(),
        })?;
    let reserve_price = integer(reserve_price, header)?;

    let bidders = bids
        .iter()
        .map(|line| to_bidder(line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AuctionRecord::new(name, reserve_price, bidders))
}

fn to_bidder(line: &str) -> Result<Bidder, ParseError> {
    let (name, bids) = grammar::bid(line).ok_or_else(|| ParseError::MalformedBid {
        line: line.to_owned(),
    })?;

    let bids = bids
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| integer(token, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Bidder::new(name, bids))
}

fn integer(value: &str, line: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::Number {
        value: value.to_owned(),
        line: line.to_owned(),
    })
}
