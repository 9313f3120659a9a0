use crate::{ParseError, SEPARATOR, grammar};

/// Normalize the raw text into groups of lines, one group per auction, and
/// check every line against the grammar.
///
/// Blocks are delimited by [`SEPARATOR`]. Within a block, any newline
/// convention is accepted, every whitespace character is removed and blank
/// lines are dropped. Blocks left with no lines (for example between two
/// consecutive separators) are dropped as well.
///
/// The first line of each group must be a header, the rest must be bid
/// lines. Validation stops at the first malformed line.
pub fn validate_and_format(raw: &str) -> Result<Vec<Vec<String>>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let groups = raw
        .split(SEPARATOR)
        .map(normalize)
        .filter(|lines| !lines.is_empty())
        .collect::<Vec<_>>();

    for lines in &groups {
        check(lines)?;
    }

    tracing::debug!(auctions = groups.len(), "validated auction definitions");
    Ok(groups)
}

fn normalize(block: &str) -> Vec<String> {
    grammar::lines(block)
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect()
}

fn check(lines: &[String]) -> Result<(), ParseError> {
    let Some((header, bids)) = lines.split_first() else {
        return Ok(());
    };

    if grammar::header(header).is_none() {
        return Err(ParseError::MalformedHeader {
            line: header.clone(),
        });
    }

    match bids.iter().find(|line| grammar::bid(line).is_none()) {
        Some(line) => Err(ParseError::MalformedBid { line: line.clone() }),
        None => Ok(()),
    }
}
