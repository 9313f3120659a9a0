use regex::Regex;
use std::sync::LazyLock;

/// Delimits one auction definition from the next
pub const SEPARATOR: &str = "#_#";

/// Human-readable description of a header line
pub const HEADER_FORMAT: &str = "'auction_name:reserve_price' ex: 'my_auction:10'";

/// Human-readable description of a bid line
pub const BID_FORMAT: &str = "'bidder_name:bid0,bid1...' ex: 'myself:10,20,30'";

// Both grammars use ASCII classes: \w is [0-9A-Za-z_] and \d is [0-9].
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^(\w+):(\d+)$").expect("header grammar must compile"));
static BID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^(\w+):(\d*(?:,\d+)*)$").expect("bid grammar must compile")
});

// Every line break the input may use: CRLF, LF, VT, FF, CR, NEL, LS and PS.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]").expect("line breaks must compile")
});

/// Split a block of text into lines on any line break
pub(crate) fn lines(block: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(block)
}

/// Split a header line into its auction name and reserve price digits
pub(crate) fn header(line: &str) -> Option<(&str, &str)> {
    captures(&HEADER, line)
}

/// Split a bid line into its bidder name and comma-separated bids
pub(crate) fn bid(line: &str) -> Option<(&str, &str)> {
    captures(&BID, line)
}

fn captures<'a>(regex: &Regex, line: &'a str) -> Option<(&'a str, &'a str)> {
    let caps = regex.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let block = "a\r\nb\nc\x0Bd\x0Ce\rf\u{85}g\u{2028}h\u{2029}i";
        assert_eq!(
            lines(block).collect::<Vec<_>>(),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
    }

    #[test]
    fn test_header() {
        assert_eq!(header("auction0:10"), Some(("auction0", "10")));
        assert_eq!(header("my_auction:007"), Some(("my_auction", "007")));
    }

    #[test]
    fn test_bad_header() {
        assert_eq!(header("auction0:"), None);
        assert_eq!(header("auction0:-1"), None);
        assert_eq!(header("auction0:1e"), None);
        assert_eq!(header("auct&ion0:1"), None);
        assert_eq!(header(":10"), None);
        assert_eq!(header("auction0:1,2"), None);
    }

    #[test]
    fn test_header_is_ascii() {
        assert_eq!(header("enchère:10"), None);
        assert_eq!(header("auction0:١٢"), None);
    }

    #[test]
    fn test_bid() {
        assert_eq!(bid("bidder0:8,10"), Some(("bidder0", "8,10")));
        assert_eq!(bid("bidder0:5"), Some(("bidder0", "5")));
        assert_eq!(bid("bidder0:"), Some(("bidder0", "")));
    }

    #[test]
    fn test_bad_bid() {
        assert_eq!(bid("bidder0:,"), None);
        assert_eq!(bid("bidder0:8,"), None);
        assert_eq!(bid("bidder0:8,,10"), None);
        assert_eq!(bid("bidder1:10,-14"), None);
        assert_eq!(bid("bidder0:56t"), None);
        assert_eq!(bid("bid$der0:56"), None);
        assert_eq!(bid("bidder0"), None);
    }
}
