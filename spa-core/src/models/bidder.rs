use super::BidderName;

/// A participant in an auction together with every bid they placed.
///
/// The order of the bids carries no meaning and duplicates are allowed; only
/// the maximum bid is ever considered during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bidder {
    name: BidderName,
    bids: Vec<i64>,
}

impl Bidder {
    /// Creates a bidder from a name and its (possibly empty) bids
    pub fn new(name: impl Into<BidderName>, bids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            bids: bids.into_iter().collect(),
        }
    }

    /// The bidder's name
    pub fn name(&self) -> &BidderName {
        &self.name
    }

    /// The bids, in the order they were listed
    pub fn bids(&self) -> &[i64] {
        &self.bids
    }

    /// The highest bid, or None for a bidder that did not bid at all
    pub fn max_bid(&self) -> Option<i64> {
        self.bids.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_bid_ignores_order_and_duplicates() {
        let bidder = Bidder::new("bidder0", [1, 50, 4, 8, 50, 1]);
        assert_eq!(bidder.max_bid(), Some(50));
    }

    #[test]
    fn test_max_bid_negative() {
        let bidder = Bidder::new("bidder0", [-1, -2]);
        assert_eq!(bidder.max_bid(), Some(-1));
    }

    #[test]
    fn test_no_bids() {
        let bidder = Bidder::new("bidder0", []);
        assert!(bidder.bids().is_empty());
        assert_eq!(bidder.max_bid(), None);
    }
}
