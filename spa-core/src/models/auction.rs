use super::{AuctionName, Bidder};

/// A single parsed auction definition.
///
/// Bidders are kept in the order they were listed, one per bid line of the
/// definition. A record is resolved exactly once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuctionRecord {
    name: AuctionName,
    reserve_price: i64,
    bidders: Vec<Bidder>,
}

impl AuctionRecord {
    /// Creates a new record.
    ///
    /// No validation happens here: a negative reserve price or negative bids
    /// are accepted and resolved as plain signed integers.
    pub fn new(
        name: impl Into<AuctionName>,
        reserve_price: i64,
        bidders: impl IntoIterator<Item = Bidder>,
    ) -> Self {
        Self {
            name: name.into(),
            reserve_price,
            bidders: bidders.into_iter().collect(),
        }
    }

    /// The auction's name
    pub fn name(&self) -> &AuctionName {
        &self.name
    }

    /// The minimum acceptable winning price
    pub fn reserve_price(&self) -> i64 {
        self.reserve_price
    }

    /// The bidders, in input order
    pub fn bidders(&self) -> &[Bidder] {
        &self.bidders
    }
}
