use super::{AuctionName, BidderName};
use std::fmt;

/// The result of resolving one auction: either a winner, or the reason the
/// auction was voided.
///
/// Cancellations are ordinary business outcomes rather than errors, so both
/// variants live on the success path of resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", rename_all = "snake_case")
)]
pub enum AuctionOutcome {
    /// The auction cleared with a single winner
    Won(Win),
    /// The auction was voided
    Cancelled(Cancellation),
}

impl AuctionOutcome {
    /// The name of the auction this outcome belongs to
    pub fn auction(&self) -> &AuctionName {
        match self {
            Self::Won(win) => &win.auction,
            Self::Cancelled(cancellation) => &cancellation.auction,
        }
    }
}

impl fmt::Display for AuctionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(win) => win.fmt(f),
            Self::Cancelled(cancellation) => cancellation.fmt(f),
        }
    }
}

/// A successfully cleared auction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Win {
    /// The auction that was won
    pub auction: AuctionName,
    /// The bidder holding the unique highest bid
    pub winner: BidderName,
    /// The clearing price the winner pays
    pub price: i64,
}

impl fmt::Display for Win {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The auction '{}' was won by '{}' at the price of '{}'",
            self.auction, self.winner, self.price
        )
    }
}

/// A voided auction and why it was voided
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cancellation {
    /// The auction that was cancelled
    pub auction: AuctionName,
    /// The reason for the cancellation
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub reason: CancellationReason,
}

/// The functional reasons an auction can be voided
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "reason", rename_all = "snake_case")
)]
pub enum CancellationReason {
    /// The auction had no bidders at all
    NoBidders,
    /// No bidder's maximum bid reached the reserve price, including the case
    /// where no bidder placed any bid
    ReserveNotReached {
        /// The reserve price that was missed
        reserve_price: i64,
    },
    /// Several bidders share the highest bid
    Tie {
        /// Every bidder holding the highest bid
        bidders: Vec<BidderName>,
        /// The shared highest bid
        bid: i64,
    },
    /// The clearing price came out at zero or below
    NonPositivePrice {
        /// The offending clearing price
        price: i64,
    },
}

impl fmt::Display for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let auction = &self.auction;
        match &self.reason {
            CancellationReason::NoBidders => {
                write!(f, "No bidders, the auction '{auction}' is cancelled")
            }
            CancellationReason::ReserveNotReached { reserve_price } => write!(
                f,
                "The auction '{auction}' is cancelled because the reserve price '{reserve_price}' has not been reached"
            ),
            CancellationReason::Tie { bidders, bid } => {
                write!(f, "The auction '{auction}' is cancelled because bidders '")?;
                for (i, bidder) in bidders.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{bidder}")?;
                }
                write!(f, "' had the same bid: '{bid}'")
            }
            CancellationReason::NonPositivePrice { price } => write!(
                f,
                "The auction '{auction}' is cancelled because the winning price '{price}' must be > 0. Please check your data"
            ),
        }
    }
}
