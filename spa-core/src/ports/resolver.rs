use crate::models::{AuctionName, AuctionOutcome, AuctionRecord};

/// Interface for the algorithms that turn an auction definition into an outcome.
///
/// Every record is resolved on its own: implementations hold no state that
/// ties one record's outcome to another's.
pub trait Resolver {
    /// Error type for failures that are not functional cancellations
    type Error: std::error::Error;

    /// Resolve a single auction.
    ///
    /// Voided auctions are reported as `Ok(AuctionOutcome::Cancelled(_))`.
    /// The error channel is reserved for defects in the implementation.
    fn resolve(&self, record: &AuctionRecord) -> Result<AuctionOutcome, Self::Error>;

    /// Resolve every record, preserving input order.
    ///
    /// A failure on one record does not prevent the following records from
    /// being resolved.
    fn resolve_all(&self, records: &[AuctionRecord]) -> Vec<Result<AuctionOutcome, Self::Error>> {
        records.iter().map(|record| self.resolve(record)).collect()
    }
}

/// Errors signalling that a resolver reached a state it considers impossible
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// A winner was expected but none could be determined
    #[error(
        "We weren't able to calculate the winner of the auction '{auction}', please report the bug"
    )]
    Inconsistent {
        /// The auction being resolved
        auction: AuctionName,
    },
}
