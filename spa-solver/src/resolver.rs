use spa_core::{
    models::{AuctionOutcome, AuctionRecord, Cancellation, CancellationReason, Win},
    ports::{ResolveError, Resolver},
};

/// Resolves auctions with [`resolve`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SecondPriceResolver;

impl Resolver for SecondPriceResolver {
    type Error = ResolveError;

    fn resolve(&self, record: &AuctionRecord) -> Result<AuctionOutcome, Self::Error> {
        resolve(record)
    }
}

/// Resolve a single auction under second-price rules.
///
/// 1. An auction without bidders is cancelled.
/// 2. Each bidder is reduced to their maximum bid; bidders without bids take
///    no further part.
/// 3. If no maximum bid reaches the reserve price, the auction is cancelled.
/// 4. If several bidders share the highest bid, the auction is cancelled.
/// 5. Otherwise the winner pays the highest bid among the other bidders, or
///    the reserve price if that bid does not reach it.
/// 6. A clearing price of zero or less cancels the auction.
///
/// All comparisons are on signed integers, so negative bids and reserve
/// prices resolve without special handling.
pub fn resolve(record: &AuctionRecord) -> Result<AuctionOutcome, ResolveError> {
    let outcome = decide(record);
    match &outcome {
        Ok(outcome) => tracing::debug!(auction = %record.name(), %outcome, "resolved auction"),
        Err(error) => tracing::error!(auction = %record.name(), %error, "unable to resolve auction"),
    }
    outcome
}

fn decide(record: &AuctionRecord) -> Result<AuctionOutcome, ResolveError> {
    let reserve_price = record.reserve_price();
    let cancel = |reason: CancellationReason| -> Result<AuctionOutcome, ResolveError> {
        Ok(AuctionOutcome::Cancelled(Cancellation {
            auction: record.name().clone(),
            reason,
        }))
    };

    if record.bidders().is_empty() {
        return cancel(CancellationReason::NoBidders);
    }

    // (position, max bid) in input order, so two bidders sharing a name stay distinct
    let max_bids = record
        .bidders()
        .iter()
        .enumerate()
        .filter_map(|(position, bidder)| bidder.max_bid().map(|bid| (position, bid)))
        .collect::<Vec<_>>();

    let Some(highest) = max_bids
        .iter()
        .map(|(_, bid)| *bid)
        .max()
        .filter(|bid| *bid >= reserve_price)
    else {
        return cancel(CancellationReason::ReserveNotReached { reserve_price });
    };

    let leaders = max_bids
        .iter()
        .filter(|(_, bid)| *bid == highest)
        .map(|(position, _)| *position)
        .collect::<Vec<_>>();
    let name = |position: usize| record.bidders()[position].name().clone();

    match leaders.as_slice() {
        [] => Err(ResolveError::Inconsistent {
            auction: record.name().clone(),
        }),
        [winner] => {
            let price = clearing_price(&max_bids, *winner, reserve_price);
            if price <= 0 {
                return cancel(CancellationReason::NonPositivePrice { price });
            }
            Ok(AuctionOutcome::Won(Win {
                auction: record.name().clone(),
                winner: name(*winner),
                price,
            }))
        }
        _ => cancel(CancellationReason::Tie {
            bidders: leaders.iter().copied().map(name).collect(),
            bid: highest,
        }),
    }
}

/// The highest competing bid if it reaches the reserve price, else the reserve price
fn clearing_price(max_bids: &[(usize, i64)], winner: usize, reserve_price: i64) -> i64 {
    max_bids
        .iter()
        .filter(|(position, _)| *position != winner)
        .map(|(_, bid)| *bid)
        .max()
        .filter(|bid| *bid >= reserve_price)
        .unwrap_or(reserve_price)
}
