#![allow(dead_code, unused_macros)]
use rstest_reuse::template;
use spa_core::models::{AuctionOutcome, AuctionRecord, Bidder, CancellationReason};
use std::collections::BTreeSet;

// A table of auctions and their expected outcomes, shared by every test that
// needs to check the resolver against known-good results. Bidders are named
// `bidder0`, `bidder1`, ... after their position in `bids`.

#[template]
#[rstest]
#[case::second_price(7, &[&[1, 5][..], &[1, 6, 9][..], &[1, 2, 50][..]], Expected::Win("bidder2", 9))]
#[case::reserve_above_runner_up(30, &[&[1, 5][..], &[1, 6, 9][..], &[1, 2, 50][..]], Expected::Win("bidder2", 30))]
#[case::single_bidder(3, &[&[1, 5][..]], Expected::Win("bidder0", 3))]
#[case::bidder_without_bids(7, &[&[][..], &[1, 6, 9][..], &[1, 2, 50][..]], Expected::Win("bidder2", 9))]
#[case::runner_up_at_reserve(9, &[&[9][..], &[12][..]], Expected::Win("bidder1", 9))]
#[case::winner_at_reserve(12, &[&[3][..], &[12][..]], Expected::Win("bidder1", 12))]
#[case::tied_runners_up(1, &[&[5][..], &[5][..], &[9][..]], Expected::Win("bidder2", 5))]
#[case::no_bidders(1, &[][..], Expected::NoBidders)]
#[case::reserve_not_reached(10, &[&[1, 2, 4][..], &[1, 2, 4][..]], Expected::ReserveNotReached(10))]
#[case::nobody_bids(7, &[&[][..], &[][..]], Expected::ReserveNotReached(7))]
#[case::tie_below_reserve(10, &[&[5][..], &[5][..]], Expected::ReserveNotReached(10))]
#[case::tie(6, &[&[1, 2][..], &[2, 6, 8][..], &[4, 7][..], &[1, 5, 8][..]], Expected::Tie(&["bidder1", "bidder3"], 8))]
#[case::zero_price(0, &[&[-1, -2][..], &[-2, -6, 8][..]], Expected::NonPositivePrice(0))]
#[case::negative_price(-5, &[&[-1, -2][..], &[-2, -6, 8][..]], Expected::NonPositivePrice(-1))]
#[case::negative_reserve(-5, &[&[2][..], &[3, 8][..]], Expected::Win("bidder1", 2))]
pub fn all_scenarios(
    #[case] reserve_price: i64,
    #[case] bids: &[&[i64]],
    #[case] expected: Expected,
) -> () {
}

#[derive(Debug)]
pub enum Expected {
    Win(&'static str, i64),
    NoBidders,
    ReserveNotReached(i64),
    Tie(&'static [&'static str], i64),
    NonPositivePrice(i64),
}

pub fn record(reserve_price: i64, bids: &[&[i64]]) -> AuctionRecord {
    let bidders = bids
        .iter()
        .enumerate()
        .map(|(i, bids)| Bidder::new(format!("bidder{i}"), bids.iter().copied()));
    AuctionRecord::new("auction0", reserve_price, bidders)
}

pub fn check(outcome: &AuctionOutcome, expected: &Expected) {
    assert_eq!(outcome.auction().as_str(), "auction0");
    match (outcome, expected) {
        (AuctionOutcome::Won(win), Expected::Win(winner, price)) => {
            assert_eq!(win.winner.as_str(), *winner);
            assert_eq!(win.price, *price);
        }
        (AuctionOutcome::Cancelled(cancellation), expected) => match (&cancellation.reason, expected) {
            (CancellationReason::NoBidders, Expected::NoBidders) => {}
            (
                CancellationReason::ReserveNotReached { reserve_price },
                Expected::ReserveNotReached(expected),
            ) => assert_eq!(reserve_price, expected),
            (CancellationReason::Tie { bidders, bid }, Expected::Tie(names, expected)) => {
                // the tie set is compared as a set
                let bidders = bidders.iter().map(|b| b.as_str()).collect::<BTreeSet<_>>();
                let names = names.iter().copied().collect::<BTreeSet<_>>();
                assert_eq!(bidders, names);
                assert_eq!(bid, expected);
            }
            (CancellationReason::NonPositivePrice { price }, Expected::NonPositivePrice(expected)) => {
                assert_eq!(price, expected)
            }
            (reason, expected) => panic!("expected {expected:?}, got {reason:?}"),
        },
        (outcome, expected) => panic!("expected {expected:?}, got {outcome:?}"),
    }
}
