#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for sealed-bid auctions.
///
/// These are plain data structures: the parsed auction definitions and the
/// outcomes produced by resolving them. They carry no resolution logic of
/// their own.
pub mod models;

/// Interface traits for auction resolution.
///
/// The resolution algorithm lives behind the [`ports::Resolver`] trait so that
/// drivers can be written against the contract rather than a specific
/// implementation.
pub mod ports;
