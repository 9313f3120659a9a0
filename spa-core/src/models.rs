mod auction;
mod bidder;
mod outcome;

pub use auction::AuctionRecord;
pub use bidder::Bidder;
pub use outcome::{AuctionOutcome, Cancellation, CancellationReason, Win};

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl $struct {
            /// Borrow the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_wrapper!(AuctionName);
string_wrapper!(BidderName);
