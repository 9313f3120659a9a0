#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod resolver;
pub use resolver::{SecondPriceResolver, resolve};
