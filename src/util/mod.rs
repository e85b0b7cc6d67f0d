#![warn(missing_docs)]

pub mod drop_ledger;
pub mod error;
pub mod fmt;
#[cfg(all(test, feature = "traits"))]
pub mod model;
