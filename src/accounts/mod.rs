//! On-chain account layouts read by the client.

pub mod global;

pub use global::*;
