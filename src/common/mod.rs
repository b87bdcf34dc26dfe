//! Common types shared across the client.

pub mod types;
