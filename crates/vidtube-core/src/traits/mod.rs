//! Core traits defined in `vidtube-core` and implemented by other crates.

pub mod transfer;

pub use transfer::{TransferBackend, TransferRequest};
