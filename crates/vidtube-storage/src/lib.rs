//! # vidtube-storage
//!
//! The capacity ledger that admits uploads against a bounded drive, and the
//! transfer backends standing in for the object store behind it.

pub mod error;
pub mod ledger;
pub mod metrics;
pub mod providers;

pub use error::AdmissionError;
pub use ledger::CapacityLedger;
pub use metrics::{LedgerMetrics, LedgerMetricsSnapshot};
