//! Ledger counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Running totals of ledger activity since startup.
#[derive(Debug, Default)]
pub struct LedgerMetrics {
    /// Successful admissions
    admitted: AtomicU64,
    /// Bytes admitted
    admitted_bytes: AtomicU64,
    /// Rejected admissions
    rejected: AtomicU64,
    /// Release operations (explicit or via object removal)
    released: AtomicU64,
    /// Bytes released
    released_bytes: AtomicU64,
    /// Usage simulations applied
    simulated: AtomicU64,
}

impl LedgerMetrics {
    /// Create new zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_admitted(&self, bytes: u64) {
        self.admitted.fetch_add(1, Ordering::Relaxed);
        self.admitted_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_released(&self, bytes: u64) {
        self.released.fetch_add(1, Ordering::Relaxed);
        self.released_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_simulated(&self) {
        self.simulated.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of all counters
    pub fn snapshot(&self) -> LedgerMetricsSnapshot {
        LedgerMetricsSnapshot {
            admitted: self.admitted.load(Ordering::Relaxed),
            admitted_bytes: self.admitted_bytes.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            released_bytes: self.released_bytes.load(Ordering::Relaxed),
            simulated: self.simulated.load(Ordering::Relaxed),
        }
    }
}

/// Serializable metrics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerMetricsSnapshot {
    /// Successful admissions
    pub admitted: u64,
    /// Bytes admitted
    pub admitted_bytes: u64,
    /// Rejected admissions
    pub rejected: u64,
    /// Release operations
    pub released: u64,
    /// Bytes released
    pub released_bytes: u64,
    /// Usage simulations applied
    pub simulated: u64,
}
