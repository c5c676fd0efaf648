//! Quota snapshot and derived quota status.

use serde::{Deserialize, Serialize};

use vidtube_core::config::DriveConfig;
use vidtube_core::types::{BYTES_PER_MB, format_gb};

/// Point-in-time read of the drive's capacity figures.
///
/// Always computed fresh from the ledger; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaSnapshot {
    /// Total capacity in bytes.
    pub capacity_bytes: u64,
    /// Currently used bytes.
    pub used_bytes: u64,
    /// `max(0, capacity - used)`.
    pub remaining_bytes: u64,
}

impl QuotaSnapshot {
    /// Create a snapshot from capacity and usage.
    pub fn new(capacity_bytes: u64, used_bytes: u64) -> Self {
        Self {
            capacity_bytes,
            used_bytes,
            remaining_bytes: capacity_bytes.saturating_sub(used_bytes),
        }
    }

    /// Exact usage percentage. A zero capacity reads as 0%.
    pub fn usage_percent(&self) -> f64 {
        if self.capacity_bytes == 0 {
            0.0
        } else {
            (self.used_bytes as f64 / self.capacity_bytes as f64) * 100.0
        }
    }

    /// Check if admitting the given number of bytes would exceed capacity.
    pub fn would_exceed(&self, additional_bytes: u64) -> bool {
        additional_bytes > self.remaining_bytes
    }
}

/// Thresholds behind the advisory `is_full` / `is_nearly_full` flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotaThresholds {
    /// Remaining bytes strictly below this count as full.
    pub full_threshold_bytes: u64,
    /// Usage strictly above this percentage counts as nearly full.
    pub nearly_full_percent: f64,
}

impl Default for QuotaThresholds {
    fn default() -> Self {
        Self {
            full_threshold_bytes: 100 * BYTES_PER_MB,
            nearly_full_percent: 85.0,
        }
    }
}

impl From<&DriveConfig> for QuotaThresholds {
    fn from(config: &DriveConfig) -> Self {
        Self {
            full_threshold_bytes: config.full_threshold_bytes,
            nearly_full_percent: config.nearly_full_percent,
        }
    }
}

/// Quota as presented to clients: snapshot figures, advisory flags, and
/// gigabyte display strings.
///
/// The flags are advisory only. A full drive is still enforced at
/// admission time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    /// Total capacity in bytes.
    pub capacity_bytes: u64,
    /// Currently used bytes.
    pub used_bytes: u64,
    /// Remaining bytes.
    pub remaining_bytes: u64,
    /// Usage percentage rounded to a whole number for display.
    pub usage_percentage: u32,
    /// Usage is above the nearly-full percentage.
    pub is_nearly_full: bool,
    /// Remaining space is below the full threshold.
    pub is_full: bool,
    /// Capacity rendered as gigabytes, e.g. `"15GB"`.
    pub total: String,
    /// Usage rendered as gigabytes.
    pub used: String,
    /// Remaining space rendered as gigabytes.
    pub remaining: String,
}

impl QuotaStatus {
    /// Derive the client-facing status from a snapshot.
    pub fn from_snapshot(snapshot: QuotaSnapshot, thresholds: &QuotaThresholds) -> Self {
        let percent = snapshot.usage_percent();
        Self {
            capacity_bytes: snapshot.capacity_bytes,
            used_bytes: snapshot.used_bytes,
            remaining_bytes: snapshot.remaining_bytes,
            usage_percentage: percent.round() as u32,
            is_nearly_full: percent > thresholds.nearly_full_percent,
            is_full: snapshot.remaining_bytes < thresholds.full_threshold_bytes,
            total: format_gb(snapshot.capacity_bytes),
            used: format_gb(snapshot.used_bytes),
            remaining: format_gb(snapshot.remaining_bytes),
        }
    }

    /// The snapshot this status was derived from.
    pub fn snapshot(&self) -> QuotaSnapshot {
        QuotaSnapshot {
            capacity_bytes: self.capacity_bytes,
            used_bytes: self.used_bytes,
            remaining_bytes: self.remaining_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidtube_core::types::BYTES_PER_GB;

    const CAPACITY: u64 = 15 * BYTES_PER_GB;

    fn status_with_remaining(remaining: u64) -> QuotaStatus {
        let snapshot = QuotaSnapshot::new(CAPACITY, CAPACITY - remaining);
        QuotaStatus::from_snapshot(snapshot, &QuotaThresholds::default())
    }

    #[test]
    fn test_remaining_never_negative() {
        let snapshot = QuotaSnapshot::new(10, 25);
        assert_eq!(snapshot.remaining_bytes, 0);
        assert!(snapshot.would_exceed(1));
        assert!(!snapshot.would_exceed(0));
    }

    #[test]
    fn test_zero_capacity_reads_zero_percent() {
        let snapshot = QuotaSnapshot::new(0, 0);
        assert_eq!(snapshot.usage_percent(), 0.0);
    }

    #[test]
    fn test_default_scenario_status() {
        let snapshot = QuotaSnapshot::new(CAPACITY, 17 * BYTES_PER_GB / 2);
        let status = QuotaStatus::from_snapshot(snapshot, &QuotaThresholds::default());

        assert_eq!(status.remaining_bytes, 13 * BYTES_PER_GB / 2);
        assert_eq!(status.usage_percentage, 57);
        assert!(!status.is_nearly_full);
        assert!(!status.is_full);
        assert_eq!(status.total, "15GB");
        assert_eq!(status.used, "8.5GB");
        assert_eq!(status.remaining, "6.5GB");
        assert_eq!(status.snapshot(), snapshot);
    }

    #[test]
    fn test_nearly_full_above_threshold() {
        let snapshot = QuotaSnapshot::new(CAPACITY, 29 * BYTES_PER_GB / 2);
        let status = QuotaStatus::from_snapshot(snapshot, &QuotaThresholds::default());

        assert!((snapshot.usage_percent() - 96.666).abs() < 0.01);
        assert_eq!(status.usage_percentage, 97);
        assert!(status.is_nearly_full);
    }

    #[test]
    fn test_exactly_at_nearly_full_percent_is_not_nearly_full() {
        let snapshot = QuotaSnapshot::new(100, 85);
        let status = QuotaStatus::from_snapshot(snapshot, &QuotaThresholds::default());
        assert!(!status.is_nearly_full);
    }

    #[test]
    fn test_full_flag_boundary() {
        assert!(!status_with_remaining(100 * BYTES_PER_MB).is_full);
        assert!(status_with_remaining(100 * BYTES_PER_MB - 1).is_full);
    }

    #[test]
    fn test_serializes_camel_case() {
        let status = status_with_remaining(BYTES_PER_GB);
        let json = serde_json::to_value(&status).expect("serialize");
        assert!(json.get("capacityBytes").is_some());
        assert!(json.get("isNearlyFull").is_some());
        assert!(json.get("usagePercentage").is_some());
    }
}
