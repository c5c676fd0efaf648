//! Drive (capacity ledger) configuration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::units::{BYTES_PER_GB, BYTES_PER_MB};

/// Capacity, thresholds, and simulated backend behavior of the drive.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_initial_usage"))]
pub struct DriveConfig {
    /// Total bytes the ledger will admit.
    #[serde(default = "default_capacity")]
    pub capacity_bytes: u64,
    /// Usage the ledger starts with, standing in for pre-existing content.
    #[serde(default = "default_initial_used")]
    pub initial_used_bytes: u64,
    /// Remaining space below which the drive reports itself as full.
    #[serde(default = "default_full_threshold")]
    pub full_threshold_bytes: u64,
    /// Usage percentage above which the drive reports itself as nearly full.
    #[serde(default = "default_nearly_full_percent")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub nearly_full_percent: f64,
    /// Base for retrieval locators handed out with stored objects.
    #[serde(default = "default_locator_base")]
    #[validate(length(min = 1))]
    pub locator_base: String,
    /// Mount the usage-simulation endpoint. Never enable in production.
    #[serde(default)]
    pub debug_endpoints: bool,
    /// Simulated backend latency.
    #[serde(default)]
    pub latency: LatencyConfig,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: default_capacity(),
            initial_used_bytes: default_initial_used(),
            full_threshold_bytes: default_full_threshold(),
            nearly_full_percent: default_nearly_full_percent(),
            locator_base: default_locator_base(),
            debug_endpoints: false,
            latency: LatencyConfig::default(),
        }
    }
}

/// Per-operation latency of the simulated object store, in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay before a quota read.
    #[serde(default)]
    pub quota_read_ms: u64,
    /// Delay of an object transfer.
    #[serde(default)]
    pub upload_ms: u64,
    /// Delay of an object removal.
    #[serde(default)]
    pub delete_ms: u64,
    /// Delay of an object lookup.
    #[serde(default)]
    pub lookup_ms: u64,
}

impl LatencyConfig {
    /// Whether every configured delay is zero.
    pub fn is_zero(&self) -> bool {
        self.quota_read_ms == 0 && self.upload_ms == 0 && self.delete_ms == 0 && self.lookup_ms == 0
    }
}

fn validate_initial_usage(config: &DriveConfig) -> Result<(), ValidationError> {
    if config.initial_used_bytes > config.capacity_bytes {
        let mut err = ValidationError::new("initial_usage_exceeds_capacity");
        err.message = Some("initial_used_bytes must not exceed capacity_bytes".into());
        return Err(err);
    }
    Ok(())
}

fn default_capacity() -> u64 {
    15 * BYTES_PER_GB
}

fn default_initial_used() -> u64 {
    17 * BYTES_PER_GB / 2
}

fn default_full_threshold() -> u64 {
    100 * BYTES_PER_MB
}

fn default_nearly_full_percent() -> f64 {
    85.0
}

fn default_locator_base() -> String {
    "/api/objects".to_string()
}
