//! Capacity ledger: the single source of truth for drive usage.
//!
//! Every mutation of the usage counter goes through this type. The
//! admission check and the increment happen inside one critical section
//! that never awaits, so concurrent reservations behave as if processed
//! in some total order and can never jointly overrun the capacity.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use vidtube_core::config::DriveConfig;
use vidtube_core::types::ObjectId;
use vidtube_entity::drive::{QuotaSnapshot, QuotaStatus, QuotaThresholds, StoredObject};

use crate::error::AdmissionError;
use crate::metrics::LedgerMetrics;

/// Mutable ledger state, guarded as a unit.
#[derive(Debug, Default)]
struct LedgerState {
    /// Bytes currently accounted as used.
    used_bytes: u64,
    /// Handles of admitted objects that have not been removed.
    objects: HashMap<ObjectId, StoredObject>,
}

/// Bounded-capacity admission controller.
#[derive(Debug)]
pub struct CapacityLedger {
    /// Fixed capacity in bytes.
    capacity_bytes: u64,
    /// Thresholds for the advisory flags.
    thresholds: QuotaThresholds,
    /// Base for object locators.
    locator_base: String,
    /// Usage counter and object registry.
    state: Mutex<LedgerState>,
    /// Activity counters.
    metrics: LedgerMetrics,
}

impl CapacityLedger {
    /// Create a ledger with the given capacity and starting usage.
    pub fn new(capacity_bytes: u64, initial_used_bytes: u64) -> Self {
        Self {
            capacity_bytes,
            thresholds: QuotaThresholds::default(),
            locator_base: "/api/objects".to_string(),
            state: Mutex::new(LedgerState {
                used_bytes: initial_used_bytes,
                objects: HashMap::new(),
            }),
            metrics: LedgerMetrics::new(),
        }
    }

    /// Create a ledger from the `[drive]` configuration section.
    pub fn from_config(config: &DriveConfig) -> Self {
        Self::new(config.capacity_bytes, config.initial_used_bytes)
            .with_thresholds(QuotaThresholds::from(config))
            .with_locator_base(config.locator_base.clone())
    }

    /// Override the advisory thresholds.
    pub fn with_thresholds(mut self, thresholds: QuotaThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Override the locator base.
    pub fn with_locator_base(mut self, locator_base: impl Into<String>) -> Self {
        self.locator_base = locator_base.into();
        self
    }

    /// Fixed capacity in bytes.
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    /// Thresholds used to derive [`QuotaStatus`].
    pub fn thresholds(&self) -> &QuotaThresholds {
        &self.thresholds
    }

    /// Activity counters.
    pub fn metrics(&self) -> &LedgerMetrics {
        &self.metrics
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read the current quota.
    pub fn get_quota(&self) -> QuotaSnapshot {
        let state = self.lock();
        QuotaSnapshot::new(self.capacity_bytes, state.used_bytes)
    }

    /// Read the current quota with advisory flags and display strings.
    pub fn status(&self) -> QuotaStatus {
        QuotaStatus::from_snapshot(self.get_quota(), &self.thresholds)
    }

    /// Admit an object of `size_bytes`, or refuse it without side effects.
    ///
    /// On success the usage counter is incremented and the handle recorded
    /// in the same critical section as the capacity check.
    pub fn reserve(
        &self,
        size_bytes: u64,
        name: &str,
        content_type: &str,
    ) -> Result<StoredObject, AdmissionError> {
        if name.trim().is_empty() {
            return Err(AdmissionError::InvalidRequest {
                reason: "name is required".to_string(),
            });
        }

        let (object, quota) = {
            let mut state = self.lock();
            let quota = QuotaSnapshot::new(self.capacity_bytes, state.used_bytes);

            if quota.would_exceed(size_bytes) {
                drop(state);
                self.metrics.record_rejected();
                warn!(
                    requested = size_bytes,
                    available = quota.remaining_bytes,
                    used = quota.used_bytes,
                    "Admission rejected: capacity exceeded"
                );
                return Err(AdmissionError::CapacityExceeded {
                    requested: size_bytes,
                    available: quota.remaining_bytes,
                    quota,
                });
            }

            state.used_bytes += size_bytes;
            let object = StoredObject::admit(
                ObjectId::new(),
                name,
                size_bytes,
                content_type,
                &self.locator_base,
            );
            state.objects.insert(object.id, object.clone());
            (
                object,
                QuotaSnapshot::new(self.capacity_bytes, state.used_bytes),
            )
        };

        self.metrics.record_admitted(size_bytes);
        info!(
            object_id = %object.id,
            size = size_bytes,
            used = quota.used_bytes,
            remaining = quota.remaining_bytes,
            "Object admitted"
        );

        Ok(object)
    }

    /// Give `size_bytes` back to the remaining budget, flooring usage at 0.
    pub fn release(&self, size_bytes: u64) -> QuotaSnapshot {
        let quota = {
            let mut state = self.lock();
            state.used_bytes = state.used_bytes.saturating_sub(size_bytes);
            QuotaSnapshot::new(self.capacity_bytes, state.used_bytes)
        };

        self.metrics.record_released(size_bytes);
        debug!(size = size_bytes, used = quota.used_bytes, "Bytes released");
        quota
    }

    /// Shift usage by a signed delta without an admission check.
    ///
    /// Only for manufacturing near-full or full conditions in demos and
    /// tests. Usage is floored at 0 but may exceed the capacity.
    pub fn simulate_usage_delta(&self, delta_bytes: i64) -> QuotaSnapshot {
        let quota = {
            let mut state = self.lock();
            state.used_bytes = if delta_bytes >= 0 {
                state.used_bytes.saturating_add(delta_bytes.unsigned_abs())
            } else {
                state.used_bytes.saturating_sub(delta_bytes.unsigned_abs())
            };
            QuotaSnapshot::new(self.capacity_bytes, state.used_bytes)
        };

        self.metrics.record_simulated();
        info!(
            delta = delta_bytes,
            used = quota.used_bytes,
            "Simulated usage change applied"
        );
        quota
    }

    /// Look up an admitted object.
    pub fn lookup(&self, id: &ObjectId) -> Option<StoredObject> {
        self.lock().objects.get(id).cloned()
    }

    /// Remove an admitted object and release its bytes in one step.
    ///
    /// Returns `None` (and releases nothing) for unknown ids, so removing
    /// the same object twice cannot release its bytes twice.
    pub fn forget(&self, id: &ObjectId) -> Option<StoredObject> {
        let (object, used) = {
            let mut state = self.lock();
            let object = state.objects.remove(id)?;
            state.used_bytes = state.used_bytes.saturating_sub(object.size_bytes);
            (object, state.used_bytes)
        };

        self.metrics.record_released(object.size_bytes);
        info!(object_id = %object.id, size = object.size_bytes, used, "Object removed");
        Some(object)
    }

    /// Number of admitted objects still recorded.
    pub fn object_count(&self) -> usize {
        self.lock().objects.len()
    }
}
