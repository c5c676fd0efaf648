//! Transfer backend implementations.

pub mod instant;
pub mod simulated;

use std::sync::Arc;

use vidtube_core::config::LatencyConfig;
use vidtube_core::traits::TransferBackend;

pub use instant::InstantBackend;
pub use simulated::SimulatedBackend;

/// Pick the backend matching the configured latency profile.
///
/// An all-zero profile needs no timer, so it gets the instant backend.
pub fn build_backend(latency: &LatencyConfig) -> Arc<dyn TransferBackend> {
    if latency.is_zero() {
        Arc::new(InstantBackend::new())
    } else {
        Arc::new(SimulatedBackend::new(latency.clone()))
    }
}
