//! Drive domain entities.

pub mod object;
pub mod quota;

pub use object::StoredObject;
pub use quota::{QuotaSnapshot, QuotaStatus, QuotaThresholds};
