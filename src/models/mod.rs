//! Record types persisted by the store.
//!
//! Field names serialize in camelCase so stored collections stay
//! compatible with data already written under the `fitnexus_*` keys.

pub mod member;
pub mod review;
pub mod trainer;

pub use member::{Member, MemberStatus, MembershipType};
pub use review::Review;
pub use trainer::Trainer;

use chrono::{DateTime, Utc};

/// Generate a record id from a timestamp (Unix milliseconds, decimal).
pub fn generate_id(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}
