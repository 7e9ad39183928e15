//! FitNexus - Gym Membership and Trainer Review Management
//!
//! Keeps members, trainers and trainer reviews as JSON collections in a
//! key-value store, and derives each trainer's rating from the reviews.

pub mod cli;
pub mod forms;
pub mod metrics;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use metrics::ratings::TrainerRating;
pub use metrics::summary::DashboardStats;
pub use models::{Member, MemberStatus, MembershipType, Review, Trainer};
pub use storage::{MemoryBackend, RecordStore, SeedMode, StorageBackend, StoreError};
