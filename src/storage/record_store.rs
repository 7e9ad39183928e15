//! Record store for members, trainers and reviews.
//!
//! Each collection is a JSON array stored under its own key. Reads seed
//! defaults into an empty collection according to [`SeedMode`]; reading
//! trainers always recomputes their ratings from the reviews and writes
//! the result back.

use serde::{de::DeserializeOwned, Serialize};

use crate::metrics::ratings::apply_ratings;
use crate::models::{Member, Review, Trainer};
use crate::storage::backend::{StorageBackend, StoreError};
use crate::storage::seed::{default_trainers, demo_members, demo_reviews, SeedMode};

/// Storage key for the member collection.
pub const MEMBERS_KEY: &str = "fitnexus_members";
/// Storage key for the trainer collection.
pub const TRAINERS_KEY: &str = "fitnexus_trainers";
/// Storage key for the review collection.
pub const REVIEWS_KEY: &str = "fitnexus_reviews";

/// Store for the three record collections on top of a key-value backend.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    seed_mode: SeedMode,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Create a store that seeds trainers only.
    pub fn new(backend: B) -> Self {
        Self::with_seed_mode(backend, SeedMode::default())
    }

    /// Create a store with an explicit seeding policy.
    pub fn with_seed_mode(backend: B, seed_mode: SeedMode) -> Self {
        Self { backend, seed_mode }
    }

    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether the backend has persistent storage.
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    // ========== Members ==========

    /// Get all members in stored order.
    pub fn get_members(&mut self) -> Result<Vec<Member>, StoreError> {
        let seed = self.seed_mode.seeds_members();
        self.load_or_seed(MEMBERS_KEY, seed, demo_members)
    }

    /// Get a member by id.
    pub fn get_member(&mut self, id: &str) -> Result<Option<Member>, StoreError> {
        Ok(self.get_members()?.into_iter().find(|m| m.id == id))
    }

    /// Insert a member, or replace the member with the same id in place.
    pub fn save_member(&mut self, member: Member) -> Result<(), StoreError> {
        if !self.is_available() {
            tracing::debug!("No storage available, skipping save of member {}", member.id);
            return Ok(());
        }

        let mut members = self.get_members()?;
        match members.iter().position(|m| m.id == member.id) {
            Some(index) => {
                tracing::debug!("Replacing member {}", member.id);
                members[index] = member;
            }
            None => {
                tracing::debug!("Adding member {}", member.id);
                members.push(member);
            }
        }

        self.persist(MEMBERS_KEY, &members)
    }

    /// Delete a member by id. Returns whether a member was removed.
    ///
    /// Reviews and other references to the member are left in place.
    pub fn delete_member(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.is_available() {
            tracing::debug!("No storage available, skipping delete of member {}", id);
            return Ok(false);
        }

        let mut members = self.get_members()?;
        let before = members.len();
        members.retain(|m| m.id != id);
        let removed = members.len() != before;

        self.persist(MEMBERS_KEY, &members)?;
        tracing::debug!("Deleted member {} (found: {})", id, removed);
        Ok(removed)
    }

    // ========== Trainers ==========

    /// Get all trainers with ratings freshly derived from the reviews.
    ///
    /// This writes the trainer collection back to storage.
    pub fn get_trainers(&mut self) -> Result<Vec<Trainer>, StoreError> {
        self.recompute_ratings()
    }

    /// Get a trainer by id, with a fresh rating.
    pub fn get_trainer(&mut self, id: &str) -> Result<Option<Trainer>, StoreError> {
        Ok(self.get_trainers()?.into_iter().find(|t| t.id == id))
    }

    /// Recompute every trainer's `rating` and `total_reviews` from the
    /// review collection and persist the trainer collection.
    pub fn recompute_ratings(&mut self) -> Result<Vec<Trainer>, StoreError> {
        if !self.is_available() {
            return Ok(Vec::new());
        }

        let mut trainers = self.load_or_seed(TRAINERS_KEY, true, default_trainers)?;
        let reviews = self.get_reviews()?;

        let changed = apply_ratings(&mut trainers, &reviews);
        if changed > 0 {
            tracing::debug!("Updated ratings for {} trainer(s)", changed);
        }

        self.persist(TRAINERS_KEY, &trainers)?;
        Ok(trainers)
    }

    // ========== Reviews ==========

    /// Get all reviews in stored order.
    pub fn get_reviews(&mut self) -> Result<Vec<Review>, StoreError> {
        let seed = self.seed_mode.seeds_reviews();
        self.load_or_seed(REVIEWS_KEY, seed, demo_reviews)
    }

    /// Append a review and refresh trainer ratings.
    ///
    /// Reviews are never replaced; ids are not checked for collisions.
    pub fn save_review(&mut self, review: Review) -> Result<(), StoreError> {
        if !self.is_available() {
            tracing::debug!("No storage available, skipping save of review {}", review.id);
            return Ok(());
        }

        let trainer_id = review.trainer_id.clone();
        let mut reviews = self.get_reviews()?;
        reviews.push(review);
        self.persist(REVIEWS_KEY, &reviews)?;

        tracing::debug!("Added review for trainer {}", trainer_id);
        self.recompute_ratings()?;
        Ok(())
    }

    // ========== Maintenance ==========

    /// Remove all three collections. The next read seeds them again.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        for key in [MEMBERS_KEY, TRAINERS_KEY, REVIEWS_KEY] {
            self.backend.remove(key)?;
        }
        tracing::info!("Cleared all collections");
        Ok(())
    }

    // ========== Helpers ==========

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, StoreError> {
        match self.backend.get(key)? {
            Some(data) if data.trim().is_empty() => {
                tracing::debug!("Stored value for {} is empty, treating as absent", key);
                Ok(None)
            }
            Some(data) => serde_json::from_str(&data)
                .map(Some)
                .map_err(|e| StoreError::Deserialization {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    fn load_or_seed<T, F>(&mut self, key: &str, seed: bool, defaults: F) -> Result<Vec<T>, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        if !self.is_available() {
            return Ok(Vec::new());
        }

        if let Some(records) = self.load(key)? {
            return Ok(records);
        }

        if !seed {
            return Ok(Vec::new());
        }

        let records = defaults();
        self.persist(key, &records)?;
        tracing::info!("Seeded {} with {} record(s)", key, records.len());
        Ok(records)
    }

    fn persist<T: Serialize>(&mut self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let data =
            serde_json::to_string(records).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.backend.set(key, &data)
    }
}
