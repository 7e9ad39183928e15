//! Personal trainer record.

use serde::{Deserialize, Serialize};

/// A personal trainer.
///
/// `rating` and `total_reviews` are derived from the review collection and
/// overwritten whenever ratings are recomputed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trainer {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Area of specialty (free text)
    pub specialty: String,
    /// Years of experience
    pub experience: f64,
    /// Mean review rating, one decimal place (0 when unrated)
    pub rating: f64,
    /// Number of reviews for this trainer
    pub total_reviews: u32,
}

impl Trainer {
    /// Create an unrated trainer.
    pub fn new(id: &str, name: &str, specialty: &str, experience: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            experience,
            rating: 0.0,
            total_reviews: 0,
        }
    }

    /// Whether any review has been counted for this trainer.
    pub fn is_rated(&self) -> bool {
        self.total_reviews > 0
    }
}
