//! Trainer review record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Member, Trainer};

/// Lowest allowed review rating.
pub const MIN_RATING: u8 = 1;
/// Highest allowed review rating.
pub const MAX_RATING: u8 = 5;

/// A member's review of a trainer. Reviews are append-only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    /// Unique identifier
    pub id: String,
    /// Reviewing member
    pub member_id: String,
    /// Member name at review time
    pub member_name: String,
    /// Reviewed trainer
    pub trainer_id: String,
    /// Trainer name at review time
    pub trainer_name: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Free-text comment
    pub comment: String,
    /// When the review was written
    pub date: DateTime<Utc>,
}

impl Review {
    /// Check if a rating is within the allowed range.
    pub fn is_valid_rating(rating: u8) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    /// Current member name, or the stored copy if the member was deleted.
    pub fn member_display_name<'a>(&'a self, members: &'a [Member]) -> &'a str {
        members
            .iter()
            .find(|m| m.id == self.member_id)
            .map(|m| m.name.as_str())
            .unwrap_or(self.member_name.as_str())
    }

    /// Current trainer name, or the stored copy if the trainer is gone.
    pub fn trainer_display_name<'a>(&'a self, trainers: &'a [Trainer]) -> &'a str {
        trainers
            .iter()
            .find(|t| t.id == self.trainer_id)
            .map(|t| t.name.as_str())
            .unwrap_or(self.trainer_name.as_str())
    }
}
