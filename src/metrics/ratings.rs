//! Trainer rating aggregation.
//!
//! A trainer's `rating` is the mean of the ratings of every review whose
//! `trainer_id` matches, rounded to one decimal place, and `total_reviews`
//! is the number of such reviews. Trainers with no reviews report 0 / 0.

use std::collections::HashMap;

use crate::models::{Review, Trainer};

/// Derived rating for one trainer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrainerRating {
    /// Mean rating rounded to one decimal place
    pub rating: f64,
    /// Number of reviews counted
    pub total_reviews: u32,
}

/// Running sum and count of review ratings.
#[derive(Debug, Clone, Copy, Default)]
struct RatingTally {
    sum: u64,
    count: u32,
}

impl RatingTally {
    fn add(&mut self, rating: u8) {
        self.sum += u64::from(rating);
        self.count += 1;
    }

    fn to_rating(self) -> TrainerRating {
        if self.count == 0 {
            return TrainerRating::default();
        }
        TrainerRating {
            rating: round_to_tenth(self.sum as f64 / f64::from(self.count)),
            total_reviews: self.count,
        }
    }
}

/// Round half-up to one decimal place (`round(value * 10) / 10`).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the rating for a single trainer from the full review set.
pub fn rating_for(trainer_id: &str, reviews: &[Review]) -> TrainerRating {
    let mut tally = RatingTally::default();
    for review in reviews.iter().filter(|r| r.trainer_id == trainer_id) {
        tally.add(review.rating);
    }
    tally.to_rating()
}

/// Compute ratings for every trainer id that appears in `reviews`.
pub fn ratings_by_trainer(reviews: &[Review]) -> HashMap<&str, TrainerRating> {
    let mut tallies: HashMap<&str, RatingTally> = HashMap::new();
    for review in reviews {
        tallies.entry(review.trainer_id.as_str()).or_default().add(review.rating);
    }
    tallies
        .into_iter()
        .map(|(id, tally)| (id, tally.to_rating()))
        .collect()
}

/// Overwrite each trainer's derived fields from `reviews`.
///
/// Returns the number of trainers whose derived fields changed.
pub fn apply_ratings(trainers: &mut [Trainer], reviews: &[Review]) -> usize {
    let ratings = ratings_by_trainer(reviews);
    let mut changed = 0;

    for trainer in trainers.iter_mut() {
        let derived = ratings
            .get(trainer.id.as_str())
            .copied()
            .unwrap_or_default();

        if trainer.rating != derived.rating || trainer.total_reviews != derived.total_reviews {
            trainer.rating = derived.rating;
            trainer.total_reviews = derived.total_reviews;
            changed += 1;
        }
    }

    changed
}
