//! Derived values: trainer ratings and dashboard summaries.

pub mod ratings;
pub mod summary;

pub use ratings::{apply_ratings, rating_for, round_to_tenth, TrainerRating};
pub use summary::{
    average_trainer_rating, list_reviews, search_members, top_trainer, DashboardStats, ReviewFilter,
};
