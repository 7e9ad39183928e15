//! Dashboard statistics and review listings.

use crate::metrics::ratings::round_to_tenth;
use crate::models::{Member, Review, Trainer};

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub total_members: usize,
    pub total_trainers: usize,
    pub total_reviews: usize,
    /// Mean of trainer ratings (unrated trainers count as 0), one decimal
    pub avg_rating: f64,
}

impl DashboardStats {
    /// Build stats from freshly loaded collections.
    pub fn from_records(members: &[Member], trainers: &[Trainer], reviews: &[Review]) -> Self {
        Self {
            total_members: members.len(),
            total_trainers: trainers.len(),
            total_reviews: reviews.len(),
            avg_rating: average_trainer_rating(trainers),
        }
    }
}

/// Mean trainer rating rounded to one decimal; 0 with no trainers.
pub fn average_trainer_rating(trainers: &[Trainer]) -> f64 {
    if trainers.is_empty() {
        return 0.0;
    }
    let sum: f64 = trainers.iter().map(|t| t.rating).sum();
    round_to_tenth(sum / trainers.len() as f64)
}

/// Highest-rated trainer. On a tie the later trainer wins.
pub fn top_trainer(trainers: &[Trainer]) -> Option<&Trainer> {
    trainers
        .iter()
        .reduce(|best, current| if best.rating > current.rating { best } else { current })
}

/// Which reviews to list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    #[default]
    All,
    Trainer(String),
}

/// Filter reviews and order them newest first.
pub fn list_reviews<'a>(reviews: &'a [Review], filter: &ReviewFilter) -> Vec<&'a Review> {
    let mut listed: Vec<&Review> = reviews
        .iter()
        .filter(|r| match filter {
            ReviewFilter::All => true,
            ReviewFilter::Trainer(id) => &r.trainer_id == id,
        })
        .collect();
    listed.sort_by(|a, b| b.date.cmp(&a.date));
    listed
}

/// Members matching a search term, in collection order.
pub fn search_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    members.iter().filter(|m| m.matches_search(term)).collect()
}
