//! Ratings and statistics derived from the demo data set.

use fitnexus::metrics::ratings::apply_ratings;
use fitnexus::metrics::summary::{top_trainer, DashboardStats};
use fitnexus::storage::seed::{default_trainers, demo_members, demo_reviews};

#[test]
fn test_demo_ratings() {
    let mut trainers = default_trainers();
    let reviews = demo_reviews();
    apply_ratings(&mut trainers, &reviews);

    let expected = [
        ("1", 4.8, 5), // 5 5 4 5 5
        ("2", 4.8, 4), // 5 5 5 4
        ("3", 4.5, 2), // 4 5
        ("4", 4.3, 3), // 4 4 5
        ("5", 4.0, 1), // 4
        ("6", 5.0, 3), // 5 5 5
    ];

    for (id, rating, count) in expected {
        let trainer = trainers.iter().find(|t| t.id == id).unwrap();
        assert_eq!(trainer.rating, rating, "trainer {}", id);
        assert_eq!(trainer.total_reviews, count, "trainer {}", id);
    }
}

#[test]
fn test_demo_dashboard() {
    let mut trainers = default_trainers();
    let reviews = demo_reviews();
    apply_ratings(&mut trainers, &reviews);
    let members = demo_members();

    let stats = DashboardStats::from_records(&members, &trainers, &reviews);
    assert_eq!(stats.total_members, 12);
    assert_eq!(stats.total_trainers, 6);
    assert_eq!(stats.total_reviews, 18);
    // (4.8 + 4.8 + 4.5 + 4.3 + 4.0 + 5.0) / 6 = 4.566...
    assert_eq!(stats.avg_rating, 4.6);

    assert_eq!(top_trainer(&trainers).map(|t| t.id.as_str()), Some("6"));
}
