//! Record store on the SQLite backend.

use fitnexus::storage::{Database, RecordStore, SeedMode};
use fitnexus::Review;
use tempfile::TempDir;

#[test]
fn test_collections_persist_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fitnexus.db");

    {
        let db = Database::open(&path).unwrap();
        let mut store = RecordStore::with_seed_mode(db, SeedMode::Demo);
        store.delete_member("1").unwrap();
        store
            .save_review(Review {
                id: "19".to_string(),
                member_id: "2".to_string(),
                trainer_id: "5".to_string(),
                rating: 5,
                ..Default::default()
            })
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let mut store = RecordStore::with_seed_mode(db, SeedMode::Demo);

    let members = store.get_members().unwrap();
    assert_eq!(members.len(), 11);
    assert!(members.iter().all(|m| m.id != "1"));

    assert_eq!(store.get_reviews().unwrap().len(), 19);

    // Trainer 5 had a single 4-star review in the demo data
    let trainer = store.get_trainer("5").unwrap().unwrap();
    assert_eq!(trainer.total_reviews, 2);
    assert_eq!(trainer.rating, 4.5);
}

#[test]
fn test_trainers_only_mode_writes_no_member_key() {
    let db = Database::open_in_memory().unwrap();
    let mut store = RecordStore::new(db);

    assert!(store.get_members().unwrap().is_empty());
    assert_eq!(store.get_trainers().unwrap().len(), 6);

    let keys = store.backend().keys().unwrap();
    assert_eq!(keys, vec!["fitnexus_trainers".to_string()]);
}
