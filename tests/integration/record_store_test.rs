//! Record store behaviour through the public API.

use chrono::{Duration, TimeZone, Utc};
use fitnexus::metrics::ratings::rating_for;
use fitnexus::storage::{DetachedBackend, MemoryBackend, RecordStore, SeedMode, TRAINERS_KEY};
use fitnexus::{Member, MemberStatus, Review, StoreError};

fn member(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        phone: "010-0000-0000".to_string(),
        email: format!("{}@example.com", id),
        join_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        trainer_id: "1".to_string(),
        trainer_name: "김철수".to_string(),
        ..Default::default()
    }
}

fn review(id: &str, trainer_id: &str, rating: u8) -> Review {
    Review {
        id: id.to_string(),
        member_id: "1".to_string(),
        member_name: "홍길동".to_string(),
        trainer_id: trainer_id.to_string(),
        trainer_name: String::new(),
        rating,
        comment: String::new(),
        date: Utc::now(),
    }
}

#[test]
fn test_one_record_per_id_with_latest_values() {
    let mut store = RecordStore::new(MemoryBackend::new());

    store.save_member(member("a", "First")).unwrap();
    store.save_member(member("b", "Second")).unwrap();
    store.save_member(member("c", "Third")).unwrap();

    let mut updated = member("b", "Second Updated");
    updated.status = MemberStatus::Inactive;
    store.save_member(updated).unwrap();
    store.save_member(member("a", "First Again")).unwrap();

    let members = store.get_members().unwrap();
    let ids: Vec<_> = members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(members[0].name, "First Again");
    assert_eq!(members[1].name, "Second Updated");
    assert_eq!(members[1].status, MemberStatus::Inactive);
}

#[test]
fn test_delete_then_get_never_returns_id() {
    let mut store = RecordStore::new(MemoryBackend::new());
    for id in ["1", "2", "3"] {
        store.save_member(member(id, "Name")).unwrap();
    }

    store.delete_member("2").unwrap();
    assert!(store.get_members().unwrap().iter().all(|m| m.id != "2"));

    let before = store.get_members().unwrap();
    store.delete_member("does-not-exist").unwrap();
    assert_eq!(store.get_members().unwrap(), before);
}

#[test]
fn test_trainer_ratings_match_reviews() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let ratings = [(1, "1", 5), (2, "1", 2), (3, "2", 3), (4, "3", 4), (5, "3", 4), (6, "1", 4)];
    for (id, trainer_id, rating) in ratings {
        store.save_review(review(&id.to_string(), trainer_id, rating)).unwrap();
    }

    let reviews = store.get_reviews().unwrap();
    for trainer in store.get_trainers().unwrap() {
        let matching = reviews.iter().filter(|r| r.trainer_id == trainer.id).count() as u32;
        if matching == 0 {
            assert_eq!(trainer.rating, 0.0);
            assert_eq!(trainer.total_reviews, 0);
        } else {
            assert_eq!(trainer.total_reviews, matching);
            assert_eq!(trainer.rating, rating_for(&trainer.id, &reviews).rating);
        }
    }
}

#[test]
fn test_three_reviews_average_to_four_point_seven() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let seeded = store.get_trainer("1").unwrap().unwrap();
    assert_eq!(seeded.rating, 0.0);
    assert_eq!(seeded.total_reviews, 0);

    for (id, rating) in [("r1", 5), ("r2", 4), ("r3", 5)] {
        store.save_review(review(id, "1", rating)).unwrap();
    }

    let trainer = store.get_trainer("1").unwrap().unwrap();
    assert_eq!(trainer.rating, 4.7);
    assert_eq!(trainer.total_reviews, 3);
}

#[test]
fn test_save_review_is_append_only() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let initial = store.get_reviews().unwrap().len();

    let base = Utc::now();
    for n in 0..4 {
        let mut r = review(&format!("new-{}", n), "2", 3);
        r.date = base + Duration::seconds(n);
        store.save_review(r).unwrap();
    }

    assert_eq!(store.get_reviews().unwrap().len(), initial + 4);
}

#[test]
fn test_get_trainers_is_idempotent() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let first = store.get_trainers().unwrap();
    let stored_after_first = store.backend().raw(TRAINERS_KEY).map(str::to_string);

    let second = store.get_trainers().unwrap();
    assert_eq!(first, second);
    assert_eq!(store.backend().raw(TRAINERS_KEY).map(str::to_string), stored_after_first);
}

#[test]
fn test_member_with_unknown_trainer_is_accepted() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let mut orphan = member("x", "Orphan");
    orphan.trainer_id = "404".to_string();
    orphan.trainer_name = "Nobody".to_string();

    store.save_member(orphan).unwrap();

    let saved = store.get_member("x").unwrap().unwrap();
    assert_eq!(saved.trainer_id, "404");
    assert_eq!(saved.trainer_name, "Nobody");
}

#[test]
fn test_no_storage_reads_empty() {
    let mut store = RecordStore::new(DetachedBackend);
    assert!(store.get_members().unwrap().is_empty());
    assert!(store.get_trainers().unwrap().is_empty());
    assert!(store.get_reviews().unwrap().is_empty());
}

#[test]
fn test_corrupted_reviews_surface_on_trainer_read() {
    let backend = MemoryBackend::with_entries([("fitnexus_reviews", "[{\"id\":")]);
    let mut store = RecordStore::new(backend);

    let err = store.get_trainers().unwrap_err();
    assert!(matches!(err, StoreError::Deserialization { ref key, .. } if key == "fitnexus_reviews"));
}

#[test]
fn test_reads_camel_case_data_with_js_timestamps() {
    let members = r#"[{"id":"1","name":"홍길동","phone":"010-1234-5678","email":"hong@example.com",
        "joinDate":"2024-01-14T15:00:00.000Z","trainerId":"1","trainerName":"김철수",
        "status":"active","membershipType":"monthly"}]"#;
    let reviews = r#"[{"id":"1710000000000","memberId":"1","memberName":"홍길동","trainerId":"1",
        "trainerName":"김철수","rating":4,"comment":"좋아요","date":"2024-03-09T16:00:00.000Z"}]"#;
    let backend = MemoryBackend::with_entries([
        ("fitnexus_members", members),
        ("fitnexus_reviews", reviews),
    ]);
    let mut store = RecordStore::new(backend);

    assert_eq!(store.get_members().unwrap()[0].trainer_name, "김철수");
    let trainer = store.get_trainer("1").unwrap().unwrap();
    assert_eq!(trainer.rating, 4.0);
    assert_eq!(trainer.total_reviews, 1);
}
