//! Command output against an in-memory store.

use fitnexus::cli::{run, Command};
use fitnexus::models::{MemberStatus, MembershipType};
use fitnexus::storage::{MemoryBackend, RecordStore, SeedMode};

fn run_to_string(store: &mut RecordStore<MemoryBackend>, command: Command) -> String {
    let mut out = Vec::new();
    run(command, store, &mut out).expect("command failed");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_stats_on_demo_data() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let output = run_to_string(&mut store, Command::Stats);

    assert!(output.contains("Members:        12"));
    assert!(output.contains("Trainers:       6"));
    assert!(output.contains("Reviews:        18"));
    assert!(output.contains("Top trainer:"));
}

#[test]
fn test_add_member_then_list() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let output = run_to_string(
        &mut store,
        Command::AddMember {
            name: "Park Junho".to_string(),
            phone: "010-4567-8901".to_string(),
            email: "park@example.com".to_string(),
            trainer: Some("3".to_string()),
            membership: MembershipType::Yearly,
            status: MemberStatus::Active,
        },
    );
    assert!(output.starts_with("Added member "));

    let members = store.get_members().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].trainer_name, "박민수");

    let listing = run_to_string(
        &mut store,
        Command::Members {
            search: Some("PARK".to_string()),
        },
    );
    assert!(listing.contains("Park Junho"));
    assert!(listing.contains("yearly"));
}

#[test]
fn test_edit_member_keeps_join_date() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let before = store.get_member("6").unwrap().unwrap();

    run_to_string(
        &mut store,
        Command::EditMember {
            id: "6".to_string(),
            name: None,
            phone: None,
            email: None,
            trainer: None,
            membership: None,
            status: Some(MemberStatus::Active),
        },
    );

    let after = store.get_member("6").unwrap().unwrap();
    assert_eq!(after.status, MemberStatus::Active);
    assert_eq!(after.join_date, before.join_date);
    assert_eq!(after.name, before.name);
}

#[test]
fn test_add_review_reports_new_rating() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let output = run_to_string(
        &mut store,
        Command::AddReview {
            member: "11".to_string(),
            trainer: "5".to_string(),
            rating: 5,
            comment: "Great".to_string(),
        },
    );
    assert!(output.contains("rated 4.5 (2 reviews)"));
}

#[test]
fn test_add_review_rejects_unknown_member() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let mut out = Vec::new();
    let result = run(
        Command::AddReview {
            member: "nobody".to_string(),
            trainer: "1".to_string(),
            rating: 5,
            comment: String::new(),
        },
        &mut store,
        &mut out,
    );

    assert!(result.is_err());
    assert!(store.get_reviews().unwrap().is_empty());
}

#[test]
fn test_delete_unknown_member_fails() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let mut out = Vec::new();
    assert!(run(Command::DeleteMember { id: "9".to_string() }, &mut store, &mut out).is_err());
}

#[test]
fn test_reviews_filtered_by_trainer() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let output = run_to_string(
        &mut store,
        Command::Reviews {
            trainer: Some("4".to_string()),
        },
    );

    // Trainer 4 has reviews 5, 14 and 16 in the demo data
    assert_eq!(output.lines().count(), 3);
    assert!(output.lines().next().unwrap().starts_with("2024-03-14"));
}

#[test]
fn test_add_member_with_blank_email_fails() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let mut out = Vec::new();
    let result = run(
        Command::AddMember {
            name: "Park Junho".to_string(),
            phone: "010-4567-8901".to_string(),
            email: "  ".to_string(),
            trainer: None,
            membership: MembershipType::Monthly,
            status: MemberStatus::Active,
        },
        &mut store,
        &mut out,
    );

    assert!(result.is_err());
    assert!(store.get_members().unwrap().is_empty());
}

#[test]
fn test_add_review_with_blank_comment_fails() {
    let mut store = RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo);
    let mut out = Vec::new();
    let result = run(
        Command::AddReview {
            member: "11".to_string(),
            trainer: "5".to_string(),
            rating: 5,
            comment: String::new(),
        },
        &mut store,
        &mut out,
    );

    assert!(result.is_err());
    assert_eq!(store.get_reviews().unwrap().len(), 18);
}

#[test]
fn test_trainers_listing_marks_unrated() {
    let mut store = RecordStore::new(MemoryBackend::new());
    let output = run_to_string(&mut store, Command::Trainers);

    assert_eq!(output.lines().count(), 6);
    assert!(output.lines().all(|line| line.ends_with("not rated")));

    let demo = run_to_string(
        &mut RecordStore::with_seed_mode(MemoryBackend::new(), SeedMode::Demo),
        Command::Trainers,
    );
    assert!(demo.contains("4.8 (5 reviews)"));
}
