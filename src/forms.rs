//! Input validation and record construction for the presentation layer.
//!
//! The store accepts whatever it is given; these forms are where user input
//! is checked before it reaches `save_member` / `save_review`.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::review::MAX_RATING;
use crate::models::{generate_id, Member, MemberStatus, MembershipType, Review, Trainer};

/// Member create/edit form.
#[derive(Debug, Clone, Default)]
pub struct MemberForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub trainer_id: String,
    pub membership_type: MembershipType,
    pub status: MemberStatus,
}

impl MemberForm {
    /// Pre-fill the form from an existing member.
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            phone: member.phone.clone(),
            email: member.email.clone(),
            trainer_id: member.trainer_id.clone(),
            membership_type: member.membership_type,
            status: member.status,
        }
    }

    /// Blank form with the first trainer preselected.
    pub fn blank(trainers: &[Trainer]) -> Self {
        Self {
            trainer_id: trainers.first().map(|t| t.id.clone()).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Build the member to save.
    ///
    /// Name, phone, email and trainer are required. When editing, the
    /// existing id and join date are kept. The trainer name is copied from
    /// `trainers`, or left empty if the id is unknown.
    pub fn into_member(
        self,
        existing: Option<&Member>,
        trainers: &[Trainer],
        now: DateTime<Utc>,
    ) -> Result<Member, FormError> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;
        let email = required("email", &self.email)?;
        let trainer_id = required("trainer", &self.trainer_id)?;

        let trainer_name = trainers
            .iter()
            .find(|t| t.id == trainer_id)
            .map(|t| t.name.clone())
            .unwrap_or_default();

        Ok(Member {
            id: existing.map(|m| m.id.clone()).unwrap_or_else(|| generate_id(now)),
            name,
            phone,
            email,
            join_date: existing.map(|m| m.join_date).unwrap_or(now),
            trainer_id,
            trainer_name,
            status: self.status,
            membership_type: self.membership_type,
        })
    }
}

/// Review form.
#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub member_id: String,
    pub trainer_id: String,
    pub rating: u8,
    pub comment: String,
}

impl ReviewForm {
    /// Fresh form with the first member and trainer preselected and a 5-star rating.
    pub fn blank(members: &[Member], trainers: &[Trainer]) -> Self {
        Self {
            member_id: members.first().map(|m| m.id.clone()).unwrap_or_default(),
            trainer_id: trainers.first().map(|t| t.id.clone()).unwrap_or_default(),
            rating: MAX_RATING,
            comment: String::new(),
        }
    }

    /// Build the review to save. The comment is required.
    pub fn into_review(
        self,
        members: &[Member],
        trainers: &[Trainer],
        now: DateTime<Utc>,
    ) -> Result<Review, FormError> {
        let member = members.iter().find(|m| m.id == self.member_id);
        let trainer = trainers.iter().find(|t| t.id == self.trainer_id);

        let (Some(member), Some(trainer)) = (member, trainer) else {
            return Err(FormError::SelectionRequired);
        };

        if !Review::is_valid_rating(self.rating) {
            return Err(FormError::RatingOutOfRange(self.rating));
        }

        let comment = required("comment", &self.comment)?;

        Ok(Review {
            id: generate_id(now),
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            trainer_id: trainer.id.clone(),
            trainer_name: trainer.name.clone(),
            rating: self.rating,
            comment,
            date: now,
        })
    }
}

/// Trimmed value of a required field.
fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Form validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Select a member and a trainer")]
    SelectionRequired,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}
