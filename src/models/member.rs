//! Gym member record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Trainer;

/// Membership status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => f.pad("active"),
            MemberStatus::Inactive => f.pad("inactive"),
            MemberStatus::Suspended => f.pad("suspended"),
        }
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            "suspended" => Ok(MemberStatus::Suspended),
            other => Err(format!("unknown member status: {other}")),
        }
    }
}

/// Membership billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipType::Monthly => f.pad("monthly"),
            MembershipType::Quarterly => f.pad("quarterly"),
            MembershipType::Yearly => f.pad("yearly"),
        }
    }
}

impl FromStr for MembershipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(MembershipType::Monthly),
            "quarterly" => Ok(MembershipType::Quarterly),
            "yearly" => Ok(MembershipType::Yearly),
            other => Err(format!("unknown membership type: {other}")),
        }
    }
}

/// A gym member assigned to a trainer.
///
/// `trainer_name` is a copy of the trainer's name taken when the member
/// was saved; renaming the trainer does not update it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Phone number (free text)
    pub phone: String,
    /// Email address (free text)
    pub email: String,
    /// When the member joined; never changes after creation
    pub join_date: DateTime<Utc>,
    /// Assigned trainer
    pub trainer_id: String,
    /// Trainer name at assignment time
    pub trainer_name: String,
    /// Current status
    pub status: MemberStatus,
    /// Billing period
    pub membership_type: MembershipType,
}

impl Member {
    /// Current name of the assigned trainer, falling back to the stored
    /// copy when the trainer no longer exists.
    pub fn trainer_display_name<'a>(&'a self, trainers: &'a [Trainer]) -> &'a str {
        trainers
            .iter()
            .find(|t| t.id == self.trainer_id)
            .map(|t| t.name.as_str())
            .unwrap_or(self.trainer_name.as_str())
    }

    /// Check whether the member matches a search term.
    ///
    /// Name and email match case-insensitively, phone matches as typed.
    /// An empty term matches every member.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let lowered = term.to_lowercase();
        self.name.to_lowercase().contains(&lowered)
            || self.phone.contains(term)
            || self.email.to_lowercase().contains(&lowered)
    }
}
