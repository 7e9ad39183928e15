//! Command-line front end.
//!
//! Commands call the record store and print plain-text listings. All
//! validation goes through [`crate::forms`].

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::forms::{MemberForm, ReviewForm};
use crate::metrics::summary::{list_reviews, search_members, top_trainer, DashboardStats, ReviewFilter};
use crate::models::{MemberStatus, MembershipType};
use crate::storage::{RecordStore, SeedMode, StorageBackend};

#[derive(Debug, Parser)]
#[command(name = "fitnexus")]
#[command(about = "Gym member, trainer and review management")]
pub struct Cli {
    /// Config file (defaults to config.toml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured seeding policy (trainers_only | demo)
    #[arg(long, global = true)]
    pub seed_mode: Option<SeedMode>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show member, trainer and review totals
    Stats,

    /// List members
    Members {
        /// Filter by name, email or phone
        #[arg(long)]
        search: Option<String>,
    },

    /// List trainers with their ratings
    Trainers,

    /// List reviews, newest first
    Reviews {
        /// Only reviews for this trainer id
        #[arg(long)]
        trainer: Option<String>,
    },

    /// Add a member
    AddMember {
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        /// Trainer id (defaults to the first trainer)
        #[arg(long)]
        trainer: Option<String>,
        #[arg(long, default_value = "monthly")]
        membership: MembershipType,
        #[arg(long, default_value = "active")]
        status: MemberStatus,
    },

    /// Change fields of an existing member
    EditMember {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        trainer: Option<String>,
        #[arg(long)]
        membership: Option<MembershipType>,
        #[arg(long)]
        status: Option<MemberStatus>,
    },

    /// Delete a member
    DeleteMember { id: String },

    /// Write a review
    AddReview {
        #[arg(long)]
        member: String,
        #[arg(long)]
        trainer: String,
        #[arg(long, default_value_t = 5)]
        rating: u8,
        #[arg(long)]
        comment: String,
    },

    /// Remove all stored collections
    Reset,
}

/// Run one command against `store`, writing output to `out`.
pub fn run<B: StorageBackend, W: Write>(
    command: Command,
    store: &mut RecordStore<B>,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Stats => {
            let members = store.get_members()?;
            let trainers = store.get_trainers()?;
            let reviews = store.get_reviews()?;
            let stats = DashboardStats::from_records(&members, &trainers, &reviews);

            writeln!(out, "Members:        {}", stats.total_members)?;
            writeln!(out, "Trainers:       {}", stats.total_trainers)?;
            writeln!(out, "Reviews:        {}", stats.total_reviews)?;
            writeln!(out, "Average rating: {:.1}", stats.avg_rating)?;
            if let Some(top) = top_trainer(&trainers) {
                writeln!(out, "Top trainer:    {} ({:.1})", top.name, top.rating)?;
            }
        }

        Command::Members { search } => {
            let members = store.get_members()?;
            let trainers = store.get_trainers()?;
            for member in search_members(&members, search.as_deref().unwrap_or("")) {
                writeln!(
                    out,
                    "{:<14} {:<12} {:<15} {:<24} {:<12} {:<9} {:<10} {}",
                    member.id,
                    member.name,
                    member.phone,
                    member.email,
                    member.trainer_display_name(&trainers),
                    member.membership_type,
                    member.status,
                    member.join_date.format("%Y-%m-%d"),
                )?;
            }
        }

        Command::Trainers => {
            for trainer in store.get_trainers()? {
                let rating = if trainer.is_rated() {
                    format!("{:.1} ({} reviews)", trainer.rating, trainer.total_reviews)
                } else {
                    "not rated".to_string()
                };
                writeln!(
                    out,
                    "{:<4} {:<10} {:<28} {:>4}y  {}",
                    trainer.id, trainer.name, trainer.specialty, trainer.experience, rating,
                )?;
            }
        }

        Command::Reviews { trainer } => {
            let reviews = store.get_reviews()?;
            let members = store.get_members()?;
            let trainers = store.get_trainers()?;
            let filter = trainer.map(ReviewFilter::Trainer).unwrap_or_default();

            for review in list_reviews(&reviews, &filter) {
                writeln!(
                    out,
                    "{} {} -> {} [{}/5] {}",
                    review.date.format("%Y-%m-%d"),
                    review.member_display_name(&members),
                    review.trainer_display_name(&trainers),
                    review.rating,
                    review.comment,
                )?;
            }
        }

        Command::AddMember {
            name,
            phone,
            email,
            trainer,
            membership,
            status,
        } => {
            let trainers = store.get_trainers()?;
            let mut form = MemberForm::blank(&trainers);
            form.name = name;
            form.phone = phone;
            form.email = email;
            if let Some(trainer_id) = trainer {
                form.trainer_id = trainer_id;
            }
            form.membership_type = membership;
            form.status = status;

            let member = form.into_member(None, &trainers, Utc::now())?;
            let id = member.id.clone();
            store.save_member(member)?;
            writeln!(out, "Added member {}", id)?;
        }

        Command::EditMember {
            id,
            name,
            phone,
            email,
            trainer,
            membership,
            status,
        } => {
            let existing = store
                .get_member(&id)?
                .with_context(|| format!("No member with id {}", id))?;
            let trainers = store.get_trainers()?;

            let mut form = MemberForm::from_member(&existing);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(trainer_id) = trainer {
                form.trainer_id = trainer_id;
            }
            if let Some(membership) = membership {
                form.membership_type = membership;
            }
            if let Some(status) = status {
                form.status = status;
            }

            let member = form.into_member(Some(&existing), &trainers, Utc::now())?;
            store.save_member(member)?;
            writeln!(out, "Updated member {}", id)?;
        }

        Command::DeleteMember { id } => {
            if !store.delete_member(&id)? {
                bail!("No member with id {}", id);
            }
            writeln!(out, "Deleted member {}", id)?;
        }

        Command::AddReview {
            member,
            trainer,
            rating,
            comment,
        } => {
            let members = store.get_members()?;
            let trainers = store.get_trainers()?;
            let form = ReviewForm {
                member_id: member,
                trainer_id: trainer,
                rating,
                comment,
            };

            let review = form.into_review(&members, &trainers, Utc::now())?;
            let trainer_id = review.trainer_id.clone();
            store.save_review(review)?;

            if let Some(updated) = store.get_trainer(&trainer_id)? {
                writeln!(
                    out,
                    "Review saved. {} is now rated {:.1} ({} reviews)",
                    updated.name, updated.rating, updated.total_reviews
                )?;
            }
        }

        Command::Reset => {
            store.clear()?;
            writeln!(out, "All collections cleared")?;
        }
    }

    Ok(())
}
