//! # Donation Core
//!
//! Core logic for the blood donation service.
//!
//! This crate contains pure, in-process operations:
//! - ABO/Rh donation compatibility ([`CompatibilityService`])
//! - The in-memory donation record store ([`DonationStore`])
//!
//! **No API concerns**: HTTP routing, JSON wire types and CLI parsing belong in `api-rest`,
//! `api-shared` and `donation-cli`.

pub mod compatibility;
pub mod donation;
pub mod store;

pub use compatibility::{CompatibilityCheck, CompatibilityProfile, CompatibilityService};
pub use donation::{Donation, DonationInput};
pub use donation_uuid::DonationId;
pub use store::DonationStore;
