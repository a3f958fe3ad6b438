//! Donation record identifiers.
//!
//! Every donation record gets a fresh identifier when it is stored. Identifiers are random
//! (UUID v4) rather than derived from the clock, so two records created within the same
//! millisecond still get distinct ids.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! This is the same value you would get from `Uuid::new_v4().simple().to_string()`. Externally
//! supplied identifiers (for example a REST path segment) must already be canonical; use
//! [`DonationId::parse`] to validate them.

mod id;

pub use id::DonationId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
