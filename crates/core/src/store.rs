//! In-memory donation record store.
//!
//! A [`DonationStore`] owns an ordered list of [`Donation`]s behind a single exclusive lock.
//! Each operation takes the lock for its whole duration and does no I/O while holding it, so
//! operations are atomic with respect to one another. Nothing is persisted: records live as
//! long as the store instance.
//!
//! Handlers share one store through an `Arc<DonationStore>` held in their state.

use crate::donation::{Donation, DonationInput};
use donation_uuid::DonationId;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct DonationStore {
    donations: Mutex<Vec<Donation>>,
}

impl DonationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every record, in insertion order.
    pub fn list_all(&self) -> Vec<Donation> {
        self.donations.lock().clone()
    }

    /// Returns a copy of the record with `id`, if any.
    pub fn get(&self, id: &str) -> Option<Donation> {
        let id = DonationId::parse(id).ok()?;
        self.donations.lock().iter().find(|d| d.id == id).cloned()
    }

    /// Stores a new record under a freshly generated id and returns it.
    pub fn create(&self, input: DonationInput) -> Donation {
        let donation = Donation::from_input(DonationId::new(), input);

        let mut donations = self.donations.lock();
        donations.push(donation.clone());
        tracing::debug!(id = %donation.id, total = donations.len(), "donation created");

        donation
    }

    /// Replaces every field of the record with `id`, keeping the id itself.
    ///
    /// Returns `false` and leaves the store untouched if no record has that id. An `id` that
    /// is not in canonical form cannot match any record.
    pub fn update(&self, id: &str, input: DonationInput) -> bool {
        let Ok(id) = DonationId::parse(id) else {
            return false;
        };

        let mut donations = self.donations.lock();
        match donations.iter_mut().find(|d| d.id == id) {
            Some(existing) => {
                existing.replace_fields(input);
                tracing::debug!(%id, "donation updated");
                true
            }
            None => false,
        }
    }

    /// Removes every record with `id`. Returns `true` if at least one was removed.
    pub fn delete(&self, id: &str) -> bool {
        let Ok(id) = DonationId::parse(id) else {
            return false;
        };

        let mut donations = self.donations.lock();
        let before = donations.len();
        donations.retain(|d| d.id != id);
        let removed = before - donations.len();
        if removed > 0 {
            tracing::debug!(%id, total = donations.len(), "donation deleted");
        }

        removed > 0
    }

    pub fn len(&self) -> usize {
        self.donations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.donations.lock().is_empty()
    }
}
