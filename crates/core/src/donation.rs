//! Donation record types.

use donation_uuid::DonationId;

/// Caller-supplied fields of a donation record.
///
/// `donor_id` is opaque: it is not checked against any donor registry. `recipient` and `notes`
/// are optional in the wire format and stored as empty strings when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationInput {
    pub donor_id: String,
    pub date: String,
    pub location: String,
    pub status: String,
    pub recipient: String,
    pub notes: String,
}

/// A stored donation record.
///
/// The id is assigned by the store on creation and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Donation {
    pub id: DonationId,
    pub donor_id: String,
    pub date: String,
    pub location: String,
    pub status: String,
    pub recipient: String,
    pub notes: String,
}

impl Donation {
    pub fn from_input(id: DonationId, input: DonationInput) -> Self {
        let DonationInput {
            donor_id,
            date,
            location,
            status,
            recipient,
            notes,
        } = input;

        Self {
            id,
            donor_id,
            date,
            location,
            status,
            recipient,
            notes,
        }
    }

    /// Returns the caller-supplied fields of this record, without its id.
    pub fn input(&self) -> DonationInput {
        DonationInput {
            donor_id: self.donor_id.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
            status: self.status.clone(),
            recipient: self.recipient.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Overwrites every field except the id.
    pub(crate) fn replace_fields(&mut self, input: DonationInput) {
        *self = Self::from_input(self.id, input);
    }
}
