//! JSON request and response bodies.
//!
//! Donation bodies use camelCase field names (`donorId`); the compatibility check uses
//! snake_case (`donor_type`). Both spellings are part of the public wire format.

use donation_core::{CompatibilityCheck, CompatibilityProfile, Donation, DonationInput};
use donation_types::BloodType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /api/donations` and `PUT /api/donations/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationReq {
    pub donor_id: String,
    pub date: String,
    pub location: String,
    pub status: String,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<DonationReq> for DonationInput {
    fn from(req: DonationReq) -> Self {
        DonationInput {
            donor_id: req.donor_id,
            date: req.date,
            location: req.location,
            status: req.status,
            recipient: req.recipient.unwrap_or_default(),
            notes: req.notes.unwrap_or_default(),
        }
    }
}

/// A stored donation as returned by the API. `recipient` and `notes` are always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationRes {
    pub id: String,
    pub donor_id: String,
    pub date: String,
    pub location: String,
    pub status: String,
    pub recipient: String,
    pub notes: String,
}

impl From<Donation> for DonationRes {
    fn from(d: Donation) -> Self {
        DonationRes {
            id: d.id.to_string(),
            donor_id: d.donor_id,
            date: d.date,
            location: d.location,
            status: d.status,
            recipient: d.recipient,
            notes: d.notes,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Body of `POST /api/check_compatibility`.
///
/// Both fields are nominally required; the handler reports a missing or blank field itself so
/// the client gets a specific message.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityReq {
    #[serde(default)]
    pub donor_type: Option<String>,
    #[serde(default)]
    pub recipient_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityRes {
    pub compatible: bool,
    pub message: String,
}

impl From<CompatibilityCheck> for CompatibilityRes {
    fn from(check: CompatibilityCheck) -> Self {
        CompatibilityRes {
            compatible: check.compatible,
            message: check.message,
        }
    }
}

/// Body of `GET /api/compatibility/{blood_type}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompatibilityProfileRes {
    pub blood_type: String,
    pub can_donate_to: Vec<String>,
    pub can_receive_from: Vec<String>,
}

fn blood_type_names(types: Vec<BloodType>) -> Vec<String> {
    types.iter().map(BloodType::to_string).collect()
}

impl From<CompatibilityProfile> for CompatibilityProfileRes {
    fn from(profile: CompatibilityProfile) -> Self {
        CompatibilityProfileRes {
            blood_type: profile.blood_type.to_string(),
            can_donate_to: blood_type_names(profile.can_donate_to),
            can_receive_from: blood_type_names(profile.can_receive_from),
        }
    }
}
