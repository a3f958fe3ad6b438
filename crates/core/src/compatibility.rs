//! ABO/Rh donation compatibility.
//!
//! The rules are a fixed decision table evaluated in order, first match wins:
//!
//! | # | Donor | Compatible recipients |
//! |---|-------|-----------------------|
//! | 1 | `O-`  | everyone |
//! | 2 | any   | the same type |
//! | 3 | `O+`  | `A+`, `B+`, `AB+`, `O+` |
//! | 4 | `A-`  | `A+`, `A-`, `AB+`, `AB-` |
//! | 5 | `B-`  | `B+`, `B-`, `AB+`, `AB-` |
//! | 6 | `A+`  | `A+`, `AB+` |
//! | 7 | `B+`  | `B+`, `AB+` |
//! | 8 | `AB-` | `AB-`, `AB+` |
//! | 9 | `AB+` | `AB+` |
//!
//! Inputs are plain strings compared after ASCII uppercasing. Strings that are not blood types
//! are not rejected here: they fail every rule except rule 2, so `can_donate("xyz", "XYZ")` is
//! `true`. Callers that need strict input use `donation_types::BloodType` first.

use donation_types::BloodType;

/// Result of a single compatibility check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityCheck {
    pub compatible: bool,
    pub message: String,
}

/// Every type a blood type can give to and receive from, in [`BloodType::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityProfile {
    pub blood_type: BloodType,
    pub can_donate_to: Vec<BloodType>,
    pub can_receive_from: Vec<BloodType>,
}

/// Stateless compatibility rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompatibilityService;

impl CompatibilityService {
    /// Returns true if blood of `donor_type` can be given to `recipient_type`.
    ///
    /// Both inputs are matched case-insensitively. Never fails.
    pub fn can_donate(donor_type: &str, recipient_type: &str) -> bool {
        let donor = donor_type.to_ascii_uppercase();
        let recipient = recipient_type.to_ascii_uppercase();
        let (donor, recipient) = (donor.as_str(), recipient.as_str());

        if donor == "O-" || donor == recipient {
            return true;
        }

        match donor {
            "O+" => matches!(recipient, "A+" | "B+" | "AB+" | "O+"),
            "A-" => matches!(recipient, "A+" | "A-" | "AB+" | "AB-"),
            "B-" => matches!(recipient, "B+" | "B-" | "AB+" | "AB-"),
            "A+" => matches!(recipient, "A+" | "AB+"),
            "B+" => matches!(recipient, "B+" | "AB+"),
            "AB-" => matches!(recipient, "AB-" | "AB+"),
            _ => donor == "AB+" && recipient == "AB+",
        }
    }

    /// Human-readable verdict, quoting the inputs exactly as given.
    ///
    /// ```
    /// use donation_core::CompatibilityService;
    ///
    /// assert_eq!(
    ///     CompatibilityService::compatibility_message("A+", "AB+"),
    ///     "Donor (A+) can donate to recipient (AB+)."
    /// );
    /// ```
    pub fn compatibility_message(donor_type: &str, recipient_type: &str) -> String {
        let compatible = Self::can_donate(donor_type, recipient_type);
        Self::format_message(donor_type, recipient_type, compatible)
    }

    /// Evaluates the rules once and returns both the verdict and its message.
    pub fn check(donor_type: &str, recipient_type: &str) -> CompatibilityCheck {
        let compatible = Self::can_donate(donor_type, recipient_type);
        CompatibilityCheck {
            compatible,
            message: Self::format_message(donor_type, recipient_type, compatible),
        }
    }

    /// Applies [`can_donate`](Self::can_donate) against all eight types in both directions.
    pub fn profile(blood_type: BloodType) -> CompatibilityProfile {
        let can_donate_to = BloodType::ALL
            .into_iter()
            .filter(|recipient| Self::can_donate(blood_type.as_str(), recipient.as_str()))
            .collect();
        let can_receive_from = BloodType::ALL
            .into_iter()
            .filter(|donor| Self::can_donate(donor.as_str(), blood_type.as_str()))
            .collect();

        CompatibilityProfile {
            blood_type,
            can_donate_to,
            can_receive_from,
        }
    }

    fn format_message(donor_type: &str, recipient_type: &str, compatible: bool) -> String {
        format!(
            "Donor ({}) can{} donate to recipient ({}).",
            donor_type,
            if compatible { "" } else { "not" },
            recipient_type
        )
    }
}
