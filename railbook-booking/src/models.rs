use railbook_catalog::FareBreakdown;
use railbook_core::{ContactInfo, FareClass, Gender, Passenger, PaymentMethod, Train};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wizard position. Moves one step at a time; `Confirmed` is terminal and is
/// only reached through a settled payment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    PassengerDetails,
    ContactInfo,
    Payment,
    Confirmed,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::PassengerDetails => 1,
            Step::ContactInfo => 2,
            Step::Payment => 3,
            Step::Confirmed => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::PassengerDetails),
            2 => Some(Step::ContactInfo),
            3 => Some(Step::Payment),
            4 => Some(Step::Confirmed),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PassengerDetails => "Passenger Details",
            Step::ContactInfo => "Contact Information",
            Step::Payment => "Payment",
            Step::Confirmed => "Booking Confirmed",
        }
    }

    pub(crate) fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub(crate) fn previous(self) -> Option<Step> {
        Step::from_number(self.number().saturating_sub(1))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Transient user-facing message, the equivalent of a toast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Outcome of a backward move
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "step")]
pub enum Retreat {
    Moved(Step),
    /// Already on the first step; the client should go back to the results page
    LeaveWizard,
}

/// Partial edit of one passenger form row. Age arrives as form text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassengerUpdate {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Receipt produced when the simulated payment settles
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    /// Display-only reference, not guaranteed unique
    pub booking_id: String,
    pub train: Train,
    pub fare_class: FareClass,
    pub passengers: Vec<Passenger>,
    pub contact: ContactInfo,
    pub payment_method: PaymentMethod,
    pub fare: FareBreakdown,
    pub confirmed_at: chrono::DateTime<chrono::Utc>,
}
