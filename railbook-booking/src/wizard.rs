use chrono::{DateTime, Utc};
use railbook_catalog::{FareBreakdown, FarePricing};
use railbook_core::validation::{is_valid_email, is_valid_phone, parse_age};
use railbook_core::{ContactInfo, FareClass, Passenger, PaymentGateway, PaymentMethod, PaymentStatus, Train, MAX_PASSENGERS};
use railbook_shared::{Masked, Rupees};
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Confirmation, ContactUpdate, Notice, PassengerUpdate, Retreat, Step};
use crate::settlement::generate_booking_id;

const PREFERRED_CLASS: &str = "AC 2 Tier";

/// One in-progress booking. Owned by a single client; nothing here is
/// persisted and a dropped session is simply gone.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSession {
    pub id: Uuid,
    pub train: Train,
    pub fare_class: FareClass,
    pub passengers: Vec<Passenger>,
    pub contact: ContactInfo,
    pub payment_method: PaymentMethod,
    pub step: Step,
    /// Set while a payment is settling
    pub processing: bool,
    pub confirmation: Option<Confirmation>,
    #[serde(skip)]
    pricing: FarePricing,
    pub created_at: DateTime<Utc>,
    /// Last time the client acted on this session
    pub last_active_at: DateTime<Utc>,
}

impl BookingSession {
    pub fn new(train: Train) -> Self {
        Self::with_pricing(train, FarePricing::default())
    }

    pub fn with_pricing(train: Train, pricing: FarePricing) -> Self {
        let fare_class = if train.offers_class(PREFERRED_CLASS) {
            FareClass::new(PREFERRED_CLASS)
        } else {
            train.classes.first().cloned().unwrap_or_else(|| FareClass::new(PREFERRED_CLASS))
        };

        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            train,
            fare_class,
            passengers: vec![Passenger::blank()],
            contact: ContactInfo::default(),
            payment_method: PaymentMethod::default(),
            step: Step::PassengerDetails,
            processing: false,
            confirmation: None,
            pricing,
            created_at: now,
            last_active_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    /// Idle for at least `ttl`. A session that is settling never counts as idle.
    pub fn is_expired(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> bool {
        !self.processing && self.last_active_at + ttl <= now
    }

    pub fn current_step(&self) -> u8 {
        self.step.number()
    }

    /// Width of the progress bar across the three editable steps
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() - 1) * 50).min(100)
    }

    pub fn passenger_count(&self) -> u32 {
        self.passengers.len() as u32
    }

    pub fn fare(&self) -> FareBreakdown {
        self.pricing.breakdown(self.train.price, self.passenger_count())
    }

    pub fn compute_total(&self) -> Rupees {
        self.pricing.compute_total(self.train.price, self.passenger_count())
    }

    /// Appends a blank passenger and returns the new count.
    pub fn add_passenger(&mut self) -> BookingResult<usize> {
        self.ensure_editable()?;
        if self.passengers.len() >= MAX_PASSENGERS {
            return Err(BookingError::PassengerLimit { max: MAX_PASSENGERS });
        }
        self.passengers.push(Passenger::blank());
        Ok(self.passengers.len())
    }

    /// Removes the passenger at `index`. Returns false when nothing was
    /// removed: the last remaining passenger is never dropped and an
    /// out-of-range index is ignored.
    pub fn remove_passenger(&mut self, index: usize) -> BookingResult<bool> {
        self.ensure_editable()?;
        if self.passengers.len() <= 1 || index >= self.passengers.len() {
            return Ok(false);
        }
        self.passengers.remove(index);
        Ok(true)
    }

    pub fn update_passenger(&mut self, index: usize, update: PassengerUpdate) -> BookingResult<&Passenger> {
        self.ensure_editable()?;
        // Parse before touching the record so a bad age leaves it unchanged.
        let age = match update.age.as_deref() {
            Some(text) => Some(parse_age(text).map_err(|e| BookingError::InvalidAge(e.to_string()))?),
            None => None,
        };

        let passenger = self
            .passengers
            .get_mut(index)
            .ok_or(BookingError::PassengerNotFound(index))?;

        if let Some(name) = update.name {
            passenger.name = name;
        }
        if let Some(age) = age {
            passenger.age = age;
        }
        if let Some(gender) = update.gender {
            passenger.gender = gender;
        }
        Ok(passenger)
    }

    pub fn update_contact(&mut self, update: ContactUpdate) -> BookingResult<&ContactInfo> {
        self.ensure_editable()?;
        if let Some(email) = update.email {
            self.contact.email = Masked::new(email);
        }
        if let Some(phone) = update.phone {
            self.contact.phone = Masked::new(phone);
        }
        Ok(&self.contact)
    }

    pub fn select_fare_class(&mut self, class: &str) -> BookingResult<()> {
        self.ensure_editable()?;
        if !self.train.offers_class(class) {
            return Err(BookingError::UnknownFareClass(class.to_string()));
        }
        self.fare_class = FareClass::new(class);
        Ok(())
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> BookingResult<()> {
        self.ensure_editable()?;
        self.payment_method = method;
        Ok(())
    }

    /// Checks the fields owned by `step`. Never mutates the session.
    pub fn validate_step(&self, step: Step) -> BookingResult<()> {
        match step {
            Step::PassengerDetails => {
                if self.passengers.iter().all(Passenger::is_complete) {
                    Ok(())
                } else {
                    Err(BookingError::IncompletePassengers)
                }
            }
            Step::ContactInfo => {
                if !is_valid_email(self.contact.email.expose()) {
                    return Err(BookingError::InvalidEmail);
                }
                if !is_valid_phone(self.contact.phone.expose()) {
                    return Err(BookingError::InvalidPhone);
                }
                Ok(())
            }
            Step::Payment | Step::Confirmed => Ok(()),
        }
    }

    /// Moves forward one step if the current step validates. The payment
    /// step is left only through [`BookingSession::submit_payment`].
    pub fn advance(&mut self) -> BookingResult<Step> {
        self.ensure_editable()?;
        if self.step == Step::Payment {
            return Err(BookingError::InvalidTransition {
                from: self.step,
                action: "advance",
            });
        }

        if let Err(e) = self.validate_step(self.step) {
            warn!(session_id = %self.id, step = %self.step, "Step validation failed: {}", e);
            return Err(e);
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn retreat(&mut self) -> BookingResult<Retreat> {
        self.ensure_editable()?;
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Ok(Retreat::Moved(previous))
            }
            None => Ok(Retreat::LeaveWizard),
        }
    }

    /// First half of payment: marks the session as settling and returns the
    /// amount due. Callers settle outside any lock, then call
    /// [`BookingSession::complete_payment`].
    pub fn begin_payment(&mut self) -> BookingResult<Rupees> {
        self.ensure_editable()?;
        if self.step != Step::Payment {
            return Err(BookingError::InvalidTransition {
                from: self.step,
                action: "pay",
            });
        }
        self.processing = true;
        Ok(self.compute_total())
    }

    pub fn complete_payment(&mut self, booking_id: String) -> BookingResult<&Confirmation> {
        if self.step != Step::Payment || !self.processing {
            return Err(BookingError::InvalidTransition {
                from: self.step,
                action: "confirm",
            });
        }

        let confirmation = Confirmation {
            booking_id,
            train: self.train.clone(),
            fare_class: self.fare_class.clone(),
            passengers: self.passengers.clone(),
            contact: self.contact.clone(),
            payment_method: self.payment_method,
            fare: self.fare(),
            confirmed_at: Utc::now(),
        };

        self.processing = false;
        self.step = Step::Confirmed;
        info!(
            session_id = %self.id,
            booking_id = %confirmation.booking_id,
            total = %confirmation.fare.total,
            "Booking confirmed"
        );
        Ok(self.confirmation.insert(confirmation))
    }

    pub fn abort_payment(&mut self) {
        self.processing = false;
    }

    /// Runs the whole payment in one call.
    pub async fn submit_payment<R: Rng>(
        &mut self,
        gateway: &dyn PaymentGateway,
        rng: &mut R,
    ) -> BookingResult<&Confirmation> {
        let amount = self.begin_payment()?;
        match gateway.settle(amount, self.payment_method).await {
            Ok(PaymentStatus::Succeeded) => {}
            Ok(PaymentStatus::Processing) => {
                self.abort_payment();
                return Err(BookingError::PaymentFailed("Settlement did not complete".to_string()));
            }
            Err(e) => {
                self.abort_payment();
                return Err(BookingError::PaymentFailed(e.to_string()));
            }
        }
        self.complete_payment(generate_booking_id(rng))
    }

    fn ensure_editable(&self) -> BookingResult<()> {
        if self.step == Step::Confirmed {
            return Err(BookingError::AlreadyConfirmed);
        }
        if self.processing {
            return Err(BookingError::PaymentInProgress);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Passenger limit of {max} reached")]
    PassengerLimit { max: usize },

    #[error("Passenger details incomplete")]
    IncompletePassengers,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("{0}")]
    InvalidAge(String),

    #[error("No passenger at index {0}")]
    PassengerNotFound(usize),

    #[error("Fare class not offered: {0}")]
    UnknownFareClass(String),

    #[error("Cannot {action} from step {from}")]
    InvalidTransition { from: Step, action: &'static str },

    #[error("Booking already confirmed")]
    AlreadyConfirmed,

    #[error("Payment already in progress")]
    PaymentInProgress,

    #[error("Payment failed: {0}")]
    PaymentFailed(String),
}

impl BookingError {
    /// The message shown to the user for this failure
    pub fn notice(&self) -> Notice {
        match self {
            BookingError::PassengerLimit { max } => Notice::new(
                "Maximum limit reached",
                format!("You can book up to {} passengers only.", max),
            ),
            BookingError::IncompletePassengers => Notice::new(
                "Incomplete passenger details",
                "Please fill name and age for all passengers.",
            ),
            BookingError::InvalidEmail => {
                Notice::new("Invalid email address", "Please enter a valid email address.")
            }
            BookingError::InvalidPhone => Notice::new(
                "Invalid phone number",
                "Please enter a valid 10-digit phone number.",
            ),
            BookingError::InvalidAge(msg) => Notice::new("Invalid age", msg.clone()),
            BookingError::PassengerNotFound(index) => Notice::new(
                "Passenger not found",
                format!("There is no passenger at position {}.", index + 1),
            ),
            BookingError::UnknownFareClass(class) => Notice::new(
                "Fare class unavailable",
                format!("{} is not offered on this train.", class),
            ),
            BookingError::InvalidTransition { from, action } => Notice::new(
                "Action not available",
                format!("Cannot {} while on {}.", action, from),
            ),
            BookingError::AlreadyConfirmed => Notice::new(
                "Booking already confirmed",
                "This booking can no longer be changed.",
            ),
            BookingError::PaymentInProgress => Notice::new(
                "Payment in progress",
                "Please wait while we confirm your payment.",
            ),
            BookingError::PaymentFailed(_) => Notice::new(
                "Payment failed",
                "We could not confirm your payment. Please try again.",
            ),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
