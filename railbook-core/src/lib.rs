pub mod train;
pub mod passenger;
pub mod validation;
pub mod search;
pub mod payment;
pub mod clock;

pub use train::{Availability, FareClass, Train};
pub use passenger::{ContactInfo, Gender, Passenger};
pub use payment::{PaymentGateway, PaymentMethod, PaymentStatus};
pub use clock::{Delay, NoDelay, TokioDelay};

/// Upper bound on passengers per booking.
pub const MAX_PASSENGERS: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Payment settlement failed: {0}")]
    PaymentError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
