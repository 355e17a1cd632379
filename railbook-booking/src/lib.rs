pub mod models;
pub mod wizard;
pub mod settlement;
pub mod manager;

pub use models::{Confirmation, ContactUpdate, Notice, PassengerUpdate, Retreat, Step};
pub use wizard::{BookingError, BookingResult, BookingSession};
pub use settlement::{generate_booking_id, PaymentSimulator};
pub use manager::{SessionManager, DEFAULT_SESSION_TTL_SECS};
