pub mod trains;
pub mod locations;
pub mod profile;
pub mod search;
pub mod pricing;

pub use trains::{find_train, require_train, trains};
pub use locations::{locations, popular_routes, suggest_locations, PopularRoute};
pub use profile::{journeys, past_journeys, upcoming_journeys, user_profile, Journey, JourneyStatus, ProfileTab, UserProfile};
pub use search::search_trains;
pub use pricing::{FareBreakdown, FarePricing};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Train not found: {0}")]
    TrainNotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
