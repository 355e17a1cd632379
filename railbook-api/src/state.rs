use std::sync::Arc;
use tokio::sync::RwLock;
use railbook_booking::{PaymentSimulator, SessionManager, DEFAULT_SESSION_TTL_SECS};
use railbook_catalog::FarePricing;
use railbook_core::{Delay, PaymentGateway};
use railbook_shared::Rupees;
use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<SessionManager>>,
    pub payments: Arc<dyn PaymentGateway>,
    pub delay: Arc<dyn Delay>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the state from configuration. `delay` drives every simulated wait,
    /// so tests pass `NoDelay` and run without sleeping.
    pub fn new(config: Config, delay: Arc<dyn Delay>) -> Self {
        let pricing = FarePricing::new(Rupees(config.booking.service_fee));
        let ttl = chrono::Duration::from_std(config.booking.session_ttl())
            .unwrap_or_else(|_| chrono::Duration::seconds(DEFAULT_SESSION_TTL_SECS));
        let payments = Arc::new(PaymentSimulator::new(
            delay.clone(),
            config.simulation.payment_delay(),
        ));

        Self {
            sessions: Arc::new(RwLock::new(SessionManager::new(pricing, ttl))),
            payments,
            delay,
            config: Arc::new(config),
        }
    }
}
