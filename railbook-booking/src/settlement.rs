use async_trait::async_trait;
use railbook_core::{CoreResult, Delay, PaymentGateway, PaymentMethod, PaymentStatus};
use railbook_shared::Rupees;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Stand-in for a payment provider: waits out a fixed latency and reports
/// success. There is no retry and nothing to roll back.
pub struct PaymentSimulator {
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl PaymentSimulator {
    pub fn new(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

#[async_trait]
impl PaymentGateway for PaymentSimulator {
    async fn settle(&self, amount: Rupees, method: PaymentMethod) -> CoreResult<PaymentStatus> {
        info!(amount = %amount, method = ?method, "Settling simulated payment");
        self.delay.wait(self.latency).await;
        Ok(PaymentStatus::Succeeded)
    }
}

/// Display-only reference shown on the confirmation page. Collisions are
/// possible and harmless.
pub fn generate_booking_id<R: Rng>(rng: &mut R) -> String {
    format!("RWHB{}", rng.gen_range(0..1_000_000u32))
}
