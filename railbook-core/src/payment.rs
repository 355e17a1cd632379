use async_trait::async_trait;
use railbook_shared::Rupees;
use serde::{Deserialize, Serialize};

use crate::CoreResult;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Upi, PaymentMethod::Card, PaymentMethod::NetBanking];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI / GPay / PhonePe",
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "Pay through UPI apps like Google Pay, PhonePe, or BHIM",
            PaymentMethod::Card => "Pay using credit card or debit card",
            PaymentMethod::NetBanking => "Pay directly from your bank account",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
}

/// Settles a booking payment. The only implementation simulates latency and
/// always succeeds; no money moves.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn settle(&self, amount: Rupees, method: PaymentMethod) -> CoreResult<PaymentStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        let method: PaymentMethod = serde_json::from_str("\"netbanking\"").unwrap();
        assert_eq!(method, PaymentMethod::NetBanking);
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), "\"upi\"");
    }
}
