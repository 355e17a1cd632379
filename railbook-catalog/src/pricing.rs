use railbook_shared::Rupees;
use serde::{Deserialize, Serialize};

/// Flat per-passenger service fee added on top of the fare.
pub const DEFAULT_SERVICE_FEE: Rupees = Rupees(30);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarePricing {
    pub service_fee: Rupees,
}

impl Default for FarePricing {
    fn default() -> Self {
        Self { service_fee: DEFAULT_SERVICE_FEE }
    }
}

/// Itemised price shown on the payment and confirmation steps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareBreakdown {
    pub unit_price: Rupees,
    pub passengers: u32,
    pub base_fare: Rupees,
    pub service_fee: Rupees,
    pub total: Rupees,
}

impl FarePricing {
    pub fn new(service_fee: Rupees) -> Self {
        Self { service_fee }
    }

    /// `passengers × unit_price + passengers × service_fee`
    pub fn compute_total(&self, unit_price: Rupees, passengers: u32) -> Rupees {
        self.breakdown(unit_price, passengers).total
    }

    pub fn breakdown(&self, unit_price: Rupees, passengers: u32) -> FareBreakdown {
        let base_fare = unit_price * passengers;
        let service_fee = self.service_fee * passengers;
        FareBreakdown {
            unit_price,
            passengers,
            base_fare,
            service_fee,
            total: base_fare + service_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_for_every_party_size() {
        let pricing = FarePricing::default();
        for n in 1..=6u32 {
            assert_eq!(pricing.compute_total(Rupees(1255), n), Rupees(1255 * n + 30 * n));
        }
    }

    #[test]
    fn test_single_passenger_breakdown() {
        let breakdown = FarePricing::default().breakdown(Rupees(1255), 1);
        assert_eq!(breakdown.base_fare, Rupees(1255));
        assert_eq!(breakdown.service_fee, Rupees(30));
        assert_eq!(breakdown.total, Rupees(1285));
    }
}
