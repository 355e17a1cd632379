use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Whole-rupee amount. Fares in the catalog carry no paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub u32);

impl Rupees {
    pub const ZERO: Rupees = Rupees(0);

    pub fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        Rupees(self.0 + rhs.0)
    }
}

impl Mul<u32> for Rupees {
    type Output = Rupees;

    fn mul(self, rhs: u32) -> Rupees {
        Rupees(self.0 * rhs)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Rupees {
        iter.fold(Rupees::ZERO, Add::add)
    }
}
