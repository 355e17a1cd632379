use railbook_shared::Masked;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// One traveller on a booking. A blank record has no name and no age;
/// the wizard refuses to leave the passenger step until both are filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub age: Option<u8>,
    pub gender: Gender,
}

impl Passenger {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.age.is_some()
    }
}

/// Contact details for the ticket. Both fields are masked in debug output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Masked<String>,
    pub phone: Masked<String>,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: Masked::new(email.into()),
            phone: Masked::new(phone.into()),
        }
    }
}
