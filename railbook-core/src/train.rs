use railbook_shared::Rupees;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat availability shown on a train card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Availability {
    Available,
    #[serde(rename = "Waiting List")]
    WaitingList,
    #[serde(rename = "RAC")]
    Rac,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Availability::Available => "Available",
            Availability::WaitingList => "Waiting List",
            Availability::Rac => "RAC",
        };
        f.write_str(label)
    }
}

/// Named service tier, e.g. "AC 2 Tier" or "Sleeper"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FareClass(pub String);

impl FareClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable mock train record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub id: String,
    pub name: String,
    pub number: String,
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    /// "HH:MM", 24-hour clock
    pub departure_time: String,
    pub arrival_time: String,
    /// "NNh MMm"
    pub duration: String,
    pub date: String,
    pub price: Rupees,
    pub availability: Availability,
    pub classes: Vec<FareClass>,
    pub rating: f32,
}

impl Train {
    pub fn offers_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.as_str() == class)
    }

    /// Journey length in minutes, parsed from the "NNh MMm" display string.
    /// Unparseable components count as zero.
    pub fn duration_minutes(&self) -> u32 {
        parse_duration_minutes(&self.duration)
    }
}

pub fn parse_duration_minutes(duration: &str) -> u32 {
    let mut minutes = 0;
    for part in duration.split_whitespace() {
        if let Some(hours) = part.strip_suffix('h') {
            minutes += hours.parse::<u32>().unwrap_or(0) * 60;
        } else if let Some(mins) = part.strip_suffix('m') {
            minutes += mins.parse::<u32>().unwrap_or(0);
        }
    }
    minutes
}
