use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::{CoreError, CoreResult, MAX_PASSENGERS};

/// Query parameters accepted by the results page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub date: String,
    #[serde(default = "default_passengers")]
    pub passengers: u8,
    #[serde(default)]
    pub sort: SortKey,
}

fn default_passengers() -> u8 {
    1
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            date: String::new(),
            passengers: default_passengers(),
            sort: SortKey::default(),
        }
    }
}

impl SearchQuery {
    pub fn validate(&self) -> CoreResult<()> {
        if self.passengers == 0 || usize::from(self.passengers) > MAX_PASSENGERS {
            return Err(CoreError::ValidationError(format!(
                "Passengers must be between 1 and {}",
                MAX_PASSENGERS
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Departure,
    Arrival,
    Duration,
    Price,
}

/// The landing-page search form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchForm {
    pub from: String,
    pub to: String,
    pub date: String,
    #[serde(default = "default_passengers")]
    pub passengers: u8,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            date: String::new(),
            passengers: default_passengers(),
        }
    }
}

impl SearchForm {
    /// Returns the results-page target for a filled-in form.
    pub fn submit(&self) -> CoreResult<String> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() || self.date.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Please fill origin, destination and travel date".to_string(),
            ));
        }

        let query = SearchQuery {
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
            date: self.date.trim().to_string(),
            passengers: self.passengers,
            sort: SortKey::default(),
        };
        query.validate()?;

        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair("from", &query.from)
            .append_pair("to", &query.to)
            .append_pair("date", &query.date)
            .append_pair("passengers", &query.passengers.to_string())
            .finish();

        tracing::debug!(from = %query.from, to = %query.to, passengers = query.passengers, "Search form submitted");
        Ok(format!("/search?{}", encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.passengers, 1);
        assert_eq!(query.sort, SortKey::Departure);
        assert!(query.from.is_empty());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_query_rejects_passenger_overflow() {
        let query = SearchQuery { passengers: 7, ..Default::default() };
        assert!(query.validate().is_err());
        let query = SearchQuery { passengers: 0, ..Default::default() };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_form_submit_encodes_target() {
        let form = SearchForm {
            from: "New Delhi".to_string(),
            to: "Mumbai".to_string(),
            date: "2024-07-15".to_string(),
            passengers: 2,
        };
        assert_eq!(
            form.submit().unwrap(),
            "/search?from=New+Delhi&to=Mumbai&date=2024-07-15&passengers=2"
        );
    }

    #[test]
    fn test_form_submit_requires_fields() {
        let form = SearchForm { from: "Delhi".to_string(), ..Default::default() };
        assert!(form.submit().is_err());
    }
}
