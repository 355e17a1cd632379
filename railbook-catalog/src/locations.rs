use railbook_shared::Rupees;
use serde::Serialize;

const LOCATIONS: [&str; 10] = [
    "Delhi",
    "Mumbai",
    "Chennai",
    "Kolkata",
    "Bangalore",
    "Hyderabad",
    "Ahmedabad",
    "Pune",
    "Jaipur",
    "Lucknow",
];

pub fn locations() -> Vec<String> {
    LOCATIONS.iter().map(|l| l.to_string()).collect()
}

/// Cities whose name contains `input`, ignoring case. Nothing is suggested
/// until the user has typed something.
pub fn suggest_locations(input: &str) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    LOCATIONS
        .iter()
        .filter(|l| l.to_lowercase().contains(&needle))
        .map(|l| l.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PopularRoute {
    pub from: String,
    pub to: String,
    pub duration: String,
    pub trains: u32,
    pub starting_price: Rupees,
}

pub fn popular_routes() -> Vec<PopularRoute> {
    [
        ("Delhi", "Mumbai", "16h 35m", 28, 1200),
        ("Mumbai", "Bangalore", "21h 10m", 15, 1500),
        ("Chennai", "Kolkata", "26h 45m", 12, 1800),
        ("Hyderabad", "Delhi", "22h 30m", 18, 1650),
        ("Kolkata", "Mumbai", "32h 15m", 10, 2100),
        ("Bangalore", "Chennai", "6h 40m", 25, 800),
    ]
    .into_iter()
    .map(|(from, to, duration, trains, price)| PopularRoute {
        from: from.to_string(),
        to: to.to_string(),
        duration: duration.to_string(),
        trains,
        starting_price: Rupees(price),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_are_case_insensitive() {
        assert_eq!(suggest_locations("MUM"), vec!["Mumbai".to_string()]);
        assert_eq!(suggest_locations("ai"), vec!["Mumbai", "Chennai", "Jaipur"]);
    }

    #[test]
    fn test_empty_input_suggests_nothing() {
        assert!(suggest_locations("").is_empty());
        assert!(suggest_locations("   ").is_empty());
    }

    #[test]
    fn test_popular_routes() {
        let routes = popular_routes();
        assert_eq!(routes.len(), 6);
        assert_eq!(routes[5].starting_price, Rupees(800));
    }
}
