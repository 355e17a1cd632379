use railbook_core::{Availability, FareClass, Train};
use railbook_shared::Rupees;

use crate::{CatalogError, CatalogResult};

#[allow(clippy::too_many_arguments)]
fn train(
    id: &str,
    name: &str,
    number: &str,
    departure_time: &str,
    arrival_time: &str,
    duration: &str,
    price: u32,
    availability: Availability,
    classes: &[&str],
    rating: f32,
) -> Train {
    Train {
        id: id.to_string(),
        name: name.to_string(),
        number: number.to_string(),
        origin: "Delhi".to_string(),
        destination: "Mumbai".to_string(),
        departure_time: departure_time.to_string(),
        arrival_time: arrival_time.to_string(),
        duration: duration.to_string(),
        date: "Mon, 15 Jul".to_string(),
        price: Rupees(price),
        availability,
        classes: classes.iter().map(|c| FareClass::new(*c)).collect(),
        rating,
    }
}

/// The fixed inventory shown on the results page, in catalog order.
pub fn trains() -> Vec<Train> {
    vec![
        train(
            "1", "Rajdhani Express", "12301", "16:35", "08:15", "15h 40m", 1255,
            Availability::Available, &["AC 1st Class", "AC 2 Tier", "AC 3 Tier"], 4.5,
        ),
        train(
            "2", "Shatabdi Express", "12002", "06:15", "22:30", "16h 15m", 1350,
            Availability::Available, &["Chair Car", "Executive Chair Car"], 4.3,
        ),
        train(
            "3", "Duronto Express", "12213", "11:25", "03:55", "16h 30m", 1190,
            Availability::WaitingList, &["AC 2 Tier", "AC 3 Tier", "Sleeper"], 4.0,
        ),
        train(
            "4", "Garib Rath", "12909", "15:35", "08:10", "16h 35m", 850,
            Availability::Available, &["AC 3 Tier", "Sleeper"], 3.8,
        ),
        train(
            "5", "Tejas Express", "22119", "08:15", "23:50", "15h 35m", 1450,
            Availability::Rac, &["AC Chair Car", "Executive Chair Car"], 4.7,
        ),
    ]
}

pub fn find_train(id: &str) -> Option<Train> {
    trains().into_iter().find(|t| t.id == id)
}

pub fn require_train(id: &str) -> CatalogResult<Train> {
    find_train(id).ok_or_else(|| CatalogError::TrainNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let all = trains();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|t| (0.0..=5.0).contains(&t.rating)));
        assert!(all.iter().all(|t| !t.classes.is_empty()));
    }

    #[test]
    fn test_find_train() {
        let rajdhani = find_train("1").unwrap();
        assert_eq!(rajdhani.name, "Rajdhani Express");
        assert_eq!(rajdhani.price, Rupees(1255));
        assert!(rajdhani.offers_class("AC 2 Tier"));

        assert!(find_train("99").is_none());
        assert!(matches!(require_train("99"), Err(CatalogError::TrainNotFound(_))));
    }
}
