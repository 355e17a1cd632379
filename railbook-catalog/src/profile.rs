use railbook_core::FareClass;
use railbook_shared::{Masked, Rupees};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub address: Masked<String>,
    pub total_bookings: u32,
    pub total_spent: Rupees,
    pub member_since: String,
    pub preferred_class: FareClass,
    pub most_traveled_route: String,
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Rahul Sharma".to_string(),
        email: Masked::new("rahul.sharma@example.com".to_string()),
        phone: Masked::new("+91 98765 43210".to_string()),
        address: Masked::new("123 Railway Colony, New Delhi".to_string()),
        total_bookings: 15,
        total_spent: Rupees(24580),
        member_since: "Jan 2022".to_string(),
        preferred_class: FareClass::new("AC 2 Tier"),
        most_traveled_route: "Delhi - Mumbai".to_string(),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JourneyStatus {
    Upcoming,
    Completed,
}

/// A past or booked trip in the user's history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: String,
    pub name: String,
    pub number: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub date: String,
    pub status: JourneyStatus,
    /// Mock passenger name record, display only
    pub pnr: String,
    pub class: FareClass,
    pub price: Rupees,
}

pub fn journeys() -> Vec<Journey> {
    use JourneyStatus::*;

    [
        ("1", "Rajdhani Express", "12301", "Delhi", "Mumbai", "16:35", "08:15", "15h 40m", "15 Jul 2023", Upcoming, "4235678901", "AC 2 Tier", 1255),
        ("2", "Shatabdi Express", "12002", "Bangalore", "Chennai", "06:15", "12:45", "6h 30m", "28 Aug 2023", Upcoming, "5635678902", "Chair Car", 850),
        ("3", "Duronto Express", "12213", "Mumbai", "Delhi", "23:25", "15:55", "16h 30m", "10 Jun 2023", Completed, "2135678903", "AC 3 Tier", 1190),
        ("4", "Vande Bharat Express", "22435", "Delhi", "Varanasi", "06:00", "14:00", "8h 00m", "25 May 2023", Completed, "9835678904", "Executive Chair Car", 1800),
        ("5", "Garib Rath Express", "12909", "Mumbai", "Jaipur", "15:35", "09:30", "17h 55m", "12 Apr 2023", Completed, "7635678905", "AC 3 Tier", 950),
    ]
    .into_iter()
    .map(|(id, name, number, from, to, dep, arr, duration, date, status, pnr, class, price)| Journey {
        id: id.to_string(),
        name: name.to_string(),
        number: number.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        departure_time: dep.to_string(),
        arrival_time: arr.to_string(),
        duration: duration.to_string(),
        date: date.to_string(),
        status,
        pnr: pnr.to_string(),
        class: FareClass::new(class),
        price: Rupees(price),
    })
    .collect()
}

pub fn upcoming_journeys() -> Vec<Journey> {
    journeys().into_iter().filter(|j| j.status == JourneyStatus::Upcoming).collect()
}

pub fn past_journeys() -> Vec<Journey> {
    journeys().into_iter().filter(|j| j.status == JourneyStatus::Completed).collect()
}

/// Dashboard sections. Unknown names fall back to the overview.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Overview,
    Bookings,
    Payments,
    Notifications,
    Settings,
    Help,
}

impl ProfileTab {
    pub fn parse(name: &str) -> Self {
        match name {
            "bookings" => ProfileTab::Bookings,
            "payments" => ProfileTab::Payments,
            "notifications" => ProfileTab::Notifications,
            "settings" => ProfileTab::Settings,
            "help" => ProfileTab::Help,
            _ => ProfileTab::Overview,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Bookings => "My Bookings",
            ProfileTab::Payments => "Payment Methods",
            ProfileTab::Notifications => "Notifications",
            ProfileTab::Settings => "Account Settings",
            ProfileTab::Help => "Help & Support",
        }
    }
}
