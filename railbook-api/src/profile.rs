use axum::{extract::Query, routing::get, Json, Router};
use railbook_catalog::{past_journeys, upcoming_journeys, user_profile, Journey, ProfileTab, UserProfile};
use serde::{Deserialize, Serialize};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TabLink {
    pub id: ProfileTab,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user: UserProfile,
    pub active_tab: ProfileTab,
    pub tabs: Vec<TabLink>,
    pub stats: Vec<Stat>,
    pub upcoming: Vec<Journey>,
    pub past: Vec<Journey>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(profile))
}

async fn profile(Query(query): Query<ProfileQuery>) -> Json<ProfileView> {
    let user = user_profile();
    let active_tab = query.tab.as_deref().map(ProfileTab::parse).unwrap_or_default();

    let tabs = [
        ProfileTab::Overview,
        ProfileTab::Bookings,
        ProfileTab::Payments,
        ProfileTab::Notifications,
        ProfileTab::Settings,
        ProfileTab::Help,
    ]
    .into_iter()
    .map(|id| TabLink { id, name: id.label() })
    .collect();

    let stats = vec![
        Stat { label: "Total Bookings", value: user.total_bookings.to_string() },
        Stat { label: "Amount Spent", value: user.total_spent.to_string() },
        Stat { label: "Member Since", value: user.member_since.clone() },
        Stat { label: "Preferred Class", value: user.preferred_class.to_string() },
    ];

    Json(ProfileView {
        user,
        active_tab,
        tabs,
        stats,
        upcoming: upcoming_journeys(),
        past: past_journeys(),
    })
}
