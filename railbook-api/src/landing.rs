use axum::{
    extract::Query,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use railbook_catalog::{locations, popular_routes, suggest_locations, PopularRoute};
use railbook_core::search::SearchForm;
use serde::{Deserialize, Serialize};
use crate::{
    error::{AppError, AppJson},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { name: "Home", path: "/" },
        NavItem { name: "Search", path: "/search" },
        NavItem { name: "Bookings", path: "/booking" },
        NavItem { name: "Profile", path: "/profile" },
    ]
}

#[derive(Debug, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub tagline: &'static str,
    pub highlights: [&'static str; 3],
}

#[derive(Debug, Serialize)]
pub struct LandingView {
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub locations: Vec<String>,
    pub popular_routes: Vec<PopularRoute>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/locations", get(suggest))
        .route("/search-form", post(submit_search))
}

async fn landing() -> Json<LandingView> {
    Json(LandingView {
        nav: nav_items(),
        hero: Hero {
            badge: "Now available in 500+ cities across India",
            tagline: "The modern way to book train tickets. Fast, secure, and hassle-free travel planning for your journey across India.",
            highlights: ["500+ Destinations", "Instant Booking", "6M+ Travelers"],
        },
        locations: locations(),
        popular_routes: popular_routes(),
    })
}

async fn suggest(Query(query): Query<SuggestQuery>) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        suggestions: suggest_locations(&query.q),
    })
}

/// Validates the landing form and sends the browser to the results page
async fn submit_search(AppJson(form): AppJson<SearchForm>) -> Result<Redirect, AppError> {
    let target = form.submit()?;
    Ok(Redirect::to(&target))
}
