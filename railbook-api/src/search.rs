use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use railbook_catalog::search_trains;
use railbook_core::search::{SearchQuery, SortKey};
use railbook_core::Train;
use serde::Serialize;
use tracing::info;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct TrainCard {
    #[serde(flatten)]
    pub train: Train,
    pub booking_href: String,
}

#[derive(Debug, Serialize)]
pub struct SearchView {
    pub from: String,
    pub to: String,
    pub date: String,
    pub passengers: u8,
    pub sort: SortKey,
    pub sort_options: [SortKey; 4],
    pub count: usize,
    pub trains: Vec<TrainCard>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search))
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchView>, AppError> {
    query.validate()?;

    // Simulated initial load
    state.delay.wait(state.config.simulation.search_delay()).await;

    let trains: Vec<TrainCard> = search_trains(&query)
        .into_iter()
        .map(|train| TrainCard {
            booking_href: format!("/booking?trainId={}", train.id),
            train,
        })
        .collect();

    info!(from = %query.from, to = %query.to, results = trains.len(), "Search served");

    Ok(Json(SearchView {
        from: query.from,
        to: query.to,
        date: query.date,
        passengers: query.passengers,
        sort: query.sort,
        sort_options: [SortKey::Departure, SortKey::Arrival, SortKey::Duration, SortKey::Price],
        count: trains.len(),
        trains,
    }))
}
