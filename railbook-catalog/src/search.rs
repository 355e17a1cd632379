use railbook_core::search::{SearchQuery, SortKey};
use railbook_core::Train;
use tracing::debug;

use crate::trains::trains;

/// Filters the catalog by route and orders it by the requested key.
/// Empty `from`/`to` fields match every train.
pub fn search_trains(query: &SearchQuery) -> Vec<Train> {
    let mut results: Vec<Train> = trains()
        .into_iter()
        .filter(|t| matches_city(&t.origin, &query.from) && matches_city(&t.destination, &query.to))
        .collect();

    sort_trains(&mut results, query.sort);

    debug!(
        from = %query.from,
        to = %query.to,
        sort = ?query.sort,
        results = results.len(),
        "Searched train catalog"
    );

    results
}

fn matches_city(city: &str, wanted: &str) -> bool {
    let wanted = wanted.trim();
    wanted.is_empty() || city.eq_ignore_ascii_case(wanted)
}

pub fn sort_trains(trains: &mut [Train], key: SortKey) {
    match key {
        SortKey::Departure => trains.sort_by(|a, b| a.departure_time.cmp(&b.departure_time)),
        SortKey::Arrival => trains.sort_by(|a, b| a.arrival_time.cmp(&b.arrival_time)),
        SortKey::Duration => trains.sort_by_key(|t| t.duration_minutes()),
        SortKey::Price => trains.sort_by_key(|t| t.price),
    }
}
