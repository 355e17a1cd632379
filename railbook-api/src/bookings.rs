use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use railbook_booking::{
    generate_booking_id, BookingSession, Confirmation, ContactUpdate, PassengerUpdate, Retreat,
};
use railbook_catalog::{require_train, FareBreakdown};
use railbook_core::{ContactInfo, FareClass, Passenger, PaymentMethod, PaymentStatus, Train, MAX_PASSENGERS};
use railbook_shared::Rupees;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::{
    error::{AppError, AppJson},
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartBookingQuery {
    #[serde(rename = "trainId")]
    pub train_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectFareClassRequest {
    pub fare_class: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectPaymentMethodRequest {
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Serialize)]
pub struct PaymentOption {
    pub id: PaymentMethod,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BookingView {
    pub session_id: Uuid,
    pub title: &'static str,
    pub subtitle: String,
    pub current_step: u8,
    pub steps: [&'static str; 3],
    pub progress_percent: u8,
    pub train: Train,
    pub fare_class: FareClass,
    pub passengers: Vec<Passenger>,
    pub can_add_passenger: bool,
    pub can_remove_passenger: bool,
    pub contact: ContactInfo,
    pub payment_method: PaymentMethod,
    pub payment_options: Vec<PaymentOption>,
    pub fare: FareBreakdown,
    pub processing: bool,
    pub confirmation: Option<Confirmation>,
}

impl From<&BookingSession> for BookingView {
    fn from(session: &BookingSession) -> Self {
        let confirmed = session.confirmation.is_some();
        Self {
            session_id: session.id,
            title: if confirmed { "Booking Confirmed" } else { "Book Your Train Ticket" },
            subtitle: format!(
                "{} ({}) • {} to {}",
                session.train.name, session.train.number, session.train.origin, session.train.destination
            ),
            current_step: session.current_step(),
            steps: ["Passenger Details", "Contact Information", "Payment"],
            progress_percent: session.progress_percent(),
            train: session.train.clone(),
            fare_class: session.fare_class.clone(),
            passengers: session.passengers.clone(),
            can_add_passenger: !confirmed && session.passengers.len() < MAX_PASSENGERS,
            can_remove_passenger: !confirmed && session.passengers.len() > 1,
            contact: session.contact.clone(),
            payment_method: session.payment_method,
            payment_options: PaymentMethod::ALL
                .into_iter()
                .map(|m| PaymentOption { id: m, label: m.label(), description: m.description() })
                .collect(),
            fare: session.fare(),
            processing: session.processing,
            confirmation: session.confirmation.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RetreatResponse {
    pub outcome: Retreat,
    /// Where the client should go when leaving the wizard
    pub redirect: Option<&'static str>,
    pub booking: BookingView,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/booking", get(start_booking))
        .route("/booking/{session_id}", get(get_booking).delete(close_booking))
        .route("/booking/{session_id}/passengers", post(add_passenger))
        .route(
            "/booking/{session_id}/passengers/{index}",
            delete(remove_passenger).patch(update_passenger),
        )
        .route("/booking/{session_id}/contact", patch(update_contact))
        .route("/booking/{session_id}/fare-class", put(select_fare_class))
        .route("/booking/{session_id}/payment-method", put(select_payment_method))
        .route("/booking/{session_id}/advance", post(advance))
        .route("/booking/{session_id}/retreat", post(retreat))
        .route("/booking/{session_id}/pay", post(pay))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFoundError(format!("Booking session not found: {}", id))
}

/// Apply `action` to the session and render the resulting view
async fn with_session<F>(state: &AppState, id: Uuid, action: F) -> Result<Json<BookingView>, AppError>
where
    F: FnOnce(&mut BookingSession) -> Result<(), AppError>,
{
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    action(session)?;
    Ok(Json(BookingView::from(&*session)))
}

/// GET /booking?trainId=
/// Opens a wizard session for the chosen train
async fn start_booking(
    State(state): State<AppState>,
    Query(query): Query<StartBookingQuery>,
) -> Result<(StatusCode, Json<BookingView>), AppError> {
    let train_id = query.train_id.unwrap_or_else(|| "1".to_string());
    let train = require_train(&train_id)?;

    let mut sessions = state.sessions.write().await;
    let session = sessions.open(train);
    Ok((StatusCode::CREATED, Json(BookingView::from(session))))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&session_id).ok_or_else(|| session_not_found(session_id))?;
    Ok(Json(BookingView::from(session)))
}

/// DELETE /booking/:id
/// The user navigated away; the session is discarded
async fn close_booking(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .write()
        .await
        .close(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_passenger(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| {
        s.add_passenger()?;
        Ok(())
    })
    .await
}

async fn remove_passenger(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| {
        s.remove_passenger(index)?;
        Ok(())
    })
    .await
}

async fn update_passenger(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
    AppJson(update): AppJson<PassengerUpdate>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| {
        s.update_passenger(index, update)?;
        Ok(())
    })
    .await
}

async fn update_contact(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(update): AppJson<ContactUpdate>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| {
        s.update_contact(update)?;
        Ok(())
    })
    .await
}

async fn select_fare_class(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(req): AppJson<SelectFareClassRequest>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| Ok(s.select_fare_class(&req.fare_class)?)).await
}

async fn select_payment_method(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(req): AppJson<SelectPaymentMethodRequest>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| Ok(s.select_payment_method(req.payment_method)?)).await
}

async fn advance(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    with_session(&state, session_id, |s| {
        s.advance()?;
        Ok(())
    })
    .await
}

async fn retreat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RetreatResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&session_id).ok_or_else(|| session_not_found(session_id))?;
    let outcome = session.retreat()?;

    Ok(Json(RetreatResponse {
        outcome,
        redirect: matches!(outcome, Retreat::LeaveWizard).then_some("/search"),
        booking: BookingView::from(&*session),
    }))
}

/// POST /booking/:id/pay
/// Settles through the configured gateway, then confirms the booking.
/// Settlement runs on its own task so a client that disconnects mid-payment
/// cannot leave the session stuck in `processing`.
async fn pay(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<BookingView>, AppError> {
    // 1. Mark as processing; the lock is released before settling
    let (amount, method) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_mut(&session_id).ok_or_else(|| session_not_found(session_id))?;
        let amount = session.begin_payment()?;
        (amount, session.payment_method)
    };

    let settlement = tokio::spawn(settle_and_confirm(state, session_id, amount, method));
    let view = settlement
        .await
        .map_err(|e| AppError::InternalServerError(format!("Settlement task failed: {}", e)))??;

    Ok(Json(view))
}

async fn settle_and_confirm(
    state: AppState,
    session_id: Uuid,
    amount: Rupees,
    method: PaymentMethod,
) -> Result<BookingView, AppError> {
    // 2. Simulated settlement
    let settled = state.payments.settle(amount, method).await;
    let booking_id = generate_booking_id(&mut rand::thread_rng());

    // 3. Confirm, unless the session was discarded meanwhile
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&session_id).ok_or_else(|| session_not_found(session_id))?;
    match settled {
        Ok(PaymentStatus::Succeeded) => {
            session.complete_payment(booking_id)?;
        }
        Ok(PaymentStatus::Processing) => {
            session.abort_payment();
            return Err(AppError::InternalServerError("Settlement did not complete".to_string()));
        }
        Err(e) => {
            session.abort_payment();
            return Err(e.into());
        }
    }

    Ok(BookingView::from(&*session))
}
