use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use railbook_api::{app, app_config::Config, AppState};
use railbook_core::{NoDelay, TokioDelay};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(Config::default(), Arc::new(NoDelay)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn start_session(app: &Router, train_id: &str) -> String {
    let (status, body) = send(app, Method::GET, &format!("/booking?trainId={}", train_id), None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_landing_page() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nav"].as_array().unwrap().len(), 4);
    assert_eq!(body["popular_routes"].as_array().unwrap().len(), 6);
    assert_eq!(body["locations"][0], "Delhi");
}

#[tokio::test]
async fn test_location_suggestions() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/locations?q=pu", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"], json!(["Pune", "Jaipur"]));
}

#[tokio::test]
async fn test_search_form_redirects_to_results() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/search-form")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "from": "Delhi", "to": "Mumbai", "date": "2024-07-15", "passengers": 2 }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/search?from=Delhi&to=Mumbai&date=2024-07-15&passengers=2"
    );
}

#[tokio::test]
async fn test_search_form_requires_date() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/search-form",
        Some(json!({ "from": "Delhi", "to": "Mumbai", "date": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_sorted_by_price() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/search?from=Delhi&to=Mumbai&date=2024-07-15&passengers=2&sort=price",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
    assert_eq!(body["passengers"], 2);
    assert_eq!(body["trains"][0]["name"], "Garib Rath");
    assert_eq!(body["trains"][0]["booking_href"], "/booking?trainId=4");
}

#[tokio::test]
async fn test_search_rejects_too_many_passengers() {
    let app = test_app();
    let (status, _) = send(&app, Method::GET, "/search?passengers=9", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_unknown_train() {
    let app = test_app();
    let (status, _) = send(&app, Method::GET, "/booking?trainId=42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_defaults_to_first_train() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/booking", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["train"]["id"], "1");
    assert_eq!(body["subtitle"], "Rajdhani Express (12301) • Delhi to Mumbai");
    assert_eq!(body["current_step"], 1);
    assert_eq!(body["fare"]["total"], 1285);
}

#[tokio::test]
async fn test_incomplete_passenger_blocks_advance() {
    let app = test_app();
    let id = start_session(&app, "1").await;

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/advance", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notice"]["title"], "Incomplete passenger details");

    let (_, body) = send(&app, Method::GET, &format!("/booking/{}", id), None).await;
    assert_eq!(body["current_step"], 1);
}

#[tokio::test]
async fn test_passenger_limit_notice() {
    let app = test_app();
    let id = start_session(&app, "3").await;
    let uri = format!("/booking/{}/passengers", id);

    for _ in 0..5 {
        let (status, _) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notice"]["description"], "You can book up to 6 passengers only.");

    let (_, body) = send(&app, Method::GET, &format!("/booking/{}", id), None).await;
    assert_eq!(body["passengers"].as_array().unwrap().len(), 6);
    assert_eq!(body["can_add_passenger"], false);
    assert_eq!(body["fare"]["total"], 6 * 1190 + 6 * 30);
}

#[tokio::test]
async fn test_full_booking_flow() {
    let app = test_app();
    let id = start_session(&app, "1").await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/booking/{}/passengers/0", id),
        Some(json!({ "name": "Rahul Sharma", "age": "32", "gender": "Male" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/advance", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_step"], 2);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/booking/{}/contact", id),
        Some(json!({ "email": "a@b", "phone": "9876543210" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contact"]["email"], "a@b");

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/advance", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notice"]["title"], "Invalid email address");

    send(
        &app,
        Method::PATCH,
        &format!("/booking/{}/contact", id),
        Some(json!({ "email": "a@b.co" })),
    )
    .await;
    let (_, body) = send(&app, Method::POST, &format!("/booking/{}/advance", id), None).await;
    assert_eq!(body["current_step"], 3);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/booking/{}/payment-method", id),
        Some(json!({ "payment_method": "netbanking" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/pay", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_step"], 4);
    assert_eq!(body["title"], "Booking Confirmed");
    assert_eq!(body["confirmation"]["fare"]["total"], 1285);
    assert_eq!(body["confirmation"]["payment_method"], "netbanking");
    assert!(body["confirmation"]["booking_id"].as_str().unwrap().starts_with("RWHB"));

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/retreat", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notice"]["title"], "Booking already confirmed");
}

#[tokio::test]
async fn test_retreat_from_first_step_leaves_wizard() {
    let app = test_app();
    let id = start_session(&app, "1").await;

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/retreat", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["kind"], "leave_wizard");
    assert_eq!(body["redirect"], "/search");
}

#[tokio::test]
async fn test_closed_session_is_gone() {
    let app = test_app();
    let id = start_session(&app, "2").await;

    let (status, _) = send(&app, Method::DELETE, &format!("/booking/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/booking/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pay_before_payment_step() {
    let app = test_app();
    let id = start_session(&app, "1").await;

    let (status, body) = send(&app, Method::POST, &format!("/booking/{}/pay", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["notice"]["title"], "Action not available");
}

#[tokio::test]
async fn test_profile_dashboard() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/profile?tab=bookings", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_tab"], "bookings");
    assert_eq!(body["upcoming"].as_array().unwrap().len(), 2);
    assert_eq!(body["past"].as_array().unwrap().len(), 3);
    assert_eq!(body["stats"][1]["value"], "₹24580");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/timetable", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/timetable");
}

async fn reach_payment_step(app: &Router, id: &str) {
    send(
        app,
        Method::PATCH,
        &format!("/booking/{}/passengers/0", id),
        Some(json!({ "name": "Rahul Sharma", "age": "32", "gender": "Male" })),
    )
    .await;
    send(app, Method::POST, &format!("/booking/{}/advance", id), None).await;
    send(
        app,
        Method::PATCH,
        &format!("/booking/{}/contact", id),
        Some(json!({ "email": "rahul@example.com", "phone": "9876543210" })),
    )
    .await;
    let (_, body) = send(app, Method::POST, &format!("/booking/{}/advance", id), None).await;
    assert_eq!(body["current_step"], 3);
}

#[tokio::test]
async fn test_numeric_age_is_bad_request() {
    let app = test_app();
    let id = start_session(&app, "1").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/booking/{}/passengers/0", id),
        Some(json!({ "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_payment_method_is_bad_request() {
    let app = test_app();
    let id = start_session(&app, "1").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/booking/{}/payment-method", id),
        Some(json!({ "payment_method": "cash" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("cash"));

    let (_, body) = send(&app, Method::GET, &format!("/booking/{}", id), None).await;
    assert_eq!(body["payment_method"], "upi");
}

#[tokio::test]
async fn test_dropped_payment_request_still_settles() {
    let mut config = Config::default();
    config.simulation.payment_delay_ms = 100;
    let app = app(AppState::new(config, Arc::new(TokioDelay)));
    let id = start_session(&app, "1").await;
    reach_payment_step(&app, &id).await;

    // The client gives up before settlement finishes
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/booking/{}/pay", id))
        .body(Body::empty())
        .unwrap();
    let abandoned = tokio::time::timeout(Duration::from_millis(20), app.clone().oneshot(request)).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(400)).await;

    let (status, body) = send(&app, Method::GET, &format!("/booking/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["processing"], false);
    assert_eq!(body["current_step"], 4);
    assert!(body["confirmation"]["booking_id"].as_str().unwrap().starts_with("RWHB"));
}
