//! API integration tests
//!
//! These run against a live instance with the default dev configuration and
//! a seeded database containing user 1 (role BARBER) and user 2 (role
//! CLIENT) plus at least one service. Run with: cargo test -- --ignored

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use reqwest::Client;
use serde_json::{json, Value};

use figaro_server::models::{enums::Role, user::UserClaims};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const DEV_SECRET: &str = "change-this-secret-in-production";

const BARBER_ID: i32 = 1;
const CLIENT_ID: i32 = 2;

/// Mint a bearer token the way the identity provider would
fn token_for(user_id: i32, role: Role) -> String {
    let now = Utc::now().timestamp();
    let claims = UserClaims {
        sub: format!("user-{}", user_id),
        user_id,
        role,
        exp: now + 3600,
        iat: now,
    };
    claims.create_token(DEV_SECRET).expect("Failed to sign token")
}

/// First Monday strictly in the future
fn next_monday() -> NaiveDate {
    let mut date = Utc::now().date_naive() + Duration::days(1);
    while date.weekday() != Weekday::Mon {
        date += Duration::days(1);
    }
    date
}

/// Ensure the barber has a Monday 09:00-12:00 window, replacing any previous
/// Monday window so the scenario is repeatable
async fn ensure_monday_window(client: &Client, token: &str) {
    let windows: Value = client
        .get(format!("{}/barbers/availability", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list windows")
        .json()
        .await
        .expect("Failed to parse windows");

    for window in windows.as_array().expect("Expected window array") {
        if window["day_of_week"] == 1 {
            let id = window["id"].as_i64().expect("No window ID");
            client
                .delete(format!("{}/barbers/availability/{}", BASE_URL, id))
                .header("Authorization", format!("Bearer {}", token))
                .send()
                .await
                .expect("Failed to delete window");
        }
    }

    let response = client
        .post(format!("{}/barbers/availability", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "day_of_week": 1,
            "start_time": "09:00",
            "end_time": "12:00"
        }))
        .send()
        .await
        .expect("Failed to create window");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_services() {
    let client = Client::new();

    let response = client
        .get(format!("{}/services", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_list_barbers() {
    let client = Client::new();

    let response = client
        .get(format!("{}/barbers", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_booking_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "user_id": CLIENT_ID,
            "barber_id": BARBER_ID,
            "service_id": 1,
            "date": "2030-01-07T09:30:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_client_cannot_manage_availability() {
    let client = Client::new();
    let token = token_for(CLIENT_ID, Role::Client);

    let response = client
        .get(format!("{}/barbers/availability", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_past_booking_rejected() {
    let client = Client::new();
    let token = token_for(CLIENT_ID, Role::Client);

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "user_id": CLIENT_ID,
            "barber_id": BARBER_ID,
            "service_id": 1,
            "date": "2020-01-06T09:30:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_booking_scenario() {
    let client = Client::new();
    let barber_token = token_for(BARBER_ID, Role::Barber);
    let client_token = token_for(CLIENT_ID, Role::Client);

    ensure_monday_window(&client, &barber_token).await;

    let monday = next_monday();

    // Resolve free slots for the Monday window
    let slots_url = format!(
        "{}/barbers/{}/available?date={}",
        BASE_URL, BARBER_ID, monday
    );
    let body: Value = client
        .get(&slots_url)
        .send()
        .await
        .expect("Failed to resolve slots")
        .json()
        .await
        .expect("Failed to parse slots");

    let slots = body["slots"].as_array().expect("Expected slot array");
    assert!(!slots.is_empty(), "Window should expose free slots");

    let slot = slots[0].as_str().expect("Slot should be a string").to_string();
    let instant = format!("{}T{}:00Z", monday, slot);

    // Book the slot
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", client_token))
        .json(&json!({
            "user_id": CLIENT_ID,
            "barber_id": BARBER_ID,
            "service_id": 1,
            "date": instant
        }))
        .send()
        .await
        .expect("Failed to book");

    assert_eq!(response.status(), 201);
    let appointment: Value = response.json().await.expect("Failed to parse appointment");
    assert_eq!(appointment["status"], "SCHEDULED");
    let appointment_id = appointment["id"].as_i64().expect("No appointment ID");

    // The slot must be gone from re-resolution
    let body: Value = client
        .get(&slots_url)
        .send()
        .await
        .expect("Failed to re-resolve slots")
        .json()
        .await
        .expect("Failed to parse slots");
    let remaining = body["slots"].as_array().expect("Expected slot array");
    assert!(!remaining.iter().any(|s| s == slot.as_str()));

    // A second booking at the same instant loses deterministically
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", client_token))
        .json(&json!({
            "user_id": CLIENT_ID,
            "barber_id": BARBER_ID,
            "service_id": 1,
            "date": instant
        }))
        .send()
        .await
        .expect("Failed to send second booking");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse conflict");
    assert_eq!(body["error"], "SlotTaken");

    // Canceling frees the slot
    let response = client
        .delete(format!("{}/appointments/{}", BASE_URL, appointment_id))
        .header("Authorization", format!("Bearer {}", client_token))
        .send()
        .await
        .expect("Failed to cancel");

    assert!(response.status().is_success());
    let canceled: Value = response.json().await.expect("Failed to parse cancelation");
    assert_eq!(canceled["status"], "CANCELED");

    let body: Value = client
        .get(&slots_url)
        .send()
        .await
        .expect("Failed to resolve slots after cancel")
        .json()
        .await
        .expect("Failed to parse slots");
    let freed = body["slots"].as_array().expect("Expected slot array");
    assert!(freed.iter().any(|s| s == slot.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_booking_outside_window_rejected() {
    let client = Client::new();
    let barber_token = token_for(BARBER_ID, Role::Barber);
    let client_token = token_for(CLIENT_ID, Role::Client);

    ensure_monday_window(&client, &barber_token).await;

    let monday = next_monday();

    // 20:00 falls outside the 09:00-12:00 window
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .header("Authorization", format!("Bearer {}", client_token))
        .json(&json!({
            "user_id": CLIENT_ID,
            "barber_id": BARBER_ID,
            "service_id": 1,
            "date": format!("{}T20:00:00Z", monday)
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "OutsideAvailability");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_weekday_window_rejected() {
    let client = Client::new();
    let barber_token = token_for(BARBER_ID, Role::Barber);

    ensure_monday_window(&client, &barber_token).await;

    let response = client
        .post(format!("{}/barbers/availability", BASE_URL))
        .header("Authorization", format!("Bearer {}", barber_token))
        .json(&json!({
            "day_of_week": 1,
            "start_time": "14:00",
            "end_time": "18:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}
