//! API integration tests
//!
//! These drive a running server. Start one with an in-repo database and
//! ADMIN_TOKEN=admin, then run: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const ADMIN_TOKEN: &str = "admin";

fn bearer() -> String {
    format!("Bearer {}", ADMIN_TOKEN)
}

/// Create a catalog entry and return its id
async fn create_test_equipment(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", bearer())
        .json(&json!({
            "name": "Test generator",
            "category": "power",
            "price_per_day": 1000.0,
            "price_tiers": {"1": 1000.0, "3": 800.0, "7": 600.0, "14": 500.0, "30": 400.0},
            "quantity_total": 2
        }))
        .send()
        .await
        .expect("Failed to create equipment");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("No id in response")
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
async fn test_equipment_list_is_public() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["data"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_admin_routes_require_token() {
    let client = Client::new();

    let response = client
        .get(format!("{}/rentals", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);

    let response = client
        .get(format!("{}/rentals", BASE_URL))
        .header("Authorization", "Bearer wrong-token")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_quote_resolves_tier_rate() {
    let client = Client::new();
    let equipment_id = create_test_equipment(&client).await;

    let response = client
        .get(format!(
            "{}/equipment/{}/quote?start_date=2025-03-10&end_date=2025-03-15",
            BASE_URL, equipment_id
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["duration_days"], 5);
    assert_eq!(body["data"]["daily_rate"], 800.0);
    assert_eq!(body["data"]["total_price"], 4000.0);
}

#[tokio::test]
#[ignore]
async fn test_booking_lifecycle_and_conflict() {
    let client = Client::new();
    let equipment_id = create_test_equipment(&client).await;

    // Public booking request
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "customer_name": "Ivan Ivanov",
            "customer_phone": "+70000000001",
            "start_date": "2025-03-10",
            "end_date": "2025-03-15"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["data"]["id"].as_i64().expect("No booking id");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["total_price"], 4000.0);

    // Confirm it
    let response = client
        .put(format!("{}/bookings/{}/status", BASE_URL, booking_id))
        .header("Authorization", bearer())
        .json(&json!({"status": "confirmed"}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    // Overlapping request for the same equipment is rejected
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "customer_name": "Petr Petrov",
            "customer_phone": "+70000000002",
            "start_date": "2025-03-14",
            "end_date": "2025-03-20"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    // Disjoint request goes through
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "customer_name": "Petr Petrov",
            "customer_phone": "+70000000002",
            "start_date": "2025-03-16",
            "end_date": "2025-03-20"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_bad_date_ranges() {
    let client = Client::new();
    let equipment_id = create_test_equipment(&client).await;

    for (start, end) in [("2025-03-10", "2025-03-10"), ("2025-03-15", "2025-03-10")] {
        let response = client
            .post(format!("{}/bookings", BASE_URL))
            .json(&json!({
                "equipment_id": equipment_id,
                "customer_name": "Ivan Ivanov",
                "customer_phone": "+70000000001",
                "start_date": start,
                "end_date": end
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "range {}..{} accepted", start, end);
    }
}

#[tokio::test]
#[ignore]
async fn test_rental_instance_replacement() {
    let client = Client::new();
    let equipment_id = create_test_equipment(&client).await;

    // Rental with two physical units of the same catalog item
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .header("Authorization", bearer())
        .json(&json!({
            "equipment_id": equipment_id,
            "customer_name": "Ivan Ivanov",
            "customer_phone": "+70000000001",
            "start_date": "2025-04-01",
            "end_date": "2025-04-05",
            "rental_price": 5000.0,
            "equipment_instances": [
                {"equipment_id": equipment_id, "instance_number": 1},
                {"equipment_id": equipment_id, "instance_number": 2}
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let rental_id = body["data"]["id"].as_i64().expect("No rental id");
    assert_eq!(body["data"]["equipment_instances"].as_array().unwrap().len(), 2);

    // Empty list clears the whole association set
    let response = client
        .put(format!("{}/rentals/{}", BASE_URL, rental_id))
        .header("Authorization", bearer())
        .json(&json!({"equipment_instances": []}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["equipment_instances"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_rental_reports_both_statuses() {
    let client = Client::new();
    let equipment_id = create_test_equipment(&client).await;

    // Window far in the past: stored pending, displayed overdue
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .header("Authorization", bearer())
        .json(&json!({
            "equipment_id": equipment_id,
            "customer_name": "Ivan Ivanov",
            "customer_phone": "+70000000001",
            "start_date": "2020-01-01",
            "end_date": "2020-01-05",
            "rental_price": 1000.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["stored_status"], "pending");
    assert_eq!(body["data"]["status"], "overdue");
}

#[tokio::test]
#[ignore]
async fn test_contact_form_is_accepted() {
    let client = Client::new();

    let response = client
        .post(format!("{}/contact", BASE_URL))
        .json(&json!({
            "name": "Ivan",
            "phone": "+70000000001",
            "message": "Do you rent concrete mixers?"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 202);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["received"], true);
}

#[tokio::test]
#[ignore]
async fn test_stats_overview_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .header("Authorization", bearer())
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["equipment_count"].is_i64());
    assert!(body["data"]["active_rentals"].is_i64());
    assert!(body["data"]["month_revenue"].is_number());
}
