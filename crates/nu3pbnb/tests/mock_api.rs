//! Mock API tests for the nu3pbnb client.
//!
//! These tests use wiremock to simulate the nu3PBnB server and verify the
//! client's wire behavior without network access or real credentials.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nu3pbnb::types::{BookingStatus, NewBooking, NewMessage, NewReview, NewUser, PaymentMethod,
    PaymentRequest, ReviewUpdate};
use nu3pbnb::{ApiClient, ApiUrl, Credentials, Params, Session};

const API_KEY: &str = "test_api_key_456";

/// Build a client pointed at a mock server, with a fresh session.
fn client(server: &MockServer) -> (ApiClient, Session) {
    let base = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    let session = Session::new();
    (
        ApiClient::new(base, API_KEY.into(), session.clone()),
        session,
    )
}

fn user_json() -> serde_json::Value {
    json!({
        "_id": "665f1c2e9b1d2a0012345678",
        "name": "Test User",
        "email": "testuser@example.com",
        "role": "guest",
        "themePreference": "light"
    })
}

fn listing_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": "Cozy Flat",
        "description": "A cozy flat in the centre",
        "location": "Paris",
        "city": "Paris",
        "country": "France",
        "price": 120.0,
        "type": "apartment",
        "host": "665f1c2e9b1d2a0012345678"
    })
}

fn booking_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "guest": "665f1c2e9b1d2a0012345678",
        "host": "665f1c2e9b1d2a0087654321",
        "listing": "l1",
        "startDate": "2024-02-15T00:00:00.000Z",
        "endDate": "2024-02-20T00:00:00.000Z",
        "guests": 2,
        "totalPrice": 750,
        "status": status
    })
}

fn review_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "listing": "l1",
        "user": "665f1c2e9b1d2a0012345678",
        "rating": 5,
        "comment": "Great stay"
    })
}

fn message_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "sender": "665f1c2e9b1d2a0012345678",
        "recipient": "665f1c2e9b1d2a0087654321",
        "content": "Is the flat available?",
        "read": false
    })
}

fn payment_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "booking": "b1",
        "user": "665f1c2e9b1d2a0012345678",
        "amount": 750,
        "currency": "USD",
        "paymentMethod": "credit_card",
        "paymentStatus": "completed",
        "transactionId": "TXN_1700000000_abc123xyz"
    })
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn login_stores_token_and_authenticates_later_requests() {
    let server = MockServer::start().await;
    let (client, session) = client(&server);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "testuser@example.com",
            "password": "password123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "token": "test-session-token",
            "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer test-session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .login(&Credentials::new("testuser@example.com", "password123"))
        .await
        .unwrap();
    assert!(response.token.is_some());
    assert!(session.is_authenticated());

    let user = client.get_profile().await.unwrap();
    assert_eq!(user.email, "testuser@example.com");
}

#[tokio::test]
async fn register_stores_token_from_response() {
    let server = MockServer::start().await;
    let (client, session) = client(&server);

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "User created",
            "token": "fresh-token",
            "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let new_user = NewUser {
        name: "Test User".to_string(),
        email: "testuser@example.com".to_string(),
        password: "password123".to_string(),
        role: None,
    };
    client.register(&new_user).await.unwrap();

    assert_eq!(session.token().unwrap().as_str(), "fresh-token");
}

#[tokio::test]
async fn auth_response_without_token_leaves_session_unauthenticated() {
    let server = MockServer::start().await;
    let (client, session) = client(&server);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "user": user_json()
        })))
        .mount(&server)
        .await;

    client
        .login(&Credentials::new("testuser@example.com", "password123"))
        .await
        .unwrap();

    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn requests_before_login_carry_no_authorization_header() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings"))
        .and(header("x-api-key", API_KEY))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "listings": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client.get_listings(&Params::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn clear_token_stops_sending_authorization_header() {
    let server = MockServer::start().await;
    let (client, session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "listings": [] })))
        .mount(&server)
        .await;

    session.set_token(nu3pbnb::SessionToken::new("stale-token"));
    client.get_listings(&Params::new()).await.unwrap();

    session.clear_token();
    client.get_listings(&Params::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.contains_key("authorization"));
    assert!(!requests[1].headers.contains_key("authorization"));
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn get_listings_renders_limit_param() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "listings": [listing_json("l1")],
            "pagination": {
                "current": 1,
                "total": 1,
                "totalItems": 1,
                "hasNext": false,
                "hasPrev": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .get_listings(&Params::new().set("limit", 5))
        .await
        .unwrap();
    assert_eq!(page.listings.len(), 1);
    assert_eq!(page.pagination.unwrap().total_items, Some(1));
}

#[tokio::test]
async fn listing_crud_hits_expected_paths_and_verbs() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings/l1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "listing": listing_json("l1") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/listings"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Listing created successfully",
            "listing": listing_json("l2")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/listings/l2"))
        .and(body_json(json!({ "price": 99.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Listing updated successfully",
            "listing": listing_json("l2")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/listings/l2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Listing deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let listing = client.get_listing("l1").await.unwrap();
    assert_eq!(listing.id, "l1");

    let created = client
        .create_listing(&nu3pbnb::types::NewListing {
            title: "Cozy Flat".to_string(),
            description: "A cozy flat in the centre".to_string(),
            location: "Paris".to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            price: 120.0,
            property_type: "apartment".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            photos: Vec::new(),
            amenities: Vec::new(),
            max_guests: Some(2),
            bedrooms: None,
            bathrooms: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "l2");

    client
        .update_listing(
            "l2",
            &nu3pbnb::types::ListingUpdate {
                price: Some(99.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    client.delete_listing("l2").await.unwrap();
}

#[tokio::test]
async fn search_and_popular_listings() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings/search"))
        .and(query_param("location", "Paris"))
        .and(query_param("maxPrice", "200"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "listings": [listing_json("l1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/listings/popular"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "listings": [listing_json("l1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client
        .search_listings(&Params::new().set("location", "Paris").set("maxPrice", 200))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);

    let popular = client.get_popular_listings().await.unwrap();
    assert_eq!(popular[0].title, "Cozy Flat");
}

// ============================================================================
// Bookings
// ============================================================================

#[tokio::test]
async fn booking_lifecycle_paths_and_verbs() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "bookings": [booking_json("b1", "pending")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_json(json!({
            "listingId": "l1",
            "checkIn": "2024-02-15",
            "checkOut": "2024-02-20",
            "guests": 2,
            "totalPrice": 750.0,
            "message": "Looking forward to our stay!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Booking created",
            "booking": booking_json("b1", "pending")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/bookings/b1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Booking deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bookings = client.get_bookings(&Params::new()).await.unwrap();
    assert_eq!(bookings.len(), 1);

    let booking = client
        .create_booking(&NewBooking {
            listing_id: "l1".to_string(),
            check_in: chrono::NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            check_out: chrono::NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            guests: 2,
            total_price: 750.0,
            message: Some("Looking forward to our stay!".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    client.cancel_booking("b1").await.unwrap();
}

#[tokio::test]
async fn update_booking_sends_exactly_the_status_field() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("PUT"))
        .and(path("/bookings/b1"))
        .and(body_json(json!({ "status": "approved" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Booking updated",
            "booking": booking_json("b1", "approved")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let booking = client
        .update_booking("b1", BookingStatus::Approved)
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Approved);
}

// ============================================================================
// Reviews
// ============================================================================

#[tokio::test]
async fn review_operations_hit_expected_paths() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/reviews/listing/l1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "reviews": [review_json("r1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/reviews"))
        .and(body_json(json!({
            "listingId": "l1",
            "rating": 5,
            "comment": "Great stay"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Review created successfully",
            "review": review_json("r1")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/reviews/r1"))
        .and(body_json(json!({ "rating": 4 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Review updated successfully",
            "review": review_json("r1")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/reviews/r1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Review deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reviews = client.get_listing_reviews("l1").await.unwrap();
    assert_eq!(reviews[0].rating, 5);

    client
        .create_review(&NewReview {
            listing_id: "l1".to_string(),
            rating: 5,
            comment: "Great stay".to_string(),
        })
        .await
        .unwrap();

    client
        .update_review(
            "r1",
            &ReviewUpdate {
                rating: Some(4),
                comment: None,
            },
        )
        .await
        .unwrap();

    client.delete_review("r1").await.unwrap();
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn message_operations_hit_expected_paths() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "messages": [message_json("m1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({
            "recipientId": "665f1c2e9b1d2a0087654321",
            "listingId": "l1",
            "content": "Is the flat available?"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Message sent successfully",
            "messageData": message_json("m2")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/messages/m1/read"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Message marked as read" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let messages = client.get_messages().await.unwrap();
    assert!(!messages[0].read);

    let sent = client
        .send_message(&NewMessage {
            recipient_id: "665f1c2e9b1d2a0087654321".to_string(),
            listing_id: Some("l1".to_string()),
            content: "Is the flat available?".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(sent.id, "m2");

    client.mark_message_read("m1").await.unwrap();
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn payment_operations_hit_expected_paths() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/payments/methods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paymentMethods": [],
            "supportedMethods": ["card", "paypal"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/payments/process"))
        .and(body_json(json!({
            "bookingId": "b1",
            "paymentMethod": "credit_card"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Payment processed",
            "payment": payment_json("p1")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/payments/history"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "payments": [payment_json("p1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let methods = client.get_payment_methods().await.unwrap();
    assert_eq!(methods.supported_methods, vec!["card", "paypal"]);

    let payment = client
        .process_payment(&PaymentRequest {
            booking_id: "b1".to_string(),
            payment_method: PaymentMethod::CreditCard,
        })
        .await
        .unwrap();
    assert_eq!(payment.amount, 750.0);

    let history = client.get_payment_history().await.unwrap();
    assert_eq!(history.len(), 1);
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn non_success_status_surfaces_api_rejection_with_body() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Listing not found",
            "message": "No listing with that id"
        })))
        .mount(&server)
        .await;

    let err = client.get_listing("missing").await.unwrap_err();
    match err {
        nu3pbnb::Error::Api(rejection) => {
            assert_eq!(rejection.status, 404);
            assert_eq!(rejection.error.as_deref(), Some("Listing not found"));
            assert!(rejection.body.contains("No listing with that id"));
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_error_body_is_preserved_raw() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let err = client.get_messages().await.unwrap_err();
    match err {
        nu3pbnb::Error::Api(rejection) => {
            assert_eq!(rejection.status, 500);
            assert!(rejection.error.is_none());
            assert_eq!(rejection.body, "Internal Server Error");
        }
        other => panic!("expected Error::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_rejected() {
    let server = MockServer::start().await;
    let (client, _session) = client(&server);

    Mock::given(method("GET"))
        .and(path("/listings/l1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("not json")
                .insert_header("content-type", "application/json"),
        )
        .mount(&server)
        .await;

    let err = client.get_listing("l1").await.unwrap_err();
    assert!(matches!(
        err,
        nu3pbnb::Error::MalformedResponse { status: 200, .. }
    ));
}
