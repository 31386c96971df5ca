//! Shared test helpers for integration tests.
//!
//! Tests run against a live PostgreSQL pointed to by `TEST_DATABASE_URL`
//! and skip cleanly when it is unset. Every test registers its own hotel,
//! so tests are isolated by tenant and need no table cleanup.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use stayhub_core::config::app::ServerConfig;
use stayhub_core::config::booking::BookingConfig;
use stayhub_core::config::database::DatabaseConfig;
use stayhub_core::config::logging::LoggingConfig;
use stayhub_core::config::AppConfig;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a test application, or `None` when no test database is
    /// configured.
    pub async fn spawn() -> Option<Self> {
        let url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set; skipping integration test");
                return None;
            }
        };

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 60,
            },
            booking: BookingConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db_pool = stayhub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        stayhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let hotel_repo = Arc::new(stayhub_database::repositories::HotelRepository::new(
            db_pool.clone(),
        ));
        let guest_repo = Arc::new(stayhub_database::repositories::GuestRepository::new(
            db_pool.clone(),
        ));
        let room_repo = Arc::new(stayhub_database::repositories::RoomRepository::new(
            db_pool.clone(),
        ));
        let reservation_repo = Arc::new(
            stayhub_database::repositories::ReservationRepository::new(db_pool.clone()),
        );

        let state = stayhub_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            hotel_service: Arc::new(stayhub_service::hotel::HotelService::new(Arc::clone(
                &hotel_repo,
            ))),
            guest_service: Arc::new(stayhub_service::guest::GuestService::new(
                Arc::clone(&guest_repo),
                Arc::clone(&reservation_repo),
            )),
            room_service: Arc::new(stayhub_service::room::RoomService::new(
                Arc::clone(&room_repo),
                Arc::clone(&reservation_repo),
            )),
            reservation_service: Arc::new(stayhub_service::reservation::ReservationService::new(
                Arc::clone(&reservation_repo),
                Arc::clone(&room_repo),
                Arc::clone(&guest_repo),
            )),
            availability_service: Arc::new(stayhub_service::availability::AvailabilityService::new(
                Arc::clone(&reservation_repo),
                config.booking.room_policy,
            )),
        };

        Some(Self {
            router: stayhub_api::router::build_router(state),
            db_pool,
        })
    }

    /// Issue a JSON request and return status and parsed body.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response was not JSON")
        };

        (status, value)
    }

    /// Register a fresh hotel and return its id.
    pub async fn register_hotel(&self) -> Uuid {
        let (status, body) = self
            .request(
                "POST",
                "/api/hotels",
                Some(serde_json::json!({
                    "name": "Test Hotel",
                    "tax_id": random_digits(14),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "hotel registration failed: {body}");
        parse_id(&body["data"]["id"])
    }

    /// Register a guest and return its id.
    pub async fn create_guest(&self, hotel_id: Uuid) -> Uuid {
        let (status, body) = self
            .request(
                "POST",
                &format!("/api/hotels/{hotel_id}/guests"),
                Some(serde_json::json!({
                    "name": "Ana Souza",
                    "tax_id": random_digits(11),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "guest creation failed: {body}");
        parse_id(&body["data"]["id"])
    }

    /// Create a double room at the given nightly price and return its id.
    pub async fn create_room(&self, hotel_id: Uuid, number: &str, price: &str) -> Uuid {
        let (status, body) = self
            .request(
                "POST",
                &format!("/api/hotels/{hotel_id}/rooms"),
                Some(serde_json::json!({
                    "room_number": number,
                    "kind": "double",
                    "price": price,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "room creation failed: {body}");
        parse_id(&body["data"]["id"])
    }

    /// Create a reservation and return the response body.
    pub async fn create_reservation(
        &self,
        hotel_id: Uuid,
        guest_id: Uuid,
        room_id: Uuid,
        check_in: &str,
        check_out: &str,
    ) -> (StatusCode, Value) {
        self.request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations"),
            Some(serde_json::json!({
                "guest_id": guest_id,
                "room_id": room_id,
                "check_in": check_in,
                "check_out": check_out,
            })),
        )
        .await
    }
}

/// Parse a JSON string value as a UUID.
pub fn parse_id(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("Expected a UUID string")
}

/// Random numeric string of the given length, for unique tax ids.
pub fn random_digits(len: usize) -> String {
    let n = u128::from_le_bytes(*Uuid::new_v4().as_bytes());
    let digits = n.to_string();
    digits.chars().rev().take(len).collect()
}
