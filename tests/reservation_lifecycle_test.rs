//! End-to-end reservation lifecycle tests.

mod common;

use http::StatusCode;
use rust_decimal::Decimal;

use common::TestApp;

#[tokio::test]
async fn future_reservation_is_booked_and_advances_through_lifecycle() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let hotel_id = app.register_hotel().await;
    let guest_id = app.create_guest(hotel_id).await;
    let room_id = app.create_room(hotel_id, "101", "150.00").await;

    let (status, body) = app
        .create_reservation(
            hotel_id,
            guest_id,
            room_id,
            "2030-01-01T14:00:00Z",
            "2030-01-02T11:00:00Z",
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["status"], "booked");
    let reservation_id = common::parse_id(&body["data"]["id"]);

    // Advance: booked -> checked_in, room becomes occupied.
    let (status, body) = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/advance"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["step"], "checked_in");
    assert_eq!(body["data"]["reservation"]["status"], "checked_in");

    let (_, body) = app
        .request("GET", &format!("/api/hotels/{hotel_id}/rooms/{room_id}"), None)
        .await;
    assert_eq!(body["data"]["status"], "occupied");

    // Advance: checked_in -> checked_out, room freed.
    let (status, body) = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/advance"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["step"], "checked_out");

    let (_, body) = app
        .request("GET", &format!("/api/hotels/{hotel_id}/rooms/{room_id}"), None)
        .await;
    assert_eq!(body["data"]["status"], "available");

    // A closed reservation cannot advance again.
    let (status, body) = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/advance"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["error"], "CANNOT_MODIFY");

    // Nor be canceled: it is already closed, and nothing changes.
    let (status, body) = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/cancel"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["error"], "ALREADY_CLOSED");

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}"),
            None,
        )
        .await;
    assert_eq!(body["data"]["status"], "checked_out");
}

#[tokio::test]
async fn immediate_check_in_occupies_the_room() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let hotel_id = app.register_hotel().await;
    let guest_id = app.create_guest(hotel_id).await;
    let room_id = app.create_room(hotel_id, "102", "99.00").await;

    // Check-in in the past, check-out in the future: the stay starts now.
    let check_in = (chrono::Utc::now() - chrono::Duration::hours(1))
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let check_out = (chrono::Utc::now() + chrono::Duration::days(1))
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    let (status, body) = app
        .create_reservation(hotel_id, guest_id, room_id, &check_in, &check_out)
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["status"], "checked_in");

    let (_, body) = app
        .request("GET", &format!("/api/hotels/{hotel_id}/rooms/{room_id}"), None)
        .await;
    assert_eq!(body["data"]["status"], "occupied");
}

#[tokio::test]
async fn invalid_windows_are_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let hotel_id = app.register_hotel().await;
    let guest_id = app.create_guest(hotel_id).await;
    let room_id = app.create_room(hotel_id, "103", "80.00").await;

    // check_out before check_in
    let (status, body) = app
        .create_reservation(
            hotel_id,
            guest_id,
            room_id,
            "2030-01-02T11:00:00Z",
            "2030-01-01T14:00:00Z",
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    assert_eq!(body["error"], "INVALID_DATE_RANGE");

    // check_out entirely in the past
    let (status, body) = app
        .create_reservation(
            hotel_id,
            guest_id,
            room_id,
            "2020-01-01T14:00:00Z",
            "2020-01-02T11:00:00Z",
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    assert_eq!(body["error"], "PAST_CHECKOUT");
}

#[tokio::test]
async fn double_booking_is_rejected_at_create() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let hotel_id = app.register_hotel().await;
    let guest_a = app.create_guest(hotel_id).await;
    let guest_b = app.create_guest(hotel_id).await;
    let room_id = app.create_room(hotel_id, "104", "120.00").await;

    let (status, _) = app
        .create_reservation(
            hotel_id,
            guest_a,
            room_id,
            "2030-03-11T14:00:00Z",
            "2030-03-13T11:00:00Z",
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Overlapping window on the same room is a conflict.
    let (status, body) = app
        .create_reservation(
            hotel_id,
            guest_b,
            room_id,
            "2030-03-10T14:00:00Z",
            "2030-03-12T11:00:00Z",
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["error"], "CONFLICT");

    // A back-to-back window starting at the existing check-out is fine.
    let (status, body) = app
        .create_reservation(
            hotel_id,
            guest_b,
            room_id,
            "2030-03-13T11:00:00Z",
            "2030-03-14T11:00:00Z",
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
}

#[tokio::test]
async fn canceling_a_booked_reservation_is_terminal() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let hotel_id = app.register_hotel().await;
    let guest_id = app.create_guest(hotel_id).await;
    let room_id = app.create_room(hotel_id, "105", "120.00").await;

    let (_, body) = app
        .create_reservation(
            hotel_id,
            guest_id,
            room_id,
            "2030-05-01T14:00:00Z",
            "2030-05-03T11:00:00Z",
        )
        .await;
    let reservation_id = common::parse_id(&body["data"]["id"]);

    let (status, body) = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/cancel"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["status"], "canceled");

    // Canceling again reports the distinct already-canceled error.
    let (status, body) = app
        .request(
            "POST",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/cancel"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["error"], "ALREADY_CANCELED");

    // A canceled reservation prices at zero.
    let (_, body) = app
        .request(
            "GET",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/price"),
            None,
        )
        .await;
    let total: Decimal = body["data"]["total"]
        .as_str()
        .expect("total should be a decimal string")
        .parse()
        .unwrap();
    assert_eq!(total, Decimal::ZERO);
}

#[tokio::test]
async fn price_rounds_partial_days_up() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let hotel_id = app.register_hotel().await;
    let guest_id = app.create_guest(hotel_id).await;
    let room_id = app.create_room(hotel_id, "106", "100.00").await;

    // 25 hours -> 2 nights at 100.00.
    let (_, body) = app
        .create_reservation(
            hotel_id,
            guest_id,
            room_id,
            "2030-01-01T10:00:00Z",
            "2030-01-02T11:00:00Z",
        )
        .await;
    let reservation_id = common::parse_id(&body["data"]["id"]);

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/hotels/{hotel_id}/reservations/{reservation_id}/price"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["nights"], 2);
    let total: Decimal = body["data"]["total"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, Decimal::new(20_000, 2));
}
