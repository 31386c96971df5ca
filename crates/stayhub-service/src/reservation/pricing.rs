//! Stay price calculation.

use rust_decimal::Decimal;

use stayhub_entity::reservation::{Reservation, ReservationStatus};
use stayhub_entity::room::Room;

const SECONDS_PER_NIGHT: i64 = 24 * 3600;

/// Number of billable nights for a stay: elapsed seconds divided by 24 h,
/// rounded up. Any positive sub-day stay counts as one night; non-positive
/// windows yield zero.
pub fn billable_nights(reservation: &Reservation) -> i64 {
    let seconds = (reservation.check_out - reservation.check_in).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds as u64).div_ceil(SECONDS_PER_NIGHT as u64) as i64
}

/// Total price of a stay: billable nights times the room's nightly price.
/// Canceled reservations always price at zero.
pub fn quote_total(reservation: &Reservation, room: &Room) -> Decimal {
    if reservation.status == ReservationStatus::Canceled {
        return Decimal::ZERO;
    }
    Decimal::from(billable_nights(reservation)) * room.price
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use stayhub_entity::room::{RoomKind, RoomStatus};
    use uuid::Uuid;

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
    }

    fn room_priced(price: Decimal) -> Room {
        Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_number: "201".to_string(),
            kind: RoomKind::Single,
            capacity_adults: 1,
            capacity_children: 0,
            capacity_total: 1,
            price,
            status: RoomStatus::Available,
            comments: None,
            is_active: true,
            created_at: ts(1, 0),
            updated_at: ts(1, 0),
        }
    }

    fn stay(status: ReservationStatus, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            guest_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            check_in,
            check_out,
            status,
            created_at: ts(1, 0),
            updated_at: ts(1, 0),
        }
    }

    #[test]
    fn twenty_five_hours_bills_two_nights() {
        let res = stay(ReservationStatus::Booked, ts(1, 10), ts(2, 11));
        let room = room_priced(Decimal::new(10_000, 2)); // 100.00

        assert_eq!(billable_nights(&res), 2);
        assert_eq!(quote_total(&res, &room), Decimal::new(20_000, 2));
    }

    #[test]
    fn overnight_stay_bills_one_night() {
        // 2025-01-01T14:00 -> 2025-01-02T11:00 at 150.00/night
        let res = stay(ReservationStatus::Booked, ts(1, 14), ts(2, 11));
        let room = room_priced(Decimal::new(15_000, 2));

        assert_eq!(billable_nights(&res), 1);
        assert_eq!(quote_total(&res, &room), Decimal::new(15_000, 2));
    }

    #[test]
    fn sub_day_stay_rounds_up_to_one_night() {
        let res = stay(ReservationStatus::CheckedIn, ts(1, 14), ts(1, 18));
        let room = room_priced(Decimal::new(9_900, 2));

        assert_eq!(billable_nights(&res), 1);
        assert_eq!(quote_total(&res, &room), Decimal::new(9_900, 2));
    }

    #[test]
    fn exact_multiple_of_a_day_does_not_round_up() {
        let res = stay(ReservationStatus::Booked, ts(1, 14), ts(3, 14));
        let room = room_priced(Decimal::new(10_000, 2));

        assert_eq!(billable_nights(&res), 2);
    }

    #[test]
    fn canceled_reservation_prices_at_zero() {
        let res = stay(ReservationStatus::Canceled, ts(1, 14), ts(2, 11));
        let room = room_priced(Decimal::new(15_000, 2));

        assert_eq!(quote_total(&res, &room), Decimal::ZERO);
    }

    #[test]
    fn non_positive_window_prices_at_zero() {
        // A cancellation stamped before the planned check-in leaves
        // check_out <= check_in on the historical row.
        let res = stay(ReservationStatus::CheckedOut, ts(2, 11), ts(2, 11));
        let room = room_priced(Decimal::new(15_000, 2));

        assert_eq!(billable_nights(&res), 0);
        assert_eq!(quote_total(&res, &room), Decimal::ZERO);
    }

    mod properties {
        use super::*;
        use chrono::Duration;
        use proptest::prelude::*;

        proptest! {
            /// Any positive stay bills at least one night, and the night
            /// count is the ceiling of the elapsed time in days.
            #[test]
            fn nights_are_ceiling_of_elapsed_days(duration_secs in 1i64..(30 * 24 * 3600)) {
                let check_in = ts(1, 12);
                let res = stay(
                    ReservationStatus::Booked,
                    check_in,
                    check_in + Duration::seconds(duration_secs),
                );

                let nights = billable_nights(&res);
                prop_assert!(nights >= 1);
                prop_assert!((nights - 1) * SECONDS_PER_NIGHT < duration_secs);
                prop_assert!(duration_secs <= nights * SECONDS_PER_NIGHT);
            }

            /// The total is always nights times the nightly price for
            /// non-canceled stays.
            #[test]
            fn total_is_nights_times_price(duration_secs in 1i64..(30 * 24 * 3600), cents in 0i64..1_000_00) {
                let check_in = ts(1, 12);
                let res = stay(
                    ReservationStatus::CheckedIn,
                    check_in,
                    check_in + Duration::seconds(duration_secs),
                );
                let room = room_priced(Decimal::new(cents, 2));

                prop_assert_eq!(
                    quote_total(&res, &room),
                    Decimal::from(billable_nights(&res)) * room.price
                );
            }
        }
    }
}
