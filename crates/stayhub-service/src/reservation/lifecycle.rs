//! The reservation lifecycle state machine.
//!
//! Pure transition functions over a `(Reservation, Room)` pair. They take
//! `now` as a parameter and never touch the database; the service layer
//! loads both rows under lock, applies one of these functions, and
//! persists the result in the same transaction. Guard failures are
//! terminal for the call and leave both values untouched.

use chrono::{DateTime, Duration, Utc};

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_entity::reservation::{Reservation, ReservationStatus};
use stayhub_entity::room::{Room, RoomStatus};

/// The single forward step applied by [`apply_advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceStep {
    /// `booked` became `checked_in`.
    CheckedIn {
        /// The stored check-out was in the past and was pushed to
        /// `now + 1 day`.
        checkout_adjusted: bool,
    },
    /// `checked_in` became `checked_out`.
    CheckedOut,
}

/// Validate a requested stay window against `now`.
pub fn validate_window(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if check_out <= check_in {
        return Err(AppError::invalid_date_range(
            "check-out must be after check-in",
        ));
    }
    if check_out < now {
        return Err(AppError::past_checkout(
            "check-out cannot be in the past",
        ));
    }
    Ok(())
}

/// Initial status for a new reservation: future check-ins are booked,
/// past-or-present check-ins start the stay immediately.
pub fn status_on_create(check_in: DateTime<Utc>, now: DateTime<Utc>) -> ReservationStatus {
    if check_in > now {
        ReservationStatus::Booked
    } else {
        ReservationStatus::CheckedIn
    }
}

/// Check a booked reservation in.
///
/// Requires the room to be available. Stamps the actual check-in time and,
/// when the stored check-out has already passed, pushes it to `now + 1 day`
/// and reports the adjustment so the caller can surface it.
pub fn apply_check_in(
    reservation: &mut Reservation,
    room: &mut Room,
    now: DateTime<Utc>,
) -> AppResult<bool> {
    match (reservation.status, room.status) {
        (ReservationStatus::Booked, RoomStatus::Available) => {
            reservation.status = ReservationStatus::CheckedIn;
            reservation.check_in = now;
            let adjusted = now > reservation.check_out;
            if adjusted {
                reservation.check_out = now + Duration::days(1);
            }
            room.status = RoomStatus::Occupied;
            Ok(adjusted)
        }
        (status, room_status) => Err(AppError::cannot_modify(format!(
            "cannot check in a {status} reservation on a {room_status} room"
        ))),
    }
}

/// Check a checked-in reservation out, freeing the room.
pub fn apply_check_out(
    reservation: &mut Reservation,
    room: &mut Room,
    now: DateTime<Utc>,
) -> AppResult<()> {
    match (reservation.status, room.status) {
        (ReservationStatus::CheckedIn, RoomStatus::Occupied) => {
            reservation.status = ReservationStatus::CheckedOut;
            reservation.check_out = now;
            room.status = RoomStatus::Available;
            Ok(())
        }
        (status, room_status) => Err(AppError::cannot_modify(format!(
            "cannot check out a {status} reservation on a {room_status} room"
        ))),
    }
}

/// Cancel a reservation that has not yet completed.
///
/// Terminal states are reported distinctly so the caller can tell an
/// already-canceled reservation from a closed one; neither mutates state.
pub fn apply_cancel(
    reservation: &mut Reservation,
    room: &mut Room,
    now: DateTime<Utc>,
) -> AppResult<()> {
    match reservation.status {
        ReservationStatus::Canceled => Err(AppError::already_canceled(
            "the reservation is already canceled",
        )),
        ReservationStatus::CheckedOut => Err(AppError::already_closed(
            "the reservation has already been closed",
        )),
        ReservationStatus::Booked | ReservationStatus::CheckedIn => {
            reservation.status = ReservationStatus::Canceled;
            reservation.check_out = now;
            if room.status == RoomStatus::Occupied {
                room.status = RoomStatus::Available;
            }
            Ok(())
        }
    }
}

/// Apply exactly one forward transition, inferred from the current
/// `(reservation.status, room.status)` pair. Any other combination is a
/// no-op reported as `CannotModify`.
pub fn apply_advance(
    reservation: &mut Reservation,
    room: &mut Room,
    now: DateTime<Utc>,
) -> AppResult<AdvanceStep> {
    match (reservation.status, room.status) {
        (ReservationStatus::Booked, RoomStatus::Available) => {
            let checkout_adjusted = apply_check_in(reservation, room, now)?;
            Ok(AdvanceStep::CheckedIn { checkout_adjusted })
        }
        (ReservationStatus::CheckedIn, RoomStatus::Occupied) => {
            apply_check_out(reservation, room, now)?;
            Ok(AdvanceStep::CheckedOut)
        }
        _ => Err(AppError::cannot_modify(
            "cannot modify this reservation",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use stayhub_core::error::ErrorKind;
    use stayhub_entity::room::RoomKind;
    use uuid::Uuid;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    fn room(status: RoomStatus) -> Room {
        Room {
            id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_number: "101".to_string(),
            kind: RoomKind::Double,
            capacity_adults: 2,
            capacity_children: 0,
            capacity_total: 2,
            price: Decimal::new(15_000, 2),
            status,
            comments: None,
            is_active: true,
            created_at: at(1, 0),
            updated_at: at(1, 0),
        }
    }

    fn reservation(status: ReservationStatus, check_in: u32, check_out: u32) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            guest_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            check_in: at(check_in, 14),
            check_out: at(check_out, 11),
            status,
            created_at: at(1, 0),
            updated_at: at(1, 0),
        }
    }

    #[test]
    fn window_validation() {
        let now = at(10, 12);
        assert!(validate_window(at(11, 14), at(12, 11), now).is_ok());
        assert_eq!(
            validate_window(at(12, 11), at(11, 14), now).unwrap_err().kind,
            ErrorKind::InvalidDateRange
        );
        assert_eq!(
            validate_window(at(11, 14), at(11, 14), now).unwrap_err().kind,
            ErrorKind::InvalidDateRange
        );
        assert_eq!(
            validate_window(at(1, 14), at(2, 11), now).unwrap_err().kind,
            ErrorKind::PastCheckout
        );
    }

    #[test]
    fn future_check_in_creates_booked() {
        let now = at(10, 12);
        assert_eq!(status_on_create(at(11, 14), now), ReservationStatus::Booked);
    }

    #[test]
    fn past_or_present_check_in_creates_checked_in() {
        let now = at(10, 12);
        assert_eq!(
            status_on_create(at(10, 12), now),
            ReservationStatus::CheckedIn
        );
        assert_eq!(
            status_on_create(at(9, 14), now),
            ReservationStatus::CheckedIn
        );
    }

    #[test]
    fn check_in_occupies_room_and_stamps_time() {
        let now = at(11, 15);
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Available);

        let adjusted = apply_check_in(&mut res, &mut rm, now).unwrap();

        assert!(!adjusted);
        assert_eq!(res.status, ReservationStatus::CheckedIn);
        assert_eq!(res.check_in, now);
        assert_eq!(res.check_out, at(13, 11));
        assert_eq!(rm.status, RoomStatus::Occupied);
    }

    #[test]
    fn late_check_in_pushes_checkout_one_day() {
        // Stored check-out is already in the past at check-in time.
        let now = at(14, 9);
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Available);

        let adjusted = apply_check_in(&mut res, &mut rm, now).unwrap();

        assert!(adjusted);
        assert_eq!(res.check_out, now + Duration::days(1));
    }

    #[test]
    fn check_in_requires_available_room() {
        let now = at(11, 15);
        for room_status in [RoomStatus::Occupied, RoomStatus::Maintenance] {
            let mut res = reservation(ReservationStatus::Booked, 11, 13);
            let mut rm = room(room_status);
            let err = apply_check_in(&mut res, &mut rm, now).unwrap_err();
            assert_eq!(err.kind, ErrorKind::CannotModify);
            assert_eq!(res.status, ReservationStatus::Booked);
            assert_eq!(rm.status, room_status);
        }
    }

    #[test]
    fn check_out_frees_room_and_stamps_time() {
        let now = at(13, 10);
        let mut res = reservation(ReservationStatus::CheckedIn, 11, 13);
        let mut rm = room(RoomStatus::Occupied);

        apply_check_out(&mut res, &mut rm, now).unwrap();

        assert_eq!(res.status, ReservationStatus::CheckedOut);
        assert_eq!(res.check_out, now);
        assert_eq!(rm.status, RoomStatus::Available);
    }

    #[test]
    fn check_out_requires_checked_in_on_occupied_room() {
        let now = at(13, 10);
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Occupied);
        assert_eq!(
            apply_check_out(&mut res, &mut rm, now).unwrap_err().kind,
            ErrorKind::CannotModify
        );

        let mut res = reservation(ReservationStatus::CheckedIn, 11, 13);
        let mut rm = room(RoomStatus::Available);
        assert_eq!(
            apply_check_out(&mut res, &mut rm, now).unwrap_err().kind,
            ErrorKind::CannotModify
        );
    }

    #[test]
    fn cancel_booked_keeps_room_available() {
        let now = at(10, 12);
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Available);

        apply_cancel(&mut res, &mut rm, now).unwrap();

        assert_eq!(res.status, ReservationStatus::Canceled);
        assert_eq!(res.check_out, now);
        assert_eq!(rm.status, RoomStatus::Available);
    }

    #[test]
    fn cancel_checked_in_frees_room() {
        let now = at(12, 9);
        let mut res = reservation(ReservationStatus::CheckedIn, 11, 13);
        let mut rm = room(RoomStatus::Occupied);

        apply_cancel(&mut res, &mut rm, now).unwrap();

        assert_eq!(res.status, ReservationStatus::Canceled);
        assert_eq!(rm.status, RoomStatus::Available);
    }

    #[test]
    fn cancel_terminal_states_reports_distinct_errors() {
        let now = at(12, 9);

        let mut res = reservation(ReservationStatus::Canceled, 11, 13);
        let mut rm = room(RoomStatus::Available);
        let err = apply_cancel(&mut res, &mut rm, now).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyCanceled);

        let mut res = reservation(ReservationStatus::CheckedOut, 11, 13);
        let before = res.clone();
        let err = apply_cancel(&mut res, &mut rm, now).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyClosed);
        assert_eq!(res.status, before.status);
        assert_eq!(res.check_out, before.check_out);
        assert_eq!(rm.status, RoomStatus::Available);
    }

    #[test]
    fn advance_steps_booked_to_checked_in() {
        let now = at(11, 15);
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Available);

        let step = apply_advance(&mut res, &mut rm, now).unwrap();

        assert_eq!(
            step,
            AdvanceStep::CheckedIn {
                checkout_adjusted: false
            }
        );
        assert_eq!(res.status, ReservationStatus::CheckedIn);
    }

    #[test]
    fn advance_steps_checked_in_to_checked_out() {
        let now = at(13, 10);
        let mut res = reservation(ReservationStatus::CheckedIn, 11, 13);
        let mut rm = room(RoomStatus::Occupied);

        let step = apply_advance(&mut res, &mut rm, now).unwrap();

        assert_eq!(step, AdvanceStep::CheckedOut);
        assert_eq!(res.status, ReservationStatus::CheckedOut);
        assert_eq!(rm.status, RoomStatus::Available);
    }

    #[test]
    fn advance_applies_exactly_one_step_per_call() {
        let now = at(11, 15);
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Available);

        apply_advance(&mut res, &mut rm, now).unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedIn);

        apply_advance(&mut res, &mut rm, at(13, 10)).unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedOut);
    }

    #[test]
    fn advance_is_a_no_op_on_terminal_reservations() {
        let now = at(13, 10);
        for status in [ReservationStatus::CheckedOut, ReservationStatus::Canceled] {
            let mut res = reservation(status, 11, 13);
            let before = res.clone();
            let mut rm = room(RoomStatus::Available);

            let err = apply_advance(&mut res, &mut rm, now).unwrap_err();

            assert_eq!(err.kind, ErrorKind::CannotModify);
            assert_eq!(res.status, before.status);
            assert_eq!(res.check_in, before.check_in);
            assert_eq!(res.check_out, before.check_out);
        }
    }

    #[test]
    fn advance_rejects_inconsistent_pairs() {
        let now = at(11, 15);
        // Booked reservation on an occupied room: no step can apply.
        let mut res = reservation(ReservationStatus::Booked, 11, 13);
        let mut rm = room(RoomStatus::Occupied);
        assert_eq!(
            apply_advance(&mut res, &mut rm, now).unwrap_err().kind,
            ErrorKind::CannotModify
        );

        // Checked-in reservation on an available room likewise.
        let mut res = reservation(ReservationStatus::CheckedIn, 11, 13);
        let mut rm = room(RoomStatus::Available);
        assert_eq!(
            apply_advance(&mut res, &mut rm, now).unwrap_err().kind,
            ErrorKind::CannotModify
        );
    }
}
