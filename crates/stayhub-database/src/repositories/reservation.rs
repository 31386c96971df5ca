//! Reservation repository implementation.
//!
//! Holds the overlap queries behind the availability engine and the
//! transaction-aware methods used by the lifecycle state machine. The two
//! guest predicates are deliberately distinct: availability listings
//! consider only active reservations, while the single-guest conflict
//! check considers every reservation regardless of status.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use stayhub_core::config::booking::RoomAvailabilityPolicy;
use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_core::types::period::StayPeriod;
use stayhub_entity::guest::Guest;
use stayhub_entity::reservation::{Reservation, ReservationStatus};
use stayhub_entity::room::Room;

/// Optional filters for reservation listings.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Only reservations on this room.
    pub room_id: Option<Uuid>,
    /// Only reservations in this status.
    pub status: Option<ReservationStatus>,
    /// Only reservations checking in before this instant.
    pub check_in_before: Option<DateTime<Utc>>,
    /// Only reservations checking in after this instant.
    pub check_in_after: Option<DateTime<Utc>>,
    /// Only reservations checking out before this instant.
    pub check_out_before: Option<DateTime<Utc>>,
    /// Only reservations checking out after this instant.
    pub check_out_after: Option<DateTime<Utc>>,
}

/// Repository for reservation persistence and overlap queries.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reservation by primary key, scoped to a hotel through its room.
    pub async fn find_by_id(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT r.* FROM reservations r \
             JOIN rooms rm ON rm.id = r.room_id \
             WHERE r.id = $1 AND rm.hotel_id = $2",
        )
        .bind(id)
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find reservation by id", e)
        })
    }

    /// Find a reservation and lock its row for the remainder of the
    /// transaction. The caller locks the room separately.
    pub async fn find_for_update(
        &self,
        conn: &mut PgConnection,
        hotel_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT r.* FROM reservations r \
             JOIN rooms rm ON rm.id = r.room_id \
             WHERE r.id = $1 AND rm.hotel_id = $2 \
             FOR UPDATE OF r",
        )
        .bind(id)
        .bind(hotel_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock reservation", e))
    }

    /// Insert a new reservation inside the creating transaction.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        guest_id: Uuid,
        room_id: Uuid,
        period: &StayPeriod,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (guest_id, room_id, check_in, check_out, status) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(guest_id)
        .bind(room_id)
        .bind(period.check_in)
        .bind(period.check_out)
        .bind(status)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reservation", e))
    }

    /// Persist a lifecycle transition's changes to the reservation row.
    pub async fn save_transition(
        &self,
        conn: &mut PgConnection,
        reservation: &Reservation,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE reservations \
             SET status = $2, check_in = $3, check_out = $4, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(reservation.id)
        .bind(reservation.status)
        .bind(reservation.check_in)
        .bind(reservation.check_out)
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to save reservation", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Reservation {} not found",
                reservation.id
            )));
        }
        Ok(())
    }

    /// Whether the room has an active reservation overlapping the period.
    ///
    /// Run inside the creating transaction, after the room row is locked,
    /// so concurrent creations on the same room serialize.
    pub async fn room_has_active_overlap(
        &self,
        conn: &mut PgConnection,
        room_id: Uuid,
        period: &StayPeriod,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
               SELECT 1 FROM reservations \
               WHERE room_id = $1 \
                 AND status IN ('booked', 'checked_in') \
                 AND check_in < $2 AND check_out > $3)",
        )
        .bind(room_id)
        .bind(period.check_out)
        .bind(period.check_in)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check room overlap", e)
        })
    }

    /// Whether the room currently holds a checked-in reservation. Guards
    /// manual status changes that would break the occupancy invariant.
    pub async fn room_has_checked_in(&self, room_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
               SELECT 1 FROM reservations WHERE room_id = $1 AND status = 'checked_in')",
        )
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check room occupancy", e)
        })
    }

    /// Whether ANY reservation of the guest overlaps the period, regardless
    /// of status. Stricter than the room predicate on purpose.
    pub async fn guest_has_any_overlap(
        &self,
        guest_id: Uuid,
        period: &StayPeriod,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
               SELECT 1 FROM reservations \
               WHERE guest_id = $1 AND check_in < $2 AND check_out > $3)",
        )
        .bind(guest_id)
        .bind(period.check_out)
        .bind(period.check_in)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check guest conflict", e)
        })
    }

    /// Whether the guest holds any reservation with a future check-out.
    /// Guards guest hard deletion.
    pub async fn guest_has_future_checkout(&self, guest_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS ( \
               SELECT 1 FROM reservations WHERE guest_id = $1 AND check_out > NOW())",
        )
        .bind(guest_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check guest reservations", e)
        })
    }

    /// Rooms of the hotel free of active overlapping reservations, filtered
    /// by the configured room-status policy.
    pub async fn available_rooms(
        &self,
        hotel_id: Uuid,
        period: &StayPeriod,
        policy: RoomAvailabilityPolicy,
    ) -> AppResult<Vec<Room>> {
        let status_clause = match policy {
            RoomAvailabilityPolicy::AvailableOnly => "rm.status = 'available'",
            RoomAvailabilityPolicy::ExcludeMaintenance => "rm.status <> 'maintenance'",
        };

        let sql = format!(
            "SELECT rm.* FROM rooms rm \
             WHERE rm.hotel_id = $1 AND rm.is_active AND {status_clause} \
               AND rm.id NOT IN ( \
                 SELECT r.room_id FROM reservations r \
                 WHERE r.status IN ('booked', 'checked_in') \
                   AND r.check_in < $2 AND r.check_out > $3) \
             ORDER BY rm.room_number ASC"
        );

        sqlx::query_as::<_, Room>(&sql)
            .bind(hotel_id)
            .bind(period.check_out)
            .bind(period.check_in)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to query available rooms", e)
            })
    }

    /// Non-deleted guests of the hotel without an active overlapping
    /// reservation.
    pub async fn available_guests(
        &self,
        hotel_id: Uuid,
        period: &StayPeriod,
    ) -> AppResult<Vec<Guest>> {
        sqlx::query_as::<_, Guest>(
            "SELECT g.* FROM guests g \
             WHERE g.hotel_id = $1 AND NOT g.is_deleted \
               AND g.id NOT IN ( \
                 SELECT r.guest_id FROM reservations r \
                 WHERE r.status IN ('booked', 'checked_in') \
                   AND r.check_in < $2 AND r.check_out > $3) \
             ORDER BY g.name ASC",
        )
        .bind(hotel_id)
        .bind(period.check_out)
        .bind(period.check_in)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query available guests", e)
        })
    }

    /// List reservations with optional filters, ordered by lifecycle stage
    /// and then check-in.
    pub async fn list(
        &self,
        hotel_id: Uuid,
        filter: &ReservationFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Reservation>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations r \
             JOIN rooms rm ON rm.id = r.room_id \
             WHERE rm.hotel_id = $1 \
               AND ($2::uuid IS NULL OR r.room_id = $2) \
               AND ($3::reservation_status IS NULL OR r.status = $3) \
               AND ($4::timestamptz IS NULL OR r.check_in < $4) \
               AND ($5::timestamptz IS NULL OR r.check_in > $5) \
               AND ($6::timestamptz IS NULL OR r.check_out < $6) \
               AND ($7::timestamptz IS NULL OR r.check_out > $7)",
        )
        .bind(hotel_id)
        .bind(filter.room_id)
        .bind(filter.status)
        .bind(filter.check_in_before)
        .bind(filter.check_in_after)
        .bind(filter.check_out_before)
        .bind(filter.check_out_after)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count reservations", e)
        })?;

        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT r.* FROM reservations r \
             JOIN rooms rm ON rm.id = r.room_id \
             WHERE rm.hotel_id = $1 \
               AND ($2::uuid IS NULL OR r.room_id = $2) \
               AND ($3::reservation_status IS NULL OR r.status = $3) \
               AND ($4::timestamptz IS NULL OR r.check_in < $4) \
               AND ($5::timestamptz IS NULL OR r.check_in > $5) \
               AND ($6::timestamptz IS NULL OR r.check_out < $6) \
               AND ($7::timestamptz IS NULL OR r.check_out > $7) \
             ORDER BY CASE r.status \
                 WHEN 'booked' THEN 1 \
                 WHEN 'checked_in' THEN 2 \
                 WHEN 'checked_out' THEN 3 \
                 WHEN 'canceled' THEN 4 \
               END, r.check_in ASC \
             LIMIT $8 OFFSET $9",
        )
        .bind(hotel_id)
        .bind(filter.room_id)
        .bind(filter.status)
        .bind(filter.check_in_before)
        .bind(filter.check_in_after)
        .bind(filter.check_out_before)
        .bind(filter.check_out_after)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations", e)
        })?;

        Ok(PageResponse::new(reservations, page, total as u64))
    }

    /// Open a transaction for a reservation lifecycle operation.
    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'static, sqlx::Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to open transaction", e))
    }
}
