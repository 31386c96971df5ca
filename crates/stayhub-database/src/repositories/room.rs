//! Room repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::room::{CreateRoom, Room, RoomStatus, UpdateRoom};

/// Repository for room CRUD and status updates.
///
/// Status mutations that belong to a reservation transition take an
/// explicit connection so they join the transition's transaction.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key, scoped to a hotel.
    pub async fn find_by_id(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1 AND hotel_id = $2")
            .bind(id)
            .bind(hotel_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room by id", e))
    }

    /// Find a room and lock its row for the remainder of the transaction.
    pub async fn find_for_update(
        &self,
        conn: &mut PgConnection,
        hotel_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE id = $1 AND hotel_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(hotel_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock room", e))
    }

    /// List rooms with an optional status filter.
    pub async fn list(
        &self,
        hotel_id: Uuid,
        status: Option<RoomStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Room>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rooms \
             WHERE hotel_id = $1 AND is_active \
               AND ($2::room_status IS NULL OR status = $2)",
        )
        .bind(hotel_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rooms", e))?;

        let rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms \
             WHERE hotel_id = $1 AND is_active \
               AND ($2::room_status IS NULL OR status = $2) \
             ORDER BY room_number ASC LIMIT $3 OFFSET $4",
        )
        .bind(hotel_id)
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))?;

        Ok(PageResponse::new(rooms, page, total as u64))
    }

    /// Insert a new room with the resolved capacity pair.
    pub async fn create(
        &self,
        hotel_id: Uuid,
        data: &CreateRoom,
        capacity: (i32, i32),
    ) -> AppResult<Room> {
        let (adults, children) = capacity;
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (hotel_id, room_number, kind, capacity_adults, \
                                capacity_children, capacity_total, price, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(hotel_id)
        .bind(&data.room_number)
        .bind(data.kind)
        .bind(adults)
        .bind(children)
        .bind(adults + children)
        .bind(data.price)
        .bind(&data.comments)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("rooms_hotel_room_number_key") =>
            {
                AppError::conflict(format!("Room number '{}' already exists", data.room_number))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create room", e),
        })
    }

    /// Update a room's number, price, or comments.
    pub async fn update(&self, hotel_id: Uuid, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET room_number = COALESCE($3, room_number), \
                              price = COALESCE($4, price), \
                              comments = COALESCE($5, comments), \
                              updated_at = NOW() \
             WHERE id = $1 AND hotel_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(hotel_id)
        .bind(&data.room_number)
        .bind(data.price)
        .bind(&data.comments)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("rooms_hotel_room_number_key") =>
            {
                AppError::conflict("Room number already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update room", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Update a room's status within a reservation transition's transaction.
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: RoomStatus,
    ) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE rooms SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status)
                .execute(conn)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update room status", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Room {id} not found")));
        }
        Ok(())
    }

    /// Update a room's status outside any reservation transition (manual
    /// maintenance toggles).
    pub async fn update_status(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        status: RoomStatus,
    ) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND hotel_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(hotel_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room status", e))?
        .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Mark a room inactive. Returns `false` when no active row matched.
    pub async fn deactivate(&self, hotel_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE rooms SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1 AND hotel_id = $2 AND is_active",
        )
        .bind(id)
        .bind(hotel_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate room", e))?;

        Ok(result.rows_affected() > 0)
    }
}
