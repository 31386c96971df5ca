//! Guest repository implementation.
//!
//! Guests are soft-deleted. Lookups exclude deleted rows unless stated
//! otherwise; re-registration of a deleted guest's tax id revives the
//! original row.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::guest::{CreateGuest, Guest, UpdateGuest};

/// Repository for guest CRUD and tenant-scoped queries.
#[derive(Debug, Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    /// Create a new guest repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a non-deleted guest by primary key, scoped to a hotel.
    pub async fn find_by_id(&self, hotel_id: Uuid, id: Uuid) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>(
            "SELECT * FROM guests WHERE id = $1 AND hotel_id = $2 AND NOT is_deleted",
        )
        .bind(id)
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find guest by id", e))
    }

    /// Find a guest by tax id, including soft-deleted rows.
    ///
    /// Prefers the live row when one exists, otherwise the most recently
    /// updated deleted row (the revival target).
    pub async fn find_by_tax_id_any(
        &self,
        hotel_id: Uuid,
        tax_id: &str,
    ) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>(
            "SELECT * FROM guests WHERE hotel_id = $1 AND tax_id = $2 \
             ORDER BY is_deleted ASC, updated_at DESC LIMIT 1",
        )
        .bind(hotel_id)
        .bind(tax_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find guest by tax id", e)
        })
    }

    /// List non-deleted guests with optional name/tax-id filters.
    pub async fn list(
        &self,
        hotel_id: Uuid,
        name: Option<&str>,
        tax_id: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Guest>> {
        let name_pattern = name.map(|n| format!("%{n}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM guests \
             WHERE hotel_id = $1 AND NOT is_deleted \
               AND ($2::text IS NULL OR name ILIKE $2) \
               AND ($3::text IS NULL OR tax_id = $3)",
        )
        .bind(hotel_id)
        .bind(&name_pattern)
        .bind(tax_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count guests", e))?;

        let guests = sqlx::query_as::<_, Guest>(
            "SELECT * FROM guests \
             WHERE hotel_id = $1 AND NOT is_deleted \
               AND ($2::text IS NULL OR name ILIKE $2) \
               AND ($3::text IS NULL OR tax_id = $3) \
             ORDER BY name ASC LIMIT $4 OFFSET $5",
        )
        .bind(hotel_id)
        .bind(&name_pattern)
        .bind(tax_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list guests", e))?;

        Ok(PageResponse::new(guests, page, total as u64))
    }

    /// Insert a new guest row.
    pub async fn create(&self, hotel_id: Uuid, data: &CreateGuest) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (hotel_id, name, email, phone, tax_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(hotel_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.tax_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("guests_hotel_tax_id_key") =>
            {
                AppError::conflict(format!(
                    "A guest with tax id '{}' is already registered",
                    data.tax_id
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create guest", e),
        })
    }

    /// Revive a soft-deleted guest in place with fresh contact details.
    pub async fn revive(&self, id: Uuid, data: &CreateGuest) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            "UPDATE guests SET name = $2, email = $3, phone = $4, \
                               is_deleted = FALSE, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revive guest", e))?
        .ok_or_else(|| AppError::not_found(format!("Guest {id} not found")))
    }

    /// Update a guest's contact fields.
    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        data: &UpdateGuest,
    ) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            "UPDATE guests SET name = COALESCE($3, name), \
                               email = COALESCE($4, email), \
                               phone = COALESCE($5, phone), \
                               updated_at = NOW() \
             WHERE id = $1 AND hotel_id = $2 AND NOT is_deleted \
             RETURNING *",
        )
        .bind(id)
        .bind(hotel_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update guest", e))?
        .ok_or_else(|| AppError::not_found(format!("Guest {id} not found")))
    }

    /// Soft-delete a guest. Returns `false` when no live row matched.
    pub async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE guests SET is_deleted = TRUE, updated_at = NOW() \
             WHERE id = $1 AND hotel_id = $2 AND NOT is_deleted",
        )
        .bind(id)
        .bind(hotel_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to soft-delete guest", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Physically delete a guest row. The service layer guards this against
    /// guests with a future check-out.
    pub async fn hard_delete(&self, hotel_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1 AND hotel_id = $2")
            .bind(id)
            .bind(hotel_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete guest", e))?;

        Ok(result.rows_affected() > 0)
    }
}
