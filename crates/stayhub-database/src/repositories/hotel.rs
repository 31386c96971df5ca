//! Hotel (tenant) repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::hotel::{Hotel, RegisterHotel};

/// Repository for hotel account records.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Create a new hotel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hotel by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find hotel by id", e))
    }

    /// Register a new hotel. A duplicate tax id is a conflict.
    pub async fn create(&self, data: &RegisterHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels (name, tax_id, email, phone, address, city, state, zip_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.tax_id)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.zip_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("hotels_tax_id_key") => {
                AppError::conflict(format!("Hotel tax id '{}' is already registered", data.tax_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to register hotel", e),
        })
    }
}
