//! Hotel account registration and lookup.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::HotelRepository;
use stayhub_entity::hotel::{Hotel, RegisterHotel};

/// Handles hotel account records.
#[derive(Debug, Clone)]
pub struct HotelService {
    /// Hotel repository.
    hotels: Arc<HotelRepository>,
}

impl HotelService {
    /// Creates a new hotel service.
    pub fn new(hotels: Arc<HotelRepository>) -> Self {
        Self { hotels }
    }

    /// Register a hotel account. Duplicate tax ids are a conflict.
    pub async fn register(&self, data: &RegisterHotel) -> AppResult<Hotel> {
        let hotel = self.hotels.create(data).await?;
        info!(hotel_id = %hotel.id, "Hotel registered");
        Ok(hotel)
    }

    /// Fetch a hotel account.
    pub async fn get(&self, id: Uuid) -> AppResult<Hotel> {
        self.hotels
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }
}
