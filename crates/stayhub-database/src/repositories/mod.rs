//! Concrete repository implementations.

pub mod guest;
pub mod hotel;
pub mod reservation;
pub mod room;

pub use guest::GuestRepository;
pub use hotel::HotelRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
