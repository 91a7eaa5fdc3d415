pub mod models;
pub mod manager;

pub use models::{
    booking_reference, Booking, BookingStatus, BookingUpdate, NewBooking, ParseStatusError, Passenger,
    PassengerDetails, StatusCounts, Title,
};
pub use manager::{BookingError, BookingStore};
