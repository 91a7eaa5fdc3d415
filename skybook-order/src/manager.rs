use chrono::{DateTime, Utc};
use skybook_catalog::FareCalculator;

use crate::models::{
    booking_reference, Booking, BookingStatus, BookingUpdate, NewBooking, StatusCounts,
};

/// In-memory booking records for the lifetime of the process.
///
/// Records keep insertion order. Ids are issued above every id the store has
/// held, so deleting the newest booking never frees its id for reuse.
pub struct BookingStore {
    bookings: Vec<Booking>,
    last_issued_id: u32,
    calculator: FareCalculator,
}

impl BookingStore {
    pub fn new(calculator: FareCalculator) -> Self {
        Self::with_bookings(Vec::new(), calculator)
    }

    /// Store seeded with `bookings`, typically the fixture copy.
    pub fn with_bookings(bookings: Vec<Booking>, calculator: FareCalculator) -> Self {
        let last_issued_id = bookings.iter().map(|b| b.id).max().unwrap_or(0);
        Self {
            bookings,
            last_issued_id,
            calculator,
        }
    }

    pub fn create_booking(&mut self, details: NewBooking) -> Booking {
        self.create_booking_at(details, Utc::now())
    }

    /// Confirms a booking stamped with `now`. The caller is responsible for
    /// validating passengers and contact details.
    pub fn create_booking_at(&mut self, details: NewBooking, now: DateTime<Utc>) -> Booking {
        let passenger_count = details.passengers.len();
        let total_price = self.calculator.total_price(&details.flights, passenger_count);

        let booking = Booking {
            id: self.next_id(),
            booking_id: booking_reference(now),
            flights: details.flights,
            passengers: details.passengers,
            contact_email: details.contact_email,
            contact_phone: details.contact_phone,
            total_price,
            status: BookingStatus::Confirmed,
            booking_date: now,
        };

        tracing::info!(
            id = booking.id,
            reference = %booking.booking_id,
            passengers = passenger_count,
            total = booking.total_price,
            "Booking confirmed"
        );

        self.bookings.push(booking.clone());
        booking
    }

    /// Snapshot of every booking in insertion order.
    pub fn get_all_bookings(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    pub fn get_booking_by_id(&self, id: u32) -> Option<Booking> {
        self.bookings.iter().find(|b| b.id == id).cloned()
    }

    /// Rejects status changes out of a final state; nothing is applied then.
    pub fn update_booking(&mut self, id: u32, update: BookingUpdate) -> Result<Booking, BookingError> {
        let booking = self.get_booking_mut(id)?;
        if let Some(next) = update.status {
            if !booking.status.can_become(next) {
                return Err(BookingError::InvalidTransition {
                    id,
                    from: booking.status,
                    to: next,
                });
            }
        }
        update.apply(booking);
        Ok(booking.clone())
    }

    /// Marks the booking cancelled. Price and seats are untouched.
    pub fn cancel_booking(&mut self, id: u32) -> Result<Booking, BookingError> {
        let booking = self.get_booking_mut(id)?;
        booking.status = BookingStatus::Cancelled;
        tracing::info!(id, reference = %booking.booking_id, "Booking cancelled");
        Ok(booking.clone())
    }

    pub fn delete_booking(&mut self, id: u32) -> Result<Booking, BookingError> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookingError::NotFound(id))?;
        let removed = self.bookings.remove(index);
        tracing::info!(id, reference = %removed.booking_id, "Booking deleted");
        Ok(removed)
    }

    /// `None` returns every booking.
    pub fn bookings_with_status(&self, status: Option<BookingStatus>) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .cloned()
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.bookings)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn next_id(&mut self) -> u32 {
        let current_max = self.bookings.iter().map(|b| b.id).max().unwrap_or(0);
        self.last_issued_id = self.last_issued_id.max(current_max) + 1;
        self.last_issued_id
    }

    fn get_booking_mut(&mut self, id: u32) -> Result<&mut Booking, BookingError> {
        self.bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookingError::NotFound(id))
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new(FareCalculator::default())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(u32),
    #[error("Booking {id} cannot change from {from} to {to}")]
    InvalidTransition {
        id: u32,
        from: BookingStatus,
        to: BookingStatus,
    },
}
