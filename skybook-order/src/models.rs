use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use skybook_core::Flight;
use skybook_shared::Masked;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Pending,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Pending,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Pending => "pending",
        }
    }

    /// Pending may confirm or cancel, confirmed may cancel, cancelled is
    /// final. Staying put is always allowed.
    pub fn can_become(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        ) || self == next
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown booking status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for BookingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Title {
    Mr,
    Mrs,
    Ms,
    Dr,
}

/// Traveller details as captured by the passenger form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetails {
    pub title: Title,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default = "default_nationality")]
    pub nationality: String,
    #[serde(default)]
    pub passport_number: Option<Masked<String>>,
}

fn default_nationality() -> String {
    "Indian".to_string()
}

/// A traveller embedded in a booking. `id` is the 1-based position on the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub id: u32,
    #[serde(flatten)]
    pub details: PassengerDetails,
}

impl Passenger {
    /// Numbers `details` by position, starting at 1.
    pub fn numbered(details: Vec<PassengerDetails>) -> Vec<Passenger> {
        details
            .into_iter()
            .zip(1..)
            .map(|(details, id)| Passenger { id, details })
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.first_name, self.details.last_name)
    }
}

/// A confirmed (or cancelled) reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u32,
    /// Human-readable reference, e.g. `SKY482913`
    pub booking_id: String,
    pub flights: Vec<Flight>,
    pub passengers: Vec<Passenger>,
    pub contact_email: Masked<String>,
    pub contact_phone: Masked<String>,
    pub total_price: i64,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

/// Everything the caller supplies when confirming a booking. The store fills
/// in identity, reference, status, timestamp and price.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub flights: Vec<Flight>,
    pub passengers: Vec<Passenger>,
    pub contact_email: Masked<String>,
    pub contact_phone: Masked<String>,
}

/// Partial update; `None` fields are left as they are.
///
/// Identity, reference, price and creation time cannot be changed. A new
/// passenger list replaces the old one and is renumbered from 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingUpdate {
    pub passengers: Option<Vec<PassengerDetails>>,
    pub contact_email: Option<Masked<String>>,
    pub contact_phone: Option<Masked<String>>,
    pub status: Option<BookingStatus>,
}

impl BookingUpdate {
    pub fn apply(self, booking: &mut Booking) {
        if let Some(passengers) = self.passengers {
            booking.passengers = Passenger::numbered(passengers);
        }
        if let Some(email) = self.contact_email {
            booking.contact_email = email;
        }
        if let Some(phone) = self.contact_phone {
            booking.contact_phone = phone;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
    }
}

/// Number of bookings per status, as shown on the history filter tabs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub pending: usize,
}

impl StatusCounts {
    pub fn tally<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        bookings
            .into_iter()
            .fold(StatusCounts::default(), |mut counts, booking| {
                counts.all += 1;
                match booking.status {
                    BookingStatus::Confirmed => counts.confirmed += 1,
                    BookingStatus::Cancelled => counts.cancelled += 1,
                    BookingStatus::Pending => counts.pending += 1,
                }
                counts
            })
    }
}

/// `SKY` followed by the last six digits of the Unix millisecond timestamp.
pub fn booking_reference(at: DateTime<Utc>) -> String {
    format!("SKY{:06}", at.timestamp_millis().rem_euclid(1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_booking_reference_format() {
        let at = Utc.timestamp_millis_opt(1_710_484_200_042).unwrap();
        assert_eq!(booking_reference(at), "SKY200042");

        let reference = booking_reference(Utc::now());
        assert_eq!(reference.len(), 9);
        assert!(reference.starts_with("SKY"));
        assert!(reference[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in BookingStatus::ALL {
            assert_eq!(status.to_string().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("refunded".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_passengers_are_numbered_from_one() {
        let details = PassengerDetails {
            title: Title::Ms,
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            date_of_birth: None,
            gender: None,
            nationality: default_nationality(),
            passport_number: None,
        };
        let passengers = Passenger::numbered(vec![details.clone(), details]);
        assert_eq!(passengers.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(passengers[0].full_name(), "Asha Rao");
    }

    #[test]
    fn test_status_transitions() {
        use BookingStatus::*;
        assert!(Confirmed.can_become(Cancelled));
        assert!(Pending.can_become(Confirmed));
        assert!(Cancelled.can_become(Cancelled));
        assert!(!Cancelled.can_become(Confirmed));
        assert!(!Cancelled.can_become(Pending));
        assert!(!Confirmed.can_become(Pending));
    }

    #[test]
    fn test_update_renumbers_passengers() {
        let json = r#"
            {
                "passengers": [
                    {"id": 7, "title": "Mr", "firstName": "Rahul", "lastName": "Sharma"},
                    {"id": 7, "title": "Mrs", "firstName": "Priya", "lastName": "Sharma"},
                    {"title": "Ms", "firstName": "Diya", "lastName": "Sharma"}
                ]
            }
        "#;
        let update: BookingUpdate = serde_json::from_str(json).expect("Failed to deserialize");
        let passengers = update.passengers.clone().map(Passenger::numbered).unwrap();
        assert_eq!(passengers.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(passengers[2].full_name(), "Diya Sharma");
    }

    #[test]
    fn test_passenger_json_is_flat() {
        let json = r#"
            {
                "id": 1,
                "title": "Mr",
                "firstName": "Rahul",
                "lastName": "Sharma",
                "dateOfBirth": "1990-05-15",
                "gender": "male",
                "passportNumber": "K1234567"
            }
        "#;
        let passenger: Passenger = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(passenger.details.nationality, "Indian");
        assert_eq!(
            passenger.details.passport_number.as_ref().map(|p| p.expose().as_str()),
            Some("K1234567")
        );
    }
}
