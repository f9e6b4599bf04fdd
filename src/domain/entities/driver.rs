//! Driver entity.

use crate::domain::errors::BookingError;

/// Highest rating a driver can carry.
pub const MAX_RATING: f32 = 5.0;

/// Driver assigned once matching completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    name: String,
    rating: f32,
    trips: u32,
    vehicle: String,
    plate: String,
    avatar: String,
}

impl Driver {
    /// Creates a driver.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidRating` if the rating is outside `0.0..=5.0`.
    pub fn new(
        name: impl Into<String>,
        rating: f32,
        trips: u32,
        vehicle: impl Into<String>,
        plate: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Result<Self, BookingError> {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(BookingError::InvalidRating { value: rating });
        }

        Ok(Self {
            name: name.into(),
            rating,
            trips,
            vehicle: vehicle.into(),
            plate: plate.into(),
            avatar: avatar.into(),
        })
    }

    /// The driver every demo booking is matched with.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            rating: 4.92,
            trips: 2847,
            vehicle: "Tesla Model 3".to_string(),
            plate: "ABC 1234".to_string(),
            avatar: "👤".to_string(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rating out of five.
    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }

    /// Number of completed trips.
    #[must_use]
    pub const fn trips(&self) -> u32 {
        self.trips
    }

    /// Vehicle description.
    #[must_use]
    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// License plate.
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Avatar glyph.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::demo()
    }
}
