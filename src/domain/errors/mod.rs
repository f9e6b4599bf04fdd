//! Domain error types.

mod booking_error;

pub use booking_error::BookingError;
