//! Domain layer with the booking state machine, entities and ports.

/// Booking session state machine.
pub mod booking;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Match progress value type.
pub mod match_progress;
/// User-facing notices.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Surge multiplier and fare display.
pub mod pricing;
/// Ride state definitions.
pub mod ride_state;

pub use booking::{BookingSession, DEFAULT_PICKUP, MatchTick};
pub use entities::{Driver, RideCatalog, RideOption, RideOptionId};
pub use errors::BookingError;
pub use match_progress::MatchProgress;
pub use notification::{Notification, NotificationLevel};
pub use ports::NotificationPort;
pub use pricing::SurgeMultiplier;
pub use ride_state::RideState;
