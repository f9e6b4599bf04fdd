//! Booking error types.

use thiserror::Error;

use crate::domain::RideState;

/// Booking guard failures and invalid domain values.
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(missing_docs)]
pub enum BookingError {
    #[error("destination is required to search for rides")]
    EmptyDestination,

    #[error("no ride option selected")]
    NoRideSelected,

    #[error("unknown ride option: {id}")]
    UnknownRideOption { id: String },

    #[error("duplicate ride option in catalog: {id}")]
    DuplicateRideOption { id: String },

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: RideState,
    },

    #[error("surge multiplier must be a finite value >= 1.0, got {value}")]
    InvalidSurgeMultiplier { value: f64 },

    #[error("driver rating must be within 0.0..=5.0, got {value}")]
    InvalidRating { value: f32 },
}

impl BookingError {
    /// Creates an invalid transition error.
    #[must_use]
    pub const fn invalid_transition(action: &'static str, state: RideState) -> Self {
        Self::InvalidTransition { action, state }
    }

    /// Returns whether the user can fix the failure by editing input and retrying.
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::EmptyDestination | Self::NoRideSelected)
    }
}
