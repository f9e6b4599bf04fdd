//! Ride booking state machine.
//!
//! `search → options → matching → confirmed`. User actions drive the first two
//! transitions, match ticks drive the last one. There is no way back.

use crate::domain::entities::{Driver, RideCatalog, RideOption, RideOptionId};
use crate::domain::errors::BookingError;
use crate::domain::{MatchProgress, RideState, SurgeMultiplier};

/// Pickup address a new session starts with.
pub const DEFAULT_PICKUP: &str = "123 Main Street, San Francisco";

/// Outcome of a single match tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTick {
    /// Session is not matching; nothing changed.
    Ignored,
    /// Progress advanced but matching continues.
    Progressed(MatchProgress),
    /// Progress reached 100 and the session is now confirmed.
    Completed,
}

/// Transient per-view booking state.
#[derive(Debug, Clone)]
pub struct BookingSession {
    catalog: RideCatalog,
    driver: Driver,
    pickup: String,
    destination: String,
    selected: Option<RideOptionId>,
    state: RideState,
    progress: MatchProgress,
    surge: SurgeMultiplier,
}

impl BookingSession {
    /// Starts a session in `search` with no destination, selection or surge.
    #[must_use]
    pub fn new(catalog: RideCatalog, driver: Driver, pickup: impl Into<String>) -> Self {
        Self {
            catalog,
            driver,
            pickup: pickup.into(),
            destination: String::new(),
            selected: None,
            state: RideState::Search,
            progress: MatchProgress::ZERO,
            surge: SurgeMultiplier::NONE,
        }
    }

    /// Current ride state.
    #[must_use]
    pub const fn state(&self) -> RideState {
        self.state
    }

    /// Pickup address as typed.
    #[must_use]
    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    /// Destination address as typed.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Match progress, meaningful while matching.
    #[must_use]
    pub const fn progress(&self) -> MatchProgress {
        self.progress
    }

    /// Latest surge multiplier.
    #[must_use]
    pub const fn surge(&self) -> SurgeMultiplier {
        self.surge
    }

    /// Ride options offered in `options`.
    #[must_use]
    pub const fn catalog(&self) -> &RideCatalog {
        &self.catalog
    }

    /// Driver assigned once matching completes.
    #[must_use]
    pub const fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Id of the chosen ride, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<&RideOptionId> {
        self.selected.as_ref()
    }

    /// The chosen ride, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&RideOption> {
        self.selected.as_ref().and_then(|id| self.catalog.get(id))
    }

    /// Surge-adjusted price of an option, rounded to cents.
    #[must_use]
    pub fn displayed_price(&self, option: &RideOption) -> f64 {
        self.surge.apply(option.base_price())
    }

    /// Replaces the pickup address.
    pub fn set_pickup(&mut self, pickup: impl Into<String>) {
        self.pickup = pickup.into();
    }

    /// Replaces the destination address.
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// `search → options`.
    ///
    /// # Errors
    /// `EmptyDestination` if the destination is blank, `InvalidTransition`
    /// outside the search state. The session is left untouched on error.
    pub fn search(&mut self) -> Result<(), BookingError> {
        if self.state != RideState::Search {
            return Err(BookingError::invalid_transition("search", self.state));
        }
        if self.destination.trim().is_empty() {
            return Err(BookingError::EmptyDestination);
        }

        self.state = RideState::Options;
        Ok(())
    }

    /// Replaces the current selection. Does not change the ride state.
    ///
    /// # Errors
    /// `UnknownRideOption` for ids outside the catalog, `InvalidTransition`
    /// outside the options state.
    pub fn select_ride(&mut self, id: &RideOptionId) -> Result<(), BookingError> {
        if self.state != RideState::Options {
            return Err(BookingError::invalid_transition("select a ride", self.state));
        }
        if !self.catalog.contains(id) {
            return Err(BookingError::UnknownRideOption { id: id.to_string() });
        }

        self.selected = Some(id.clone());
        Ok(())
    }

    /// `options → matching`, resetting progress to 0.
    ///
    /// # Errors
    /// `NoRideSelected` without a selection, `InvalidTransition` outside the
    /// options state.
    pub fn confirm(&mut self) -> Result<(), BookingError> {
        if self.state != RideState::Options {
            return Err(BookingError::invalid_transition("confirm", self.state));
        }
        if self.selected.is_none() {
            return Err(BookingError::NoRideSelected);
        }

        self.state = RideState::Matching;
        self.progress = MatchProgress::ZERO;
        Ok(())
    }

    /// Advances match progress by `step`; on reaching 100 moves to `confirmed`.
    pub fn advance_match(&mut self, step: u8) -> MatchTick {
        if self.state != RideState::Matching {
            return MatchTick::Ignored;
        }

        self.progress = self.progress.advanced_by(step);
        if self.progress.is_complete() {
            self.state = RideState::Confirmed;
            MatchTick::Completed
        } else {
            MatchTick::Progressed(self.progress)
        }
    }

    /// Overwrites the surge multiplier.
    pub fn apply_surge(&mut self, surge: SurgeMultiplier) {
        self.surge = surge;
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(RideCatalog::standard(), Driver::demo(), DEFAULT_PICKUP)
    }
}
