//! RideAI - a terminal ride-booking demo.
//!
//! Walks a single booking through search, ride choice, driver matching and
//! confirmation, with a periodically re-sampled surge multiplier.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing shared services.
pub mod application;
/// Domain layer containing the booking state machine, entities and ports.
pub mod domain;
/// Infrastructure layer containing configuration and timers.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "rideai";
