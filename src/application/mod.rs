//! Application layer with services shared by the presentation layer.

/// Notification queue and surge sampling.
pub mod services;

pub use services::{NotificationManager, SurgePricing};
