/// Toast queue.
pub mod notification_manager;
/// Surge multiplier sampling.
pub mod surge_pricing;

pub use notification_manager::NotificationManager;
pub use surge_pricing::{SURGE_MAX, SURGE_MIN, SurgePricing};
