//! Domain entity definitions.

mod driver;
mod ride_option;

pub use driver::{Driver, MAX_RATING};
pub use ride_option::{RideCatalog, RideOption, RideOptionId};
