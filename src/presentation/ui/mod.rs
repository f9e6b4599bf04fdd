//! UI screens.

mod app;
mod booking_screen;
mod booking_view;
mod notification_popup;

pub use app::App;
pub use booking_screen::BookingScreen;
pub use booking_view::{BookingView, DriverAction, FormField, ViewKeyResult};
pub use notification_popup::NotificationPopup;
