mod footer_bar;
mod header_bar;
mod input;
mod ride_list;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use ride_list::RideList;
