//! UI Widgets

mod map;
mod status;

pub use map::MapWidget;
pub use status::StatusWidget;
