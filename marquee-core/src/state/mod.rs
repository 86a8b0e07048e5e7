//! Navigation state
//!
//! The whole runtime state of the demo: which message is shown and which
//! colour the LED steps to next. Both are advanced by button events.

pub mod events;
pub mod led;
pub mod navigation;

pub use events::{ButtonId, Event};
pub use led::LedColor;
pub use navigation::Navigator;
