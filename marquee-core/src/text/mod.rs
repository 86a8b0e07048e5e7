//! Text shaping for the display region
//!
//! Turns a catalog message into wrapped lines and places each line at a
//! pixel coordinate.

pub mod layout;
pub mod wrap;

pub use layout::LineLayout;
pub use wrap::{wrap, LineWrapper, WrapError};
