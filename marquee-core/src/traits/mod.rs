//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the peripheral drivers.

pub mod display;
pub mod feedback;
pub mod input;

pub use display::{DisplayError, TextDisplay};
pub use feedback::{Indicator, ToneOutput};
pub use input::Button;
