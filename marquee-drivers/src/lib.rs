//! Peripheral driver implementations
//!
//! Concrete implementations of the feedback and input traits defined in
//! marquee-core, written against the marquee-hal pin and delay traits:
//!
//! - Piezo buzzer (square-wave tone, click)
//! - Status LED
//! - Push buttons

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod buzzer;
pub mod led;

#[cfg(test)]
mod mock;

pub use button::Button;
pub use buzzer::Buzzer;
pub use led::StatusLed;
