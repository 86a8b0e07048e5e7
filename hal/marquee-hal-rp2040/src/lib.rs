//! RP2040-specific HAL for the Marquee firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `marquee-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO wrappers and config pin-string parsing
//! - Dynamic pin allocation for config-driven setup
//! - Blocking I2C and delay adapters over `embedded-hal` 1.0

#![cfg_attr(not(test), no_std)]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod pins;

pub use delay::BlockingDelay;
pub use gpio::{parse_pin_string, GpioInput, GpioOutput, PinSpec};
pub use i2c::BlockingI2c;
pub use pins::{BoardPeripherals, PinBank, PinError};
