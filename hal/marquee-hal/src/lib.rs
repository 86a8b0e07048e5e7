//! Marquee Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the drivers are
//! written against. Chip-specific crates (currently only RP2040) implement
//! them, so the drivers and the display can be tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  marquee-drivers / marquee-display      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ marquee-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`delay::Delay`] - Blocking busy-wait delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig, I2cError};
