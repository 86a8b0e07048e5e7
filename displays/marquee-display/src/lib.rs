//! OLED text display for Marquee
//!
//! This crate provides:
//! - [`FrameBuffer`], a page-organised 128x64 monochrome buffer that is an
//!   `embedded-graphics` draw target
//! - [`Ssd1306`], an I2C driver for SSD1306 panels that implements the
//!   core [`TextDisplay`](marquee_core::traits::TextDisplay) sink
//!
//! # Architecture
//!
//! Text is rasterised into the RAM buffer with the `FONT_5X8` mono font.
//! Nothing is sent to the panel until `flush`, which streams all eight
//! pages over the bus.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod framebuffer;
pub mod ssd1306;

// Re-export key types
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::{Ssd1306, SSD1306_ADDR};
