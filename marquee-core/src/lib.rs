//! Board-agnostic core logic for the message cycling firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Greedy word wrapping and line layout
//! - Navigation through the message catalog and LED colour cycling
//! - Configuration types and startup validation
//! - Collaborator traits (display, buzzer, LED, buttons)
//! - The [`Marquee`](controller::Marquee) application context
//!
//! Wrapped lines are heap-allocated, so the firmware must provide a
//! global allocator.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod state;
pub mod text;
pub mod traits;

pub use controller::{Marquee, Transition};
