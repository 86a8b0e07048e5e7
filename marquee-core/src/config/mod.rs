//! Configuration types
//!
//! Build-time demo configuration and the message catalog.

pub mod catalog;
pub mod types;

pub use catalog::{MessageCatalog, MAX_MESSAGES};
pub use types::*;
