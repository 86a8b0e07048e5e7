//! Message catalog
//!
//! The fixed, ordered list of messages the demo cycles through.

use heapless::Vec;

use super::types::ConfigError;
use crate::text::LineWrapper;

/// Maximum number of messages in a catalog
pub const MAX_MESSAGES: usize = 32;

/// Ordered, non-empty list of messages
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: Vec<&'static str, MAX_MESSAGES>,
}

impl MessageCatalog {
    /// Build a catalog from a message list
    pub fn new(messages: &[&'static str]) -> Result<Self, ConfigError> {
        if messages.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let messages = Vec::from_slice(messages).map_err(|_| ConfigError::CatalogTooLarge)?;
        Ok(Self { messages })
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false, construction rejects empty catalogs
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message at `index`
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.messages.get(index).copied()
    }

    /// All messages in order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.messages.iter().copied()
    }

    /// Check that every message fits the display region
    pub fn check_fits(&self, wrapper: &LineWrapper) -> Result<(), ConfigError> {
        for (index, message) in self.iter().enumerate() {
            wrapper.wrap(message).map_err(|e| ConfigError::from((index, e)))?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MessageCatalog {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Catalog[");
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", message);
        }
        defmt::write!(f, "]");
    }
}
