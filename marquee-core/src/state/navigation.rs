//! Catalog navigation
//!
//! A cyclic cursor over the message catalog. The index is always in
//! `0..len`; both directions wrap instead of clamping.

use super::events::Event;

/// Cursor into a non-empty catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    /// Create a cursor at index 0 over `len` entries
    ///
    /// Returns `None` for an empty catalog.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self { index: 0, len })
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward, wrapping past the last entry
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step backward, wrapping past the first entry
    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Apply an event and return the new index
    pub fn apply(&mut self, event: Event) -> usize {
        match event {
            Event::Advance => self.advance(),
            Event::Retreat => self.retreat(),
        }
    }
}
