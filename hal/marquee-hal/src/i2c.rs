//! I2C bus abstractions
//!
//! The OLED is write-only from the firmware's point of view, so only
//! master writes are modelled.

/// Errors reported by an I2C bus implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Address or data byte not acknowledged
    Nack,
    /// Arbitration lost or bus fault
    Bus,
    /// Anything else the chip HAL reports
    Other,
}

/// I2C bus master
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, including any control byte
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Fast mode (400 kHz), what SSD1306 modules are usually run at
    pub const FAST: Self = Self { frequency: 400_000 };
}
