//! Dynamic pin allocation for config-driven hardware setup
//!
//! The buttons, buzzer and LED are assigned by number from the config
//! file, so their pins are handed out at runtime. The OLED bus pins are
//! bound to I2C1 at compile time and are reserved.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{I2C1, PIN_14, PIN_15};
use embassy_rp::{Peri, Peripherals};

use crate::gpio::GPIO_COUNT;

/// I2C1 data pin
pub const I2C_SDA_PIN: u8 = 14;
/// I2C1 clock pin
pub const I2C_SCL_PIN: u8 = 15;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for the display bus
    Reserved,
}

/// Check a pin number can be handed out by the bank
pub fn check_pin(pin_num: u8) -> Result<usize, PinError> {
    if pin_num >= GPIO_COUNT {
        return Err(PinError::InvalidPin);
    }
    if pin_num == I2C_SDA_PIN || pin_num == I2C_SCL_PIN {
        return Err(PinError::Reserved);
    }
    Ok(pin_num as usize)
}

/// Peripherals that stay typed after the pin bank is built
pub struct BoardPeripherals {
    pub i2c1: Peri<'static, I2C1>,
    pub i2c_sda: Peri<'static, PIN_14>,
    pub i2c_scl: Peri<'static, PIN_15>,
}

/// Pin bank that holds the GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Split the chip peripherals into a pin bank and the display bus
    pub fn new(p: Peripherals) -> (Self, BoardPeripherals) {
        let board = BoardPeripherals {
            i2c1: p.I2C1,
            i2c_sda: p.PIN_14,
            i2c_scl: p.PIN_15,
        };
        let bank = Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                None, // I2C1 SDA
                None, // I2C1 SCL
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };
        (bank, board)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        let idx = check_pin(pin_num)?;
        self.pins[idx].take().ok_or(PinError::AlreadyTaken)
    }
}
