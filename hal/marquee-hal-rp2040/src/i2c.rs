//! Blocking I2C adapter

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use marquee_hal::{I2cBus, I2cConfig, I2cError};

/// Wraps any `embedded-hal` 1.0 blocking I2C master
pub struct BlockingI2c<T>(T);

impl<T: I2c> BlockingI2c<T> {
    pub fn new(bus: T) -> Self {
        Self(bus)
    }
}

impl<T: I2c> I2cBus for BlockingI2c<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cError> {
        self.0.write(address, data).map_err(|e| match e.kind() {
            ErrorKind::NoAcknowledge(_) => I2cError::Nack,
            ErrorKind::Bus | ErrorKind::ArbitrationLoss => I2cError::Bus,
            _ => I2cError::Other,
        })
    }
}

/// embassy-rp bus settings for a marquee-hal config
pub fn rp_config(config: &I2cConfig) -> embassy_rp::i2c::Config {
    let mut rp = embassy_rp::i2c::Config::default();
    rp.frequency = config.frequency;
    rp
}
