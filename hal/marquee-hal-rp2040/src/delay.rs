//! Blocking delay adapter

use embedded_hal::delay::DelayNs;

/// Wraps any `embedded-hal` 1.0 blocking delay, e.g. `embassy_time::Delay`
pub struct BlockingDelay<D>(D);

impl<D: DelayNs> BlockingDelay<D> {
    pub fn new(delay: D) -> Self {
        Self(delay)
    }
}

impl BlockingDelay<embassy_time::Delay> {
    /// Busy-wait on the embassy time driver
    pub fn embassy() -> Self {
        Self(embassy_time::Delay)
    }
}

impl<D: DelayNs> marquee_hal::Delay for BlockingDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
