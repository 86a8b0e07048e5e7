//! Blocking delays
//!
//! Tone generation toggles a pin every half period, so these delays must
//! block the caller rather than yield to an executor.

/// Blocking delay provider
pub trait Delay {
    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
