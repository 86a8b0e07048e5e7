//! Piezo buzzer driven by a plain GPIO
//!
//! Tones are generated by toggling the pin every half period with a
//! blocking delay. The caller is blocked for the whole tone.

use marquee_core::traits::ToneOutput;
use marquee_hal::{Delay, OutputPin};

/// Microseconds per second
const US_PER_S: u32 = 1_000_000;

/// Square-wave buzzer
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: Delay> Buzzer<P, D> {
    /// Create a buzzer; the pin is driven low
    pub fn new(pin: P, delay: D) -> Self {
        let mut buzzer = Self { pin, delay };
        buzzer.pin.set_low();
        buzzer
    }

    /// Timing of a tone as `(half_period_us, cycles)`
    ///
    /// The period is truncated to whole microseconds and only whole cycles
    /// are played, so a tone may end slightly early.
    pub fn timing(frequency_hz: u32, duration_ms: u32) -> (u32, u32) {
        if frequency_hz == 0 {
            return (0, 0);
        }
        let period_us = US_PER_S / frequency_hz;
        if period_us == 0 {
            return (0, 0);
        }
        let cycles = duration_ms.saturating_mul(1_000) / period_us;
        (period_us / 2, cycles)
    }
}

impl<P: OutputPin, D: Delay> ToneOutput for Buzzer<P, D> {
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        let (half_us, cycles) = Self::timing(frequency_hz, duration_ms);
        for _ in 0..cycles {
            self.pin.set_high();
            self.delay.delay_us(half_us);
            self.pin.set_low();
            self.delay.delay_us(half_us);
        }
    }

    fn click(&mut self, duration_ms: u32) {
        self.pin.set_high();
        self.delay.delay_ms(duration_ms);
        self.pin.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Clock, MockDelay, MockPin};

    fn make_buzzer() -> (Buzzer<MockPin, MockDelay>, Clock) {
        let clock = Clock::default();
        let buzzer = Buzzer::new(MockPin::new(&clock), MockDelay(clock.clone()));
        (buzzer, clock)
    }

    #[test]
    fn test_middle_c_timing() {
        // 1_000_000 / 261 = 3831 us, 100_000 / 3831 = 26
        assert_eq!(Buzzer::<MockPin, MockDelay>::timing(261, 100), (1915, 26));
    }

    #[test]
    fn test_tone_waveform() {
        let (mut buzzer, clock) = make_buzzer();
        buzzer.pin.edges.borrow_mut().clear();

        buzzer.tone(261, 100);

        let edges = buzzer.pin.edges.borrow();
        assert_eq!(edges.len(), 52);
        for (i, &(t, high)) in edges.iter().enumerate() {
            assert_eq!(high, i % 2 == 0);
            assert_eq!(t, i as u64 * 1915);
        }
        assert_eq!(clock.now_us(), 99_580);
        assert!(!buzzer.pin.is_set_high());
    }

    #[test]
    fn test_zero_frequency_is_silent() {
        let (mut buzzer, clock) = make_buzzer();
        buzzer.pin.edges.borrow_mut().clear();

        buzzer.tone(0, 100);

        assert!(buzzer.pin.edges.borrow().is_empty());
        assert_eq!(clock.now_us(), 0);
    }

    #[test]
    fn test_zero_duration_is_silent() {
        let (mut buzzer, clock) = make_buzzer();
        buzzer.tone(261, 0);
        assert_eq!(clock.now_us(), 0);
    }

    #[test]
    fn test_click_pulse() {
        let (mut buzzer, clock) = make_buzzer();
        buzzer.pin.edges.borrow_mut().clear();

        buzzer.click(10);

        assert_eq!(*buzzer.pin.edges.borrow(), vec![(0, true), (10_000, false)]);
        assert_eq!(clock.now_us(), 10_000);
    }

    #[test]
    fn test_starts_low() {
        let (buzzer, _) = make_buzzer();
        assert!(!buzzer.pin.is_set_high());
        assert_eq!(*buzzer.pin.edges.borrow(), vec![(0, false)]);
    }
}
