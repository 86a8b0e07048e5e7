//! Status LED on a single GPIO
//!
//! The board has one LED line. Every colour of the cycle drives that same
//! pin, so the colour is only visible in the logs.

use marquee_core::state::LedColor;
use marquee_core::traits::Indicator;
use marquee_hal::{Delay, OutputPin};

/// Single-pin status LED
///
/// The pin can be configured as active-high (default) or active-low.
pub struct StatusLed<P, D> {
    pin: P,
    delay: D,
    /// If true, LED on = pin LOW
    inverted: bool,
}

impl<P: OutputPin, D: Delay> StatusLed<P, D> {
    /// Create a status LED, initially off
    pub fn new(pin: P, delay: D, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            delay,
            inverted,
        };
        led.set_lit(false);
        led
    }

    /// Switch the LED on or off
    pub fn set_lit(&mut self, lit: bool) {
        self.pin.set_state(lit != self.inverted);
    }

    /// Check if the LED is lit
    pub fn is_lit(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

impl<P: OutputPin, D: Delay> Indicator for StatusLed<P, D> {
    fn show(&mut self, _color: LedColor, hold_ms: u32) {
        self.set_lit(true);
        self.delay.delay_ms(hold_ms);
        self.set_lit(false);
    }
}
