//! Push button on a GPIO input
//!
//! Buttons are wired to ground with the internal pull-up enabled, so a
//! press reads low. Debouncing is left to the polling loop.

use marquee_core::traits;
use marquee_hal::InputPin;

/// Momentary push button
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin HIGH
    active_high: bool,
}

impl<P: InputPin> Button<P> {
    /// Create a button with explicit polarity
    pub fn new(pin: P, active_high: bool) -> Self {
        Self { pin, active_high }
    }

    /// Button to ground with pull-up (pressed reads low)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Button to VCC with pull-down (pressed reads high)
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: InputPin> traits::Button for Button<P> {
    fn is_pressed(&self) -> bool {
        self.pin.is_high() == self.active_high
    }
}
