//! Buzzer and LED feedback sinks
//!
//! Both run to completion before returning; the caller is blocked for the
//! whole tone or LED hold.

use crate::state::LedColor;

/// Buzzer output
pub trait ToneOutput {
    /// Square wave at `frequency_hz` for `duration_ms`
    fn tone(&mut self, frequency_hz: u32, duration_ms: u32);

    /// Single pulse of `duration_ms`
    fn click(&mut self, duration_ms: u32);
}

/// LED that shows the navigation colour
pub trait Indicator {
    /// Show `color` for `hold_ms`, then switch off
    fn show(&mut self, color: LedColor, hold_ms: u32);
}
