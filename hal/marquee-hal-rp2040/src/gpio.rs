//! GPIO wrappers and pin strings
//!
//! Pins are named in the config file the same way throughout:
//! - `"gpio11"` plain pin
//! - `"!gpio12"` inverts the default polarity: outputs become active-low,
//!   buttons become active-high
//! - `"^gpio5"` input with pull-up
//!
//! Modifiers may be combined in any order (`"^!gpio5"`).

use embassy_rp::gpio::{Input, Output};

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// A pin parsed from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSpec {
    /// GPIO number
    pub pin: u8,
    /// Default polarity is inverted (`!` prefix)
    pub inverted: bool,
    /// Enable the internal pull-up
    pub pull_up: bool,
}

/// Parse a pin string from config
///
/// Returns `None` for anything that is not `gpio0`..`gpio29` with
/// optional `!`/`^` prefixes.
pub fn parse_pin_string(s: &str) -> Option<PinSpec> {
    let mut s = s.trim();
    let mut inverted = false;
    let mut pull_up = false;

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let num_str = s.strip_prefix("gpio")?;
    // Reject "+5" and the like, which u8::from_str would accept
    if num_str.is_empty() || !num_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let pin: u8 = num_str.parse().ok()?;

    if pin >= GPIO_COUNT {
        return None;
    }

    Some(PinSpec {
        pin,
        inverted,
        pull_up,
    })
}

/// Push-pull output implementing [`marquee_hal::OutputPin`]
pub struct GpioOutput(Output<'static>);

impl GpioOutput {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl marquee_hal::OutputPin for GpioOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input implementing [`marquee_hal::InputPin`]
pub struct GpioInput(Input<'static>);

impl GpioInput {
    pub fn new(input: Input<'static>) -> Self {
        Self(input)
    }
}

impl marquee_hal::InputPin for GpioInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
