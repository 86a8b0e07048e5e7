//! Build-time configuration
//!
//! `build.rs` validates `marquee.toml` and generates the constants pulled
//! in below. Everything here was already checked on the host, but the
//! firmware checks again rather than trusting a stale build.

use marquee_core::config::{
    ConfigError, DemoConfig, FeedbackConfig, LayoutConfig, MessageCatalog, TimingConfig,
};
use marquee_hal_rp2040::{parse_pin_string, PinSpec};

include!(concat!(env!("OUT_DIR"), "/marquee_config.rs"));

/// Pins for the peripherals assigned from the config
pub struct PinAssignments {
    pub button_a: PinSpec,
    pub button_b: PinSpec,
    pub buzzer: PinSpec,
    pub led: PinSpec,
}

/// A pin string that did not parse, named by its config key
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BadPin(pub &'static str);

/// The message catalog
pub fn catalog() -> Result<MessageCatalog, ConfigError> {
    MessageCatalog::new(MESSAGES)
}

/// Parse the pin strings
pub fn pins() -> Result<PinAssignments, BadPin> {
    let parse = |key: &'static str, value: &str| parse_pin_string(value).ok_or(BadPin(key));

    Ok(PinAssignments {
        button_a: parse("button_a", BUTTON_A_PIN)?,
        button_b: parse("button_b", BUTTON_B_PIN)?,
        buzzer: parse("buzzer", BUZZER_PIN)?,
        led: parse("led", LED_PIN)?,
    })
}
