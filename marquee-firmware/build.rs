//! Build script for marquee-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates marquee.toml at compile time
//! - Generates `marquee_config.rs` with the validated values

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use marquee_core::config::{
    ConfigError, DemoConfig, FeedbackConfig, LayoutConfig, TimingConfig, MAX_MESSAGES,
    PANEL_HEIGHT, PANEL_WIDTH,
};
use marquee_core::text::WrapError;
use serde::Deserialize;

/// Pins bound to I2C1 for the display
const RESERVED_PINS: [u8; 2] = [14, 15];

fn main() {
    setup_linker();
    let config = load_config();
    validate(&config);
    generate(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MarqueeToml {
    #[serde(default)]
    display: DisplaySection,
    pins: PinsSection,
    #[serde(default)]
    feedback: FeedbackSection,
    #[serde(default)]
    timing: TimingSection,
    catalog: CatalogSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DisplaySection {
    address: u8,
    i2c_frequency: u32,
    max_line_width: usize,
    max_lines: usize,
    origin_x: i32,
    origin_y: i32,
    line_height: i32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            address: 0x3C,
            i2c_frequency: 400_000,
            max_line_width: layout.max_line_width,
            max_lines: layout.max_lines,
            origin_x: layout.origin_x,
            origin_y: layout.origin_y,
            line_height: layout.line_height,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PinsSection {
    button_a: String,
    button_b: String,
    buzzer: String,
    led: String,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FeedbackSection {
    tone_hz: u32,
    tone_ms: u32,
    click_ms: u32,
    led_hold_ms: u32,
}

impl Default for FeedbackSection {
    fn default() -> Self {
        let feedback = FeedbackConfig::default();
        Self {
            tone_hz: feedback.tone_hz,
            tone_ms: feedback.tone_ms,
            click_ms: feedback.click_ms,
            led_hold_ms: feedback.led_hold_ms,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TimingSection {
    debounce_ms: u32,
    poll_interval_ms: u32,
    splash_frame_ms: u32,
}

impl Default for TimingSection {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            debounce_ms: timing.debounce_ms,
            poll_interval_ms: timing.poll_interval_ms,
            splash_frame_ms: timing.splash_frame_ms,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogSection {
    messages: Vec<String>,
}

impl MarqueeToml {
    fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            layout: LayoutConfig {
                max_line_width: self.display.max_line_width,
                max_lines: self.display.max_lines,
                origin_x: self.display.origin_x,
                origin_y: self.display.origin_y,
                line_height: self.display.line_height,
            },
            feedback: FeedbackConfig {
                tone_hz: self.feedback.tone_hz,
                tone_ms: self.feedback.tone_ms,
                click_ms: self.feedback.click_ms,
                led_hold_ms: self.feedback.led_hold_ms,
            },
            timing: TimingConfig {
                debounce_ms: self.timing.debounce_ms,
                poll_interval_ms: self.timing.poll_interval_ms,
                splash_frame_ms: self.timing.splash_frame_ms,
            },
        }
    }

    fn pins(&self) -> [(&'static str, &str); 4] {
        [
            ("button_a", self.pins.button_a.as_str()),
            ("button_b", self.pins.button_b.as_str()),
            ("buzzer", self.pins.buzzer.as_str()),
            ("led", self.pins.led.as_str()),
        ]
    }
}

/// Abort the build with a boxed report
fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Read and parse marquee.toml
fn load_config() -> MarqueeToml {
    println!("cargo:rerun-if-changed=marquee.toml");

    let config_path = Path::new("marquee.toml");

    if !config_path.exists() {
        fail(
            "marquee.toml not found!",
            &[
                "The firmware requires a marquee.toml configuration file.".into(),
                "Please create one in the marquee-firmware directory.".into(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read marquee.toml", &[e.to_string()]),
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid marquee.toml",
            &e.to_string()
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(String::from)
                .collect::<Vec<_>>(),
        ),
    }
}

/// GPIO number of a `gpioN` / `^gpioN` / `!gpioN` pin string
fn pin_number(s: &str) -> Option<u8> {
    let digits = s.trim().trim_start_matches(['!', '^']).strip_prefix("gpio")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&pin| pin < 30)
}

fn validate(config: &MarqueeToml) {
    validate_display(config);
    validate_pins(config);
    validate_catalog(config);
}

fn validate_display(config: &MarqueeToml) {
    let mut errors = Vec::new();

    match config.demo_config().validate() {
        Ok(()) => {}
        Err(ConfigError::RegionOutOfBounds) => {
            let (right, bottom) = config.demo_config().layout.extent();
            errors.push(format!(
                "[display] text region spans to ({}, {}), panel is {}x{}",
                right, bottom, PANEL_WIDTH, PANEL_HEIGHT
            ));
        }
        Err(e) => errors.push(format!("{:?}", e)),
    }
    if !matches!(config.display.address, 0x3C | 0x3D) {
        errors.push(format!(
            "[display] address 0x{:02X} is not an SSD1306 address",
            config.display.address
        ));
    }
    if config.display.i2c_frequency == 0 || config.display.i2c_frequency > 1_000_000 {
        errors.push("[display] i2c_frequency must be 1-1000000 Hz".into());
    }
    if config.timing.poll_interval_ms == 0 {
        errors.push("[timing] poll_interval_ms must be at least 1".into());
    }

    if !errors.is_empty() {
        fail("Invalid display/feedback configuration", &errors);
    }
}

fn validate_pins(config: &MarqueeToml) {
    let mut errors = Vec::new();
    let mut used: Vec<(u8, &str)> = Vec::new();

    for (name, value) in config.pins() {
        let Some(pin) = pin_number(value) else {
            errors.push(format!("[pins] {} = '{}' is not a gpio0-gpio29 pin", name, value));
            continue;
        };
        if RESERVED_PINS.contains(&pin) {
            errors.push(format!("[pins] {} uses gpio{}, reserved for I2C1", name, pin));
        }
        if let Some((_, other)) = used.iter().find(|(p, _)| *p == pin) {
            errors.push(format!("[pins] {} and {} both use gpio{}", other, name, pin));
        }
        used.push((pin, name));
    }

    if !errors.is_empty() {
        fail("Invalid pin configuration", &errors);
    }
}

fn validate_catalog(config: &MarqueeToml) {
    let messages = &config.catalog.messages;
    let layout = config.demo_config().layout;
    let mut errors = Vec::new();

    if messages.is_empty() {
        errors.push("[catalog] messages cannot be empty".into());
    }
    if messages.len() > MAX_MESSAGES {
        errors.push(format!(
            "[catalog] {} messages, at most {} allowed",
            messages.len(),
            MAX_MESSAGES
        ));
    }

    if let Ok(wrapper) = layout.wrapper() {
        for (i, message) in messages.iter().enumerate() {
            match wrapper.wrap(message) {
                Ok(_) => {}
                Err(WrapError::TooManyLines { needed, max }) => errors.push(format!(
                    "message {} needs {} lines, display holds {}",
                    i, needed, max
                )),
                Err(WrapError::InvalidConfiguration) => {}
            }
            if !message.is_ascii() {
                println!(
                    "cargo:warning=message {} has non-ASCII characters, shown as '?' on the OLED",
                    i
                );
            }
        }
    }

    if !errors.is_empty() {
        fail("Invalid message catalog", &errors);
    }
}

/// Write `marquee_config.rs` to OUT_DIR
fn generate(config: &MarqueeToml) {
    let demo = config.demo_config();
    let mut out = String::new();

    out.push_str("// Generated by build.rs from marquee.toml\n\n");

    out.push_str("/// Message catalog, in display order\n");
    out.push_str("pub const MESSAGES: &[&str] = &[\n");
    for message in &config.catalog.messages {
        out.push_str(&format!("    {:?},\n", message));
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "/// Layout, feedback and timing\n\
         pub const DEMO_CONFIG: DemoConfig = DemoConfig {{\n\
         \x20   layout: LayoutConfig {{\n\
         \x20       max_line_width: {},\n\
         \x20       max_lines: {},\n\
         \x20       origin_x: {},\n\
         \x20       origin_y: {},\n\
         \x20       line_height: {},\n\
         \x20   }},\n\
         \x20   feedback: FeedbackConfig {{\n\
         \x20       tone_hz: {},\n\
         \x20       tone_ms: {},\n\
         \x20       click_ms: {},\n\
         \x20       led_hold_ms: {},\n\
         \x20   }},\n\
         \x20   timing: TimingConfig {{\n\
         \x20       debounce_ms: {},\n\
         \x20       poll_interval_ms: {},\n\
         \x20       splash_frame_ms: {},\n\
         \x20   }},\n\
         }};\n\n",
        demo.layout.max_line_width,
        demo.layout.max_lines,
        demo.layout.origin_x,
        demo.layout.origin_y,
        demo.layout.line_height,
        demo.feedback.tone_hz,
        demo.feedback.tone_ms,
        demo.feedback.click_ms,
        demo.feedback.led_hold_ms,
        demo.timing.debounce_ms,
        demo.timing.poll_interval_ms,
        demo.timing.splash_frame_ms,
    ));

    out.push_str(&format!(
        "/// SSD1306 I2C address\npub const DISPLAY_ADDRESS: u8 = 0x{:02X};\n\n",
        config.display.address
    ));
    out.push_str(&format!(
        "/// I2C1 clock (Hz)\npub const I2C_FREQUENCY_HZ: u32 = {};\n\n",
        config.display.i2c_frequency
    ));

    for (name, value) in config.pins() {
        out.push_str(&format!(
            "pub const {}_PIN: &str = {:?};\n",
            name.to_uppercase(),
            value.trim()
        ));
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("marquee_config.rs"), out).unwrap();
}
