//! Configuration type definitions
//!
//! The demo configuration is fixed at build time. The firmware build
//! script generates a `DemoConfig` literal from `marquee.toml`, and the
//! same limits are checked again by [`DemoConfig::validate`] at startup.

use crate::text::{LineLayout, LineWrapper, WrapError};

/// Panel width (pixels)
pub const PANEL_WIDTH: i32 = 128;
/// Panel height (pixels)
pub const PANEL_HEIGHT: i32 = 64;
/// Glyph cell width of the 5x8 font (pixels)
pub const GLYPH_WIDTH: i32 = 5;
/// Glyph cell height of the 5x8 font (pixels)
pub const GLYPH_HEIGHT: i32 = 8;

/// Configuration errors, all fatal at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Line width of zero characters
    InvalidLineWidth,
    /// Display region of zero lines
    InvalidLineLimit,
    /// Line pitch of zero or fewer pixels
    InvalidLineHeight,
    /// Text region does not fit on the panel
    RegionOutOfBounds,
    /// Feedback tone of 0 Hz
    InvalidToneFrequency,
    /// Catalog has no messages
    EmptyCatalog,
    /// Catalog holds more than `MAX_MESSAGES` messages
    CatalogTooLarge,
    /// A message wraps to more lines than the region holds
    MessageOverflow {
        /// Catalog index of the offending message
        index: usize,
        /// Lines it wraps to
        needed: usize,
        /// Lines the region allows
        max: usize,
    },
}

/// Text region configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutConfig {
    /// Maximum characters per line
    pub max_line_width: usize,
    /// Maximum lines shown at once
    pub max_lines: usize,
    /// Left edge of the text (pixels)
    pub origin_x: i32,
    /// Top edge of the first line (pixels)
    pub origin_y: i32,
    /// Vertical pitch between lines (pixels)
    pub line_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_line_width: 16,
            max_lines: 3,
            origin_x: 5,
            origin_y: 0,
            line_height: 8,
        }
    }
}

impl LayoutConfig {
    /// Build the wrapper for this region
    pub fn wrapper(&self) -> Result<LineWrapper, ConfigError> {
        LineWrapper::new(self.max_line_width, self.max_lines).map_err(|_| {
            if self.max_line_width == 0 {
                ConfigError::InvalidLineWidth
            } else {
                ConfigError::InvalidLineLimit
            }
        })
    }

    /// Right and bottom pixel edges of a full region, exclusive
    ///
    /// Sized for `max_lines` lines of `max_line_width` glyphs each.
    pub fn extent(&self) -> (i64, i64) {
        let width = i64::try_from(self.max_line_width).unwrap_or(i64::MAX);
        let extra_lines = i64::try_from(self.max_lines.saturating_sub(1)).unwrap_or(i64::MAX);

        let right =
            i64::from(self.origin_x).saturating_add(width.saturating_mul(i64::from(GLYPH_WIDTH)));
        let bottom = i64::from(self.origin_y)
            .saturating_add(extra_lines.saturating_mul(i64::from(self.line_height)))
            .saturating_add(i64::from(GLYPH_HEIGHT));
        (right, bottom)
    }

    /// Check that every line of a full region lands on the panel
    pub fn fits_panel(&self) -> bool {
        let (right, bottom) = self.extent();
        self.origin_x >= 0
            && self.origin_y >= 0
            && right <= i64::from(PANEL_WIDTH)
            && bottom <= i64::from(PANEL_HEIGHT)
    }

    /// Pixel placement for this region
    pub fn line_layout(&self) -> LineLayout {
        LineLayout {
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            line_height: self.line_height,
        }
    }
}

/// Buzzer and LED feedback for a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedbackConfig {
    /// Feedback tone frequency (Hz)
    pub tone_hz: u32,
    /// Feedback tone duration (ms)
    pub tone_ms: u32,
    /// Click pulse duration (ms)
    pub click_ms: u32,
    /// How long the LED shows the current colour (ms)
    pub led_hold_ms: u32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            tone_hz: 261, // C4
            tone_ms: 100,
            click_ms: 10,
            led_hold_ms: 50,
        }
    }
}

/// Polling loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Quiet period after a handled press before buttons are read again (ms)
    pub debounce_ms: u32,
    /// Pause between button polls when nothing is pressed (ms)
    pub poll_interval_ms: u32,
    /// Time each message stays up during the boot splash (ms, 0 skips it)
    ///
    /// Every splash frame is cleared before the next message is drawn, so
    /// messages are shown one at a time rather than piled on one screen.
    pub splash_frame_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            poll_interval_ms: 10,
            splash_frame_ms: 150,
        }
    }
}

/// Complete demo configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoConfig {
    pub layout: LayoutConfig,
    pub feedback: FeedbackConfig,
    pub timing: TimingConfig,
}

impl DemoConfig {
    /// Check the limits that do not depend on the catalog
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.max_line_width == 0 {
            return Err(ConfigError::InvalidLineWidth);
        }
        if self.layout.max_lines == 0 {
            return Err(ConfigError::InvalidLineLimit);
        }
        if self.layout.line_height <= 0 {
            return Err(ConfigError::InvalidLineHeight);
        }
        if !self.layout.fits_panel() {
            return Err(ConfigError::RegionOutOfBounds);
        }
        if self.feedback.tone_hz == 0 {
            return Err(ConfigError::InvalidToneFrequency);
        }
        Ok(())
    }
}

impl From<(usize, WrapError)> for ConfigError {
    fn from((index, err): (usize, WrapError)) -> Self {
        match err {
            WrapError::InvalidConfiguration => ConfigError::InvalidLineWidth,
            WrapError::TooManyLines { needed, max } => {
                ConfigError::MessageOverflow { index, needed, max }
            }
        }
    }
}
