//! Greedy word wrapping
//!
//! Words are packed left to right: a word joins the current line if the line
//! plus a separating space plus the word still fits, otherwise it starts a
//! new line. Words are never split. A word longer than the width is placed
//! alone on its own line and is allowed to overflow it.
//!
//! Widths are counted in characters, not bytes.

use alloc::string::String;
use alloc::vec::Vec;

/// Wrapping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WrapError {
    /// Line width of zero, no line can ever be built
    InvalidConfiguration,
    /// Message needs more lines than the display region holds
    TooManyLines {
        /// Lines the message wraps to
        needed: usize,
        /// Lines the region allows
        max: usize,
    },
}

/// Wrap `message` into lines of at most `width` characters.
///
/// An empty or whitespace-only message produces no lines.
pub fn wrap(message: &str, width: usize) -> Result<Vec<String>, WrapError> {
    if width == 0 {
        return Err(WrapError::InvalidConfiguration);
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in message.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(core::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if line_len > 0 {
        lines.push(line);
    }

    Ok(lines)
}

/// Word wrapper bound to a display region
///
/// Holds the line width and the number of lines the region can show.
/// Messages that need more lines are rejected rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineWrapper {
    width: usize,
    max_lines: usize,
}

impl LineWrapper {
    /// Create a wrapper for a region of `max_lines` lines of `width` characters
    pub fn new(width: usize, max_lines: usize) -> Result<Self, WrapError> {
        if width == 0 || max_lines == 0 {
            return Err(WrapError::InvalidConfiguration);
        }
        Ok(Self { width, max_lines })
    }

    /// Line width in characters
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maximum number of lines
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Wrap a message, failing if it does not fit the region
    pub fn wrap(&self, message: &str) -> Result<Vec<String>, WrapError> {
        let lines = wrap(message, self.width)?;
        if lines.len() > self.max_lines {
            return Err(WrapError::TooManyLines {
                needed: lines.len(),
                max: self.max_lines,
            });
        }
        Ok(lines)
    }
}
