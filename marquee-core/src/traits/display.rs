//! Text display sink
//!
//! The core hands the display one `(x, y, text)` triple per wrapped line.
//! Drawing goes to a buffer; nothing reaches the panel until `flush`.

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// Panel was never initialised
    NotInitialized,
}

/// Pixel-addressed text display
pub trait TextDisplay {
    /// Blank the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw `text` with its top-left corner at pixel (`x`, `y`)
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError>;

    /// Push the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
