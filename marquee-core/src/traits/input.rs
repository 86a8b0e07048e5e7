//! Button inputs

/// A momentary push button
///
/// Implementations handle the electrical polarity; the core only sees
/// pressed or released.
pub trait Button {
    /// Instantaneous level check, no waiting
    fn is_pressed(&self) -> bool;
}
