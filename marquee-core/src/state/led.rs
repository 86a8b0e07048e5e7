//! LED colour cycle

/// Colour shown on the feedback LED
///
/// Steps Red → Green → Blue → Red on every navigation event, whichever
/// direction the navigation moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl LedColor {
    /// Number of colours in the cycle
    pub const COUNT: usize = 3;

    /// Next colour in the cycle
    pub fn next(self) -> Self {
        match self {
            LedColor::Red => LedColor::Green,
            LedColor::Green => LedColor::Blue,
            LedColor::Blue => LedColor::Red,
        }
    }

    /// Position in the cycle (Red = 0)
    pub fn index(self) -> usize {
        match self {
            LedColor::Red => 0,
            LedColor::Green => 1,
            LedColor::Blue => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_red() {
        assert_eq!(LedColor::default(), LedColor::Red);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(LedColor::Red.next(), LedColor::Green);
        assert_eq!(LedColor::Green.next(), LedColor::Blue);
        assert_eq!(LedColor::Blue.next(), LedColor::Red);
    }

    #[test]
    fn test_three_steps_return() {
        for start in [LedColor::Red, LedColor::Green, LedColor::Blue] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_index_is_modular() {
        let mut color = LedColor::Red;
        for step in 0..10 {
            assert_eq!(color.index(), step % LedColor::COUNT);
            color = color.next();
        }
    }
}
