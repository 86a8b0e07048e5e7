//! Events that trigger state transitions

/// Physical buttons on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Button A, moves forward through the catalog
    A,
    /// Button B, moves backward through the catalog
    B,
}

/// Navigation events, one per accepted button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Show the next message, wrapping to the first
    Advance,
    /// Show the previous message, wrapping to the last
    Retreat,
}

impl ButtonId {
    /// Order buttons are read in on every poll
    pub const ALL: [ButtonId; 2] = [ButtonId::A, ButtonId::B];
}

impl Event {
    /// Event fired by a press of `button`
    pub fn from_button(button: ButtonId) -> Self {
        match button {
            ButtonId::A => Event::Advance,
            ButtonId::B => Event::Retreat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_mapping() {
        assert_eq!(Event::from_button(ButtonId::A), Event::Advance);
        assert_eq!(Event::from_button(ButtonId::B), Event::Retreat);
    }

    #[test]
    fn test_scan_order_a_first() {
        assert_eq!(ButtonId::ALL, [ButtonId::A, ButtonId::B]);
    }
}
