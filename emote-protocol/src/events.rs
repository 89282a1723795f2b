//! Button press events

/// A debounced press of one of the three device buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Middle button
    Select,
    /// Upper button, shows the last received message text
    Up,
    /// Lower button
    Down,
}

// Wire format values, used when presses are bridged or simulated over the link
const BUTTON_SELECT: u8 = 0x10;
const BUTTON_UP: u8 = 0x11;
const BUTTON_DOWN: u8 = 0x12;

impl ButtonEvent {
    pub const ALL: [ButtonEvent; 3] = [ButtonEvent::Select, ButtonEvent::Up, ButtonEvent::Down];

    /// Parse a button from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            BUTTON_SELECT => Some(ButtonEvent::Select),
            BUTTON_UP => Some(ButtonEvent::Up),
            BUTTON_DOWN => Some(ButtonEvent::Down),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            ButtonEvent::Select => BUTTON_SELECT,
            ButtonEvent::Up => BUTTON_UP,
            ButtonEvent::Down => BUTTON_DOWN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ButtonEvent::Select => "select",
            ButtonEvent::Up => "up",
            ButtonEvent::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bytes_are_distinct() {
        let bytes = ButtonEvent::ALL.map(ButtonEvent::to_byte);
        assert_ne!(bytes[0], bytes[1]);
        assert_ne!(bytes[1], bytes[2]);
        assert_ne!(bytes[0], bytes[2]);

        for button in ButtonEvent::ALL {
            assert_eq!(ButtonEvent::from_byte(button.to_byte()), Some(button));
        }
    }

    #[test]
    fn test_unknown_button() {
        assert!(ButtonEvent::from_byte(0x00).is_none());
        assert!(ButtonEvent::from_byte(0x13).is_none());
        assert!(ButtonEvent::from_byte(0xFF).is_none());
    }
}
