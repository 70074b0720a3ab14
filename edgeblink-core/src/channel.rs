//! Logical button/LED channels

/// One button and the LED it controls
///
/// The discriminant doubles as the single-byte tag carried through the shared
/// button queue of the toggle-blink pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelId {
    Red = b'R',
    Green = b'G',
    Yellow = b'Y',
}

impl ChannelId {
    /// Queue tag for this channel
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a queue tag; unknown bytes yield `None`
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'R' => Some(Self::Red),
            b'G' => Some(Self::Green),
            b'Y' => Some(Self::Yellow),
            _ => None,
        }
    }

    /// Short label used in log lines ("R", "G", "Y")
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Yellow => "Y",
        }
    }
}
