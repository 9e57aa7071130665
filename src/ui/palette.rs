use crate::grid::PALETTE_SIZE;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Rendering palette for enrolled-course blocks. A course's `color_index`
/// (insertion index modulo `PALETTE_SIZE`) picks an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SlotColor {
    #[strum(serialize = "red", to_string = "RED")]
    Red,
    #[strum(serialize = "green", to_string = "GREEN")]
    Green,
    #[strum(serialize = "yellow", to_string = "YELLOW")]
    Yellow,
    #[strum(serialize = "blue", to_string = "BLUE")]
    Blue,
    #[strum(serialize = "magenta", to_string = "MAGENTA")]
    Magenta,
    #[strum(serialize = "cyan", to_string = "CYAN")]
    Cyan,
    #[strum(serialize = "bright_green", to_string = "BRIGHT_GREEN")]
    BrightGreen,
    #[strum(serialize = "bright_blue", to_string = "BRIGHT_BLUE")]
    BrightBlue,
}

/// Palette order matters: it is indexed by `color_index`.
pub const PALETTE: [SlotColor; PALETTE_SIZE] = [
    SlotColor::Red,
    SlotColor::Green,
    SlotColor::Yellow,
    SlotColor::Blue,
    SlotColor::Magenta,
    SlotColor::Cyan,
    SlotColor::BrightGreen,
    SlotColor::BrightBlue,
];

impl SlotColor {
    pub const RESET: &'static str = crate::csi!("0m");

    pub fn from_index(color_index: usize) -> Self {
        PALETTE[color_index % PALETTE.len()]
    }

    /// Foreground ANSI color for this slot color.
    pub fn ansi_fg(self) -> &'static str {
        match self {
            SlotColor::Red => crate::csi!("31m"),
            SlotColor::Green => crate::csi!("32m"),
            SlotColor::Yellow => crate::csi!("33m"),
            SlotColor::Blue => crate::csi!("34m"),
            SlotColor::Magenta => crate::csi!("35m"),
            SlotColor::Cyan => crate::csi!("36m"),
            SlotColor::BrightGreen => crate::csi!("92m"),
            SlotColor::BrightBlue => crate::csi!("94m"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }
}
