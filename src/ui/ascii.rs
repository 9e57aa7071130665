// ASCII control codes and helpers for ANSI sequence composition.

/// ESC (escape) control character.
pub const ESC: char = '\u{1B}';

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text, used for the day header row.
pub const STYLE_BOLD: &str = crate::csi!("1m");
