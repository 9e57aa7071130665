pub mod ascii;
pub mod grid_printer;
pub mod palette;
mod width_util;

pub use grid_printer::GridPrinter;
pub use palette::SlotColor;
