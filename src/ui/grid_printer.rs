use std::io::Write;

use strum::IntoEnumIterator;

use crate::core::types::{DayOfWeek, GridWindow};
use crate::grid::Layout;
use crate::ui::ascii::{STYLE_BOLD, STYLE_RESET};
use crate::ui::palette::SlotColor;
use crate::ui::width_util::WidthUtil;

const TIME_COL_WIDTH: usize = 6;
const MIN_CELL_WIDTH: usize = 8;

/// Renders a projected layout as an ANSI week grid: day columns, one text
/// row per window row, each placed course painted with its palette color.
#[derive(Debug, Default, Clone)]
pub struct GridPrinter {
    util: WidthUtil,
}

impl GridPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_to_string(&self, window: &GridWindow, layout: &Layout) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec<u8> cannot fail.
        let _ = self.render(&mut buf, window, layout);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
        window: &GridWindow,
        layout: &Layout,
    ) -> std::io::Result<()> {
        let rows = window.rows();
        let cols = window.columns();
        let cell_width = self.cell_width(layout, cols);

        // cells[row][col] = (placement index, is the block's first row)
        let mut cells: Vec<Vec<Option<(usize, bool)>>> = vec![vec![None; cols]; rows];
        for (idx, p) in layout.placements.iter().enumerate() {
            for row in p.row_start..p.row_end.min(rows) {
                if p.column < cols {
                    cells[row][p.column] = Some((idx, row == p.row_start));
                }
            }
        }

        self.render_header(out, cols, cell_width)?;
        for (row, row_cells) in cells.iter().enumerate() {
            let minute = window.minute_of_row(row);
            write!(out, "{:02}:{:02} ", minute / 60, minute % 60)?;
            for cell in row_cells {
                let text = match cell {
                    Some((idx, is_start)) => {
                        let p = &layout.placements[*idx];
                        let color = SlotColor::from_index(p.color_index);
                        let label = if *is_start {
                            truncate(&p.course_id, cell_width - 1)
                        } else {
                            "|".to_string()
                        };
                        color.paint(label)
                    }
                    None => String::new(),
                };
                write!(out, "{}", self.util.pad_visible(&text, cell_width))?;
            }
            writeln!(out)?;
        }

        self.render_unplaced(out, layout)
    }

    fn render_header<W: Write + ?Sized>(
        &self,
        out: &mut W,
        cols: usize,
        cell_width: usize,
    ) -> std::io::Result<()> {
        write!(out, "{}", " ".repeat(TIME_COL_WIDTH))?;
        for day in DayOfWeek::iter().take(cols) {
            let label = format!("{}{}{}", STYLE_BOLD, day, STYLE_RESET);
            write!(out, "{}", self.util.pad_visible(&label, cell_width))?;
        }
        writeln!(out)
    }

    fn render_unplaced<W: Write + ?Sized>(
        &self,
        out: &mut W,
        layout: &Layout,
    ) -> std::io::Result<()> {
        if layout.unplaced.is_empty() {
            return Ok(());
        }
        writeln!(out, "Unplaced:")?;
        for u in &layout.unplaced {
            writeln!(out, "  {} ({}, {})", u.course_id, u.slot, u.reason)?;
        }
        Ok(())
    }

    /// Cell width sized to the longest course id that still fits the
    /// terminal; painted labels are measured by visible width.
    fn cell_width(&self, layout: &Layout, cols: usize) -> usize {
        let longest_id = layout
            .placements
            .iter()
            .map(|p| p.course_id.chars().count())
            .max()
            .unwrap_or(0);
        let wanted = (longest_id + 2).max(MIN_CELL_WIDTH);
        let available = self
            .util
            .terminal_width()
            .saturating_sub(TIME_COL_WIDTH)
            .checked_div(cols)
            .unwrap_or(MIN_CELL_WIDTH);
        wanted.min(available.max(MIN_CELL_WIDTH))
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
