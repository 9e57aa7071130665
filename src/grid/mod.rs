use crate::core::selection::SelectionState;
use crate::core::types::{GridWindow, TimeSlot};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

#[cfg(test)]
mod tests;

/// Size of the rendering palette `color_index` wraps around. The UI palette
/// asserts it has exactly this many entries.
pub const PALETTE_SIZE: usize = 8;

/// One slot placed on the weekly grid: day column, row span, stable color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub course_id: String,
    pub column: usize,
    pub row_start: usize,
    pub row_end: usize,
    pub color_index: usize,
    /// Slot minutes after clipping to the window, for renderers that draw
    /// finer than the row unit.
    pub clipped_start_minute: u16,
    pub clipped_end_minute: u16,
}

/// Why a slot could not be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, Serialize)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum UnplacedReason {
    /// Weekend slot with a five-column window.
    WeekendHidden,
    /// Slot lies wholly outside the display window.
    OutsideWindow,
    /// The defense-in-depth audit found an overlap that the conflict
    /// detector should have made impossible. This signals a bug upstream;
    /// the slot is listed here instead of being drawn over another block.
    OverlapDetected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unplaced {
    pub course_id: String,
    pub slot: TimeSlot,
    pub reason: UnplacedReason,
}

/// Projection result: drawable placements plus everything that was kept off
/// the grid, with reasons. Renderers draw `placements` and list `unplaced`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub unplaced: Vec<Unplaced>,
}

impl Layout {
    /// True when the overlap audit fired; callers should log this loudly,
    /// it means a state mutation bypassed the enrollment policy.
    pub fn overlap_detected(&self) -> bool {
        self.unplaced
            .iter()
            .any(|u| u.reason == UnplacedReason::OverlapDetected)
    }
}

/// Maps enrolled courses onto a day-column / time-row grid.
///
/// Clipping policy (uniform across all renderers): a slot partially outside
/// the window is clipped to the window edge; a slot wholly outside it is
/// reported as `OutsideWindow`. Weekend slots are reported as
/// `WeekendHidden` unless the window renders seven columns. Nothing is ever
/// silently dropped.
#[derive(Debug, Clone)]
pub struct GridProjector {
    window: GridWindow,
    palette_size: usize,
}

impl GridProjector {
    pub fn new(window: GridWindow) -> Self {
        Self {
            window,
            palette_size: PALETTE_SIZE,
        }
    }

    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size.max(1);
        self
    }

    pub fn window(&self) -> &GridWindow {
        &self.window
    }

    /// Project the enrolled set. `color_index` is the course's insertion
    /// index modulo the palette size, so colors are stable for as long as
    /// the insertion order is; a course removed and re-added may change
    /// color.
    ///
    /// The audit at the end re-checks, independently of the enrollment
    /// policy, that no two placements in one column overlap in time. The
    /// earlier placement wins; the later one is moved to `unplaced`. The
    /// audit compares clipped minute ranges, not row spans: with coarse row
    /// units two adjacent slots can share a row without actually
    /// overlapping, and that is a rendering artifact, not a conflict.
    pub fn project(&self, state: &SelectionState) -> Layout {
        let mut layout = Layout::default();

        for (index, course) in state.enrolled_courses().enumerate() {
            let color_index = index % self.palette_size;
            for slot in &course.slots {
                match self.place(slot) {
                    Ok((column, clipped_start, clipped_end)) => {
                        let (row_start, row_end) = self.rows_for(clipped_start, clipped_end);
                        layout.placements.push(Placement {
                            course_id: course.course_id.clone(),
                            column,
                            row_start,
                            row_end,
                            color_index,
                            clipped_start_minute: clipped_start,
                            clipped_end_minute: clipped_end,
                        });
                    }
                    Err(reason) => layout.unplaced.push(Unplaced {
                        course_id: course.course_id.clone(),
                        slot: *slot,
                        reason,
                    }),
                }
            }
        }

        self.audit_overlaps(&mut layout);
        layout
    }

    fn place(&self, slot: &TimeSlot) -> std::result::Result<(usize, u16, u16), UnplacedReason> {
        let column = slot
            .day
            .column_index(self.window.include_weekend())
            .ok_or(UnplacedReason::WeekendHidden)?;

        let win_start = self.window.start_minute();
        let win_end = self.window.end_minute();
        if slot.end_minute <= win_start || slot.start_minute >= win_end {
            return Err(UnplacedReason::OutsideWindow);
        }

        let clipped_start = slot.start_minute.max(win_start);
        let clipped_end = slot.end_minute.min(win_end);
        Ok((column, clipped_start, clipped_end))
    }

    /// Linear minute-to-row mapping: start rounds down, end rounds up, so a
    /// block always covers every row it touches.
    fn rows_for(&self, clipped_start: u16, clipped_end: u16) -> (usize, usize) {
        let unit = self.window.row_unit().minutes();
        let offset_start = clipped_start - self.window.start_minute();
        let offset_end = clipped_end - self.window.start_minute();
        let row_start = (offset_start / unit) as usize;
        let row_end = (offset_end.div_ceil(unit) as usize).max(row_start + 1);
        (row_start, row_end)
    }

    fn audit_overlaps(&self, layout: &mut Layout) {
        let mut accepted: Vec<Placement> = Vec::with_capacity(layout.placements.len());
        let mut rejected: Vec<Unplaced> = Vec::new();

        for placement in layout.placements.drain(..) {
            let collides = accepted.iter().any(|kept| {
                kept.column == placement.column
                    && kept.clipped_start_minute < placement.clipped_end_minute
                    && placement.clipped_start_minute < kept.clipped_end_minute
            });
            if collides {
                rejected.push(Unplaced {
                    course_id: placement.course_id.clone(),
                    slot: TimeSlot {
                        day: day_for_column(placement.column),
                        start_minute: placement.clipped_start_minute,
                        end_minute: placement.clipped_end_minute,
                    },
                    reason: UnplacedReason::OverlapDetected,
                });
            } else {
                accepted.push(placement);
            }
        }

        layout.placements = accepted;
        layout.unplaced.extend(rejected);
    }
}

fn day_for_column(column: usize) -> crate::core::types::DayOfWeek {
    use strum::IntoEnumIterator;
    crate::core::types::DayOfWeek::iter()
        .nth(column)
        .unwrap_or(crate::core::types::DayOfWeek::Mon)
}
