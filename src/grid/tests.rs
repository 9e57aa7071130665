use crate::core::models::CourseSchedule;
use crate::core::selection::SelectionState;
use crate::core::types::{DayOfWeek, GridWindow, RowUnit, TimeSlot};
use crate::grid::{GridProjector, PALETTE_SIZE, UnplacedReason};

fn slot(day: DayOfWeek, start_minute: u16, end_minute: u16) -> TimeSlot {
    TimeSlot::new(day, start_minute, end_minute).unwrap()
}

fn course(id: &str, slots: Vec<TimeSlot>) -> CourseSchedule {
    CourseSchedule::new(id, format!("{id} title"), 3, 30, 0, slots)
}

fn weekday_window(row_unit: RowUnit) -> GridWindow {
    GridWindow::new(9, 18, row_unit, false).unwrap()
}

#[test]
fn hour_rows_map_minutes_linearly() {
    let state = SelectionState::from_initial(
        vec![course("A", vec![slot(DayOfWeek::Mon, 600, 720)])],
        18,
    );
    let layout = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);

    assert_eq!(layout.placements.len(), 1);
    let p = &layout.placements[0];
    assert_eq!(p.column, 0);
    assert_eq!(p.row_start, 1); // 10:00, one hour past the 09:00 window start
    assert_eq!(p.row_end, 3); // up to 12:00
    assert_eq!(p.color_index, 0);
    assert!(layout.unplaced.is_empty());
}

#[test]
fn half_hour_rows_double_the_resolution() {
    let state = SelectionState::from_initial(
        vec![course("A", vec![slot(DayOfWeek::Tue, 600, 690)])],
        18,
    );
    let layout = GridProjector::new(weekday_window(RowUnit::HalfHour)).project(&state);

    let p = &layout.placements[0];
    assert_eq!(p.column, 1);
    assert_eq!(p.row_start, 2); // 10:00
    assert_eq!(p.row_end, 5); // 11:30
}

#[test]
fn color_index_follows_insertion_order_and_wraps() {
    let courses: Vec<_> = (0..PALETTE_SIZE + 1)
        .map(|i| {
            course(
                &format!("C{i}"),
                vec![slot(DayOfWeek::Mon, 540 + i as u16 * 60, 540 + i as u16 * 60 + 30)],
            )
        })
        .collect();
    let state = SelectionState::from_initial(courses, 99);
    let layout = GridProjector::new(
        GridWindow::new(8, 20, RowUnit::HalfHour, false).unwrap(),
    )
    .project(&state);

    assert_eq!(layout.placements[0].color_index, 0);
    assert_eq!(layout.placements[1].color_index, 1);
    // Insertion index PALETTE_SIZE wraps back to 0.
    assert_eq!(layout.placements[PALETTE_SIZE].color_index, 0);
}

#[test]
fn partially_outside_slots_are_clipped_to_the_window() {
    let state = SelectionState::from_initial(
        vec![
            course("EARLY", vec![slot(DayOfWeek::Mon, 480, 600)]), // 08:00-10:00
            course("LATE", vec![slot(DayOfWeek::Tue, 1050, 1140)]), // 17:30-19:00
        ],
        18,
    );
    let layout = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);

    assert_eq!(layout.placements.len(), 2);
    let early = &layout.placements[0];
    assert_eq!(early.clipped_start_minute, 540);
    assert_eq!(early.row_start, 0);
    assert_eq!(early.row_end, 1);

    let late = &layout.placements[1];
    assert_eq!(late.clipped_end_minute, 1080);
    assert_eq!(late.row_start, 8);
    assert_eq!(late.row_end, 9);
}

#[test]
fn wholly_outside_slots_are_reported_not_dropped() {
    let state = SelectionState::from_initial(
        vec![course("DAWN", vec![slot(DayOfWeek::Mon, 420, 540)])], // 07:00-09:00
        18,
    );
    let layout = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);

    assert!(layout.placements.is_empty());
    assert_eq!(layout.unplaced.len(), 1);
    assert_eq!(layout.unplaced[0].reason, UnplacedReason::OutsideWindow);
    assert_eq!(layout.unplaced[0].course_id, "DAWN");
}

#[test]
fn boundary_touching_slot_counts_as_outside() {
    // Ends exactly at window start: half-open, so nothing to draw.
    let state = SelectionState::from_initial(
        vec![course("A", vec![slot(DayOfWeek::Mon, 480, 540)])],
        18,
    );
    let layout = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);
    assert_eq!(layout.unplaced[0].reason, UnplacedReason::OutsideWindow);
}

#[test]
fn weekend_slots_are_hidden_or_shown_by_configuration() {
    let state = SelectionState::from_initial(
        vec![course("SAT", vec![slot(DayOfWeek::Sat, 600, 720)])],
        18,
    );

    let hidden = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);
    assert!(hidden.placements.is_empty());
    assert_eq!(hidden.unplaced[0].reason, UnplacedReason::WeekendHidden);

    let shown = GridProjector::new(GridWindow::new(9, 18, RowUnit::Hour, true).unwrap())
        .project(&state);
    assert_eq!(shown.placements.len(), 1);
    assert_eq!(shown.placements[0].column, 5);
    assert!(shown.unplaced.is_empty());
}

#[test]
fn audit_catches_overlaps_that_bypassed_the_policy() {
    // from_initial performs no conflict checking, which is exactly the kind
    // of path the audit exists to catch.
    let state = SelectionState::from_initial(
        vec![
            course("A", vec![slot(DayOfWeek::Mon, 600, 720)]),
            course("B", vec![slot(DayOfWeek::Mon, 660, 780)]),
        ],
        18,
    );
    let layout = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);

    assert!(layout.overlap_detected());
    // The earlier insertion wins; the later course is listed, not drawn.
    assert_eq!(layout.placements.len(), 1);
    assert_eq!(layout.placements[0].course_id, "A");
    let audit: Vec<_> = layout
        .unplaced
        .iter()
        .filter(|u| u.reason == UnplacedReason::OverlapDetected)
        .collect();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].course_id, "B");
}

#[test]
fn no_conflicting_pair_ever_shares_column_rows() {
    use crate::enrollment::policy::try_enroll;

    let mut state = SelectionState::new(30);
    let candidates = [
        course("A", vec![slot(DayOfWeek::Mon, 540, 660)]),
        course("B", vec![slot(DayOfWeek::Mon, 600, 720)]), // conflicts with A
        course("C", vec![slot(DayOfWeek::Mon, 660, 780)]),
        course("D", vec![slot(DayOfWeek::Tue, 540, 660)]),
    ];
    for candidate in &candidates {
        let _ = try_enroll(&mut state, candidate);
    }

    let layout = GridProjector::new(weekday_window(RowUnit::Hour)).project(&state);
    assert!(!layout.overlap_detected());
    for (i, a) in layout.placements.iter().enumerate() {
        for b in layout.placements.iter().skip(i + 1) {
            if a.column == b.column {
                assert!(
                    a.row_end <= b.row_start || b.row_end <= a.row_start,
                    "row ranges of {} and {} intersect",
                    a.course_id,
                    b.course_id
                );
            }
        }
    }
}
