use crate::core::tests::slot;
use crate::core::types::{DayOfWeek, GridWindow, RowUnit, TimeSlot, parse_minute};
use crate::errors::Error;

#[test]
fn korean_tokens_normalize_all_seven_days() {
    let expected = [
        ("월", DayOfWeek::Mon),
        ("화", DayOfWeek::Tue),
        ("수", DayOfWeek::Wed),
        ("목", DayOfWeek::Thu),
        ("금", DayOfWeek::Fri),
        ("토", DayOfWeek::Sat),
        ("일", DayOfWeek::Sun),
    ];
    for (token, day) in expected {
        assert_eq!(DayOfWeek::from_token(token).unwrap(), day, "token {token}");
    }
}

#[test]
fn numeric_codes_normalize() {
    assert_eq!(DayOfWeek::from_token("1").unwrap(), DayOfWeek::Mon);
    assert_eq!(DayOfWeek::from_token("7").unwrap(), DayOfWeek::Sun);
    assert_eq!(DayOfWeek::from_code(3).unwrap(), DayOfWeek::Wed);
}

#[test]
fn english_names_normalize() {
    assert_eq!(DayOfWeek::from_token("wed").unwrap(), DayOfWeek::Wed);
    assert_eq!(DayOfWeek::from_token("Friday").unwrap(), DayOfWeek::Fri);
}

#[test]
fn unknown_day_token_is_an_error_not_a_silent_drop() {
    let err = DayOfWeek::from_token("공").unwrap_err();
    match err {
        Error::UnrecognizedDay { token, valid } => {
            assert_eq!(token, "공");
            assert!(valid.contains("1-7"));
        }
        other => panic!("expected unrecognized day, got {other:?}"),
    }
}

#[test]
fn day_codes_are_out_of_range_checked() {
    assert!(DayOfWeek::from_code(0).is_err());
    assert!(DayOfWeek::from_code(8).is_err());
}

#[test]
fn parse_minute_handles_both_clock_shapes() {
    assert_eq!(parse_minute("10:00").unwrap(), 600);
    assert_eq!(parse_minute("23:59").unwrap(), 23 * 60 + 59);
    // Seconds are truncated, not rounded.
    assert_eq!(parse_minute("10:00:45").unwrap(), 600);
}

#[test]
fn parse_minute_rejects_garbage() {
    assert!(parse_minute("1000").is_err());
    assert!(parse_minute("10-00").is_err());
    assert!(parse_minute("").is_err());
}

#[test]
fn slot_constructor_rejects_inverted_and_empty_ranges() {
    assert!(TimeSlot::new(DayOfWeek::Mon, 720, 600).is_err());
    assert!(TimeSlot::new(DayOfWeek::Mon, 600, 600).is_err());
}

#[test]
fn overlap_is_symmetric() {
    let a = slot(DayOfWeek::Mon, 600, 720);
    let b = slot(DayOfWeek::Mon, 660, 780);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));

    let c = slot(DayOfWeek::Mon, 780, 840);
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn overlap_is_half_open_at_the_boundary() {
    // One ends at 10:00, the other starts at 10:00: no overlap.
    let earlier = slot(DayOfWeek::Mon, 540, 600);
    let later = slot(DayOfWeek::Mon, 600, 660);
    assert!(!earlier.overlaps(&later));

    // One ends at 10:00, the other starts at 09:59: overlap.
    let nudged = slot(DayOfWeek::Mon, 599, 660);
    assert!(earlier.overlaps(&nudged));
}

#[test]
fn slots_on_different_days_never_overlap() {
    let mon = slot(DayOfWeek::Mon, 600, 720);
    let tue = slot(DayOfWeek::Tue, 600, 720);
    assert!(!mon.overlaps(&tue));
}

#[test]
fn weekend_columns_depend_on_window_choice() {
    assert_eq!(DayOfWeek::Mon.column_index(false), Some(0));
    assert_eq!(DayOfWeek::Fri.column_index(false), Some(4));
    assert_eq!(DayOfWeek::Sat.column_index(false), None);
    assert_eq!(DayOfWeek::Sat.column_index(true), Some(5));
    assert_eq!(DayOfWeek::Sun.column_index(true), Some(6));
}

#[test]
fn grid_window_rows_and_columns() {
    let hourly = GridWindow::new(9, 18, RowUnit::Hour, false).unwrap();
    assert_eq!(hourly.rows(), 9);
    assert_eq!(hourly.columns(), 5);
    assert_eq!(hourly.minute_of_row(0), 540);
    assert_eq!(hourly.minute_of_row(3), 720);

    let halves = GridWindow::new(9, 18, RowUnit::HalfHour, true).unwrap();
    assert_eq!(halves.rows(), 18);
    assert_eq!(halves.columns(), 7);
}

#[test]
fn grid_window_rejects_bad_hours() {
    assert!(GridWindow::new(18, 9, RowUnit::Hour, false).is_err());
    assert!(GridWindow::new(9, 9, RowUnit::Hour, false).is_err());
    assert!(GridWindow::new(9, 25, RowUnit::Hour, false).is_err());
}

#[test]
fn row_unit_minutes_are_validated() {
    assert_eq!(RowUnit::try_from_minutes(30).unwrap(), RowUnit::HalfHour);
    assert_eq!(RowUnit::try_from_minutes(60).unwrap(), RowUnit::Hour);
    assert!(RowUnit::try_from_minutes(45).is_err());
}
