mod cli_tests;
mod types_tests;

use crate::core::models::CourseSchedule;
use crate::core::types::{DayOfWeek, TimeSlot};

pub(crate) fn slot(day: DayOfWeek, start_minute: u16, end_minute: u16) -> TimeSlot {
    TimeSlot::new(day, start_minute, end_minute).unwrap()
}

pub(crate) fn course(id: &str, credit: u32, slots: Vec<TimeSlot>) -> CourseSchedule {
    CourseSchedule::new(id, format!("{id} title"), credit, 30, 0, slots)
}
