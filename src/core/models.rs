use crate::core::types::TimeSlot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One course section with its normalized weekly slots.
///
/// `course_id` identifies the section, not the subject: two sections of the
/// same subject are distinct courses with potentially different schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchedule {
    pub course_id: String,
    pub title: String,
    pub credit: u32,
    pub capacity: u32,
    pub enrolled_count: u32,
    pub slots: Vec<TimeSlot>,
}

impl CourseSchedule {
    pub fn new(
        course_id: impl Into<String>,
        title: impl Into<String>,
        credit: u32,
        capacity: u32,
        enrolled_count: u32,
        slots: Vec<TimeSlot>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            credit,
            capacity,
            enrolled_count,
            slots,
        }
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }

    /// A course whose schedule parsed to zero slots still enrolls and still
    /// occupies credits; it just cannot conflict with anything.
    pub fn is_schedule_less(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for CourseSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = if self.slots.is_empty() {
            "no schedule".to_string()
        } else {
            self.slots
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "Course(id='{}', title='{}', credit={}, seats={}/{}, slots=[{}])",
            self.course_id, self.title, self.credit, self.enrolled_count, self.capacity, slots
        )
    }
}
