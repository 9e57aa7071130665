use crate::core::models::CourseSchedule;
use crate::core::types::{DayOfWeek, TimeSlot, parse_minute};
use crate::errors::Result;
use serde::{Deserialize, Serialize};


/// Structured slot record as the server sends it: numeric day code plus
/// "HH:MM" or "HH:MM:SS" clock strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// Result of normalizing one course's raw schedule. `skipped` counts the
/// fragments/records that failed to parse; the parse itself never aborts,
/// but callers must be able to detect silent data loss.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSlots {
    pub slots: Vec<TimeSlot>,
    pub skipped: usize,
}

impl ParsedSlots {
    fn push(&mut self, parsed: Result<TimeSlot>) {
        match parsed {
            Ok(slot) => self.slots.push(slot),
            Err(_) => self.skipped += 1,
        }
    }
}

/// Normalize structured records. A record with a bad day code, a malformed
/// clock string, or an inverted range is skipped and counted.
pub fn parse_records(records: &[SlotRecord]) -> ParsedSlots {
    let mut out = ParsedSlots::default();
    for record in records {
        out.push(slot_from_record(record));
    }
    out
}

/// Normalize free text of comma-separated `<day><HH:MM>-<HH:MM>` fragments,
/// e.g. `"월 10:00-12:00, 수 10:00-11:00"`. Whitespace between the day token
/// and the range is optional. Each fragment is matched independently;
/// fragments that are empty after trimming are ignored outright, anything
/// else that fails to match is skipped and counted.
pub fn parse_text(raw: &str) -> ParsedSlots {
    let mut out = ParsedSlots::default();
    for fragment in raw.split(',') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        out.push(slot_from_fragment(fragment));
    }
    out
}

fn slot_from_record(record: &SlotRecord) -> Result<TimeSlot> {
    let day = DayOfWeek::from_code(record.day_of_week)?;
    let start = parse_minute(&record.start_time)?;
    let end = parse_minute(&record.end_time)?;
    TimeSlot::new(day, start, end)
}

fn slot_from_fragment(fragment: &str) -> Result<TimeSlot> {
    let mut chars = fragment.chars();
    let day_token = chars
        .next()
        .ok_or_else(|| crate::errors::Error::parse("Empty schedule fragment."))?;
    let day = DayOfWeek::from_token(&day_token.to_string())?;

    let range = chars.as_str().trim();
    let (start_tok, end_tok) = range.split_once('-').ok_or_else(|| {
        crate::errors::Error::parse(format!(
            "Invalid schedule fragment: '{}'. Expected '<day> <HH:MM>-<HH:MM>'.",
            fragment
        ))
    })?;

    let start = parse_minute(start_tok)?;
    let end = parse_minute(end_tok)?;
    TimeSlot::new(day, start, end)
}

/// Raw schedule payload, in whichever of the two server encodings this
/// course arrived. Courses with no schedule data at all are legal; they
/// normalize to zero slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase", untagged)]
pub enum RawSchedule {
    Records { slots: Vec<SlotRecord> },
    Text { schedule_text: String },
    Missing {},
}

/// Course DTO as the catalog file / server payload carries it. The engine
/// itself only ever sees the normalized `CourseSchedule`; this is the one
/// place raw payload shapes are mapped, so callers never branch on encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    pub course_id: String,
    #[serde(default)]
    pub title: String,
    pub credit: u32,
    pub capacity: u32,
    pub enrolled_count: u32,
    #[serde(flatten)]
    pub schedule: RawSchedule,
}

impl RawCourse {
    /// Normalize into the engine's course type, returning the skip count so
    /// the caller can log dropped fragments.
    pub fn normalize(self) -> (CourseSchedule, usize) {
        let parsed = match &self.schedule {
            RawSchedule::Records { slots } => parse_records(slots),
            RawSchedule::Text { schedule_text } => parse_text(schedule_text),
            RawSchedule::Missing {} => ParsedSlots::default(),
        };
        let course = CourseSchedule::new(
            self.course_id,
            self.title,
            self.credit,
            self.capacity,
            self.enrolled_count,
            parsed.slots,
        );
        (course, parsed.skipped)
    }
}
