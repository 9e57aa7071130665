use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DayOfWeek {
    #[strum(serialize = "mon", serialize = "monday", to_string = "MON")]
    Mon,
    #[strum(serialize = "tue", serialize = "tuesday", to_string = "TUE")]
    Tue,
    #[strum(serialize = "wed", serialize = "wednesday", to_string = "WED")]
    Wed,
    #[strum(serialize = "thu", serialize = "thursday", to_string = "THU")]
    Thu,
    #[strum(serialize = "fri", serialize = "friday", to_string = "FRI")]
    Fri,
    #[strum(serialize = "sat", serialize = "saturday", to_string = "SAT")]
    Sat,
    #[strum(serialize = "sun", serialize = "sunday", to_string = "SUN")]
    Sun,
}

/// Single-character weekday tokens as they appear in the Korean portal data,
/// plus the 1-7 numeric codes some payloads carry instead. One table so both
/// encodings normalize through the same lookup.
static DAY_TOKENS: Lazy<HashMap<&'static str, DayOfWeek>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("월", DayOfWeek::Mon);
    m.insert("화", DayOfWeek::Tue);
    m.insert("수", DayOfWeek::Wed);
    m.insert("목", DayOfWeek::Thu);
    m.insert("금", DayOfWeek::Fri);
    m.insert("토", DayOfWeek::Sat);
    m.insert("일", DayOfWeek::Sun);
    m.insert("1", DayOfWeek::Mon);
    m.insert("2", DayOfWeek::Tue);
    m.insert("3", DayOfWeek::Wed);
    m.insert("4", DayOfWeek::Thu);
    m.insert("5", DayOfWeek::Fri);
    m.insert("6", DayOfWeek::Sat);
    m.insert("7", DayOfWeek::Sun);
    m
});

impl DayOfWeek {
    /// Normalize a raw day token: a weekday character (월-일), a 1-7 code, or
    /// an English day name. Weekend tokens normalize like any other day;
    /// whether they are displayed is the grid window's concern, not the
    /// parser's.
    pub fn from_token(s: &str) -> Result<Self> {
        let token = s.trim();
        if let Some(day) = DAY_TOKENS.get(token) {
            return Ok(*day);
        }
        Self::from_str(token).map_err(|_| Error::UnrecognizedDay {
            token: token.to_string(),
            valid: format!("월-일, 1-7, {}", valid_csv::<DayOfWeek>()),
        })
    }

    /// Normalize a numeric day code (1 = Monday .. 7 = Sunday).
    pub fn from_code(code: u8) -> Result<Self> {
        DayOfWeek::iter()
            .nth(code.wrapping_sub(1) as usize)
            .ok_or_else(|| Error::UnrecognizedDay {
                token: code.to_string(),
                valid: "1-7".to_string(),
            })
    }

    /// 1 = Monday .. 7 = Sunday.
    pub fn code(self) -> u8 {
        DayOfWeek::iter().position(|d| d == self).unwrap_or(0) as u8 + 1
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Sat | DayOfWeek::Sun)
    }

    /// Grid column for this day, or `None` when the day is not rendered
    /// (weekend with a five-column window).
    pub fn column_index(self, include_weekend: bool) -> Option<usize> {
        if self.is_weekend() && !include_weekend {
            return None;
        }
        Some(self.code() as usize - 1)
    }
}

/// Accepted clock-time encodings, tried in order. `%H:%M:%S` first so a
/// seconds component is truncated rather than failing the shorter format.
#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum TimeFormat {
    #[strum(serialize = "%H:%M:%S")]
    Hms,
    #[strum(serialize = "%H:%M")]
    Hm,
}

/// Parse "HH:MM" or "HH:MM:SS" into minutes since midnight. Seconds, when
/// present, are ignored (truncated, not rounded).
pub fn parse_minute(raw: &str) -> Result<u16> {
    let token = raw.trim();
    for f in TimeFormat::iter() {
        if let Ok(t) = NaiveTime::parse_from_str(token, f.as_ref()) {
            return Ok((t.hour() * 60 + t.minute()) as u16);
        }
    }
    Err(Error::Parse(format!(
        "Invalid time: '{}'. Expected HH:MM or HH:MM:SS.",
        token
    )))
}

fn fmt_minute(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// One weekly occurrence of a course: a day plus a half-open minute range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: DayOfWeek,
    pub start_minute: u16,
    pub end_minute: u16,
}

impl TimeSlot {
    /// Build a slot, rejecting inverted or empty ranges.
    pub fn new(day: DayOfWeek, start_minute: u16, end_minute: u16) -> Result<Self> {
        if start_minute >= end_minute {
            return Err(Error::EmptySlot {
                start: start_minute,
                end: end_minute,
            });
        }
        Ok(Self {
            day,
            start_minute,
            end_minute,
        })
    }

    /// Half-open overlap test: a slot ending at minute M and one starting at
    /// minute M do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day
            && self.start_minute < other.end_minute
            && other.start_minute < self.end_minute
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            fmt_minute(self.start_minute),
            fmt_minute(self.end_minute)
        )
    }
}

/// Row granularity of the rendered weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowUnit {
    HalfHour,
    Hour,
}

impl RowUnit {
    pub fn minutes(self) -> u16 {
        match self {
            RowUnit::HalfHour => 30,
            RowUnit::Hour => 60,
        }
    }

    pub fn try_from_minutes(minutes: u16) -> Result<Self> {
        match minutes {
            30 => Ok(RowUnit::HalfHour),
            60 => Ok(RowUnit::Hour),
            other => Err(Error::config(format!(
                "Unsupported row unit: {} minutes. Supported: 30, 60.",
                other
            ))),
        }
    }
}

/// Displayed portion of the week: an hour window, a row unit, and whether
/// weekend columns exist at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    start_hour: u8,
    end_hour: u8,
    row_unit: RowUnit,
    include_weekend: bool,
}

impl GridWindow {
    pub fn new(start_hour: u8, end_hour: u8, row_unit: RowUnit, include_weekend: bool) -> Result<Self> {
        if end_hour > 24 {
            return Err(Error::config(format!(
                "Window end hour {} is past midnight.",
                end_hour
            )));
        }
        if start_hour >= end_hour {
            return Err(Error::config(format!(
                "Window start hour {} must be earlier than end hour {}.",
                start_hour, end_hour
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
            row_unit,
            include_weekend,
        })
    }

    pub fn start_minute(&self) -> u16 {
        self.start_hour as u16 * 60
    }

    pub fn end_minute(&self) -> u16 {
        self.end_hour as u16 * 60
    }

    pub fn row_unit(&self) -> RowUnit {
        self.row_unit
    }

    pub fn include_weekend(&self) -> bool {
        self.include_weekend
    }

    /// Number of rendered rows; the window span is rounded up to whole units.
    pub fn rows(&self) -> usize {
        let span = self.end_minute() - self.start_minute();
        span.div_ceil(self.row_unit.minutes()) as usize
    }

    pub fn columns(&self) -> usize {
        if self.include_weekend { 7 } else { 5 }
    }

    /// Minute offset of a row boundary, for axis labels.
    pub fn minute_of_row(&self, row: usize) -> u16 {
        self.start_minute() + row as u16 * self.row_unit.minutes()
    }
}

impl Default for GridWindow {
    /// The portal's historical display: 09:00-18:00, hour rows, weekdays only.
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 18,
            row_unit: RowUnit::Hour,
            include_weekend: false,
        }
    }
}

impl fmt::Display for GridWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} ({}min rows, {} columns)",
            fmt_minute(self.start_minute()),
            fmt_minute(self.end_minute()),
            self.row_unit.minutes(),
            self.columns()
        )
    }
}
