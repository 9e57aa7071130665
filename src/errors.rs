use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain-specific error set for the enrollment engine.
///
/// Policy rejections (duplicate, capacity, credit-limit, time-conflict) are
/// NOT errors; they are returned as `Decision` values. Errors here are data
/// problems (unparseable schedules, bad config) or misuse of the API.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Generic schedule/time parse problem.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A day token that is neither a weekday character nor a 1-7 code.
    #[error("Unrecognized day token: '{token}'. Valid tokens: {valid}")]
    UnrecognizedDay { token: String, valid: String },

    /// A slot whose start does not precede its end.
    #[error("Invalid slot: start {start} must be earlier than end {end} (minutes since midnight).")]
    EmptySlot { start: u16, end: u16 },

    // ---- Selection state ----------------------------------------------------
    /// Revert/withdraw referenced a course that is not enrolled.
    #[error("Course '{course_id}' is not enrolled.")]
    CourseNotEnrolled { course_id: String },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid values, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic domain error when you want to bubble a message without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (catalog/plan/config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (catalog/plan/config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
