use crate::core::models::CourseSchedule;
use crate::core::selection::SelectionState;
use crate::enrollment::conflict::find_conflicts;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Why an add-attempt was rejected. The token forms ("duplicate",
/// "credit-limit", ...) are the wire values the UI layer matches on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    Duplicate,
    Capacity,
    CreditLimit,
    TimeConflict,
}

/// Typed outcome of an add-attempt. Rejections are expected, user-facing
/// values, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicting_course_ids: Vec<String>,
}

impl Decision {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
            conflicting_course_ids: Vec::new(),
        }
    }

    pub fn reject(reason: RejectReason) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            conflicting_course_ids: Vec::new(),
        }
    }

    pub fn time_conflict(conflicting_course_ids: Vec<String>) -> Self {
        Self {
            accepted: false,
            reason: Some(RejectReason::TimeConflict),
            conflicting_course_ids,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// Evaluate an add-attempt and, on accept, mutate `state`.
///
/// Checks run in a fixed order and the first failure wins, because the order
/// decides which message the student sees:
/// 1. already enrolled        -> "duplicate"
/// 2. section full            -> "capacity"
/// 3. would exceed ceiling    -> "credit-limit"
/// 4. overlaps a selection    -> "time-conflict" (naming the courses)
///
/// The checks always read the state passed in at call time, so racing
/// attempts (a double-click before the network round-trip resolves) are each
/// judged against the current selection, never a stale snapshot.
pub fn try_enroll(state: &mut SelectionState, candidate: &CourseSchedule) -> Decision {
    if state.is_enrolled(&candidate.course_id) {
        return Decision::reject(RejectReason::Duplicate);
    }
    if candidate.is_full() {
        return Decision::reject(RejectReason::Capacity);
    }
    if state.total_credits() + candidate.credit > state.credit_ceiling() {
        return Decision::reject(RejectReason::CreditLimit);
    }

    let conflicts = find_conflicts(&candidate.slots, state.enrolled_courses());
    if !conflicts.is_empty() {
        let mut ids: Vec<String> = Vec::new();
        for c in conflicts {
            if !ids.contains(&c.course_id) {
                ids.push(c.course_id);
            }
        }
        return Decision::time_conflict(ids);
    }

    state.admit(candidate.clone());
    Decision::accept()
}
