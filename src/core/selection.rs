use crate::core::models::CourseSchedule;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a wishlist add. Duplicate adds are a warning, not an error;
/// a course already enrolled can never be wishlisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistOutcome {
    Added,
    AlreadyWishlisted,
    AlreadyEnrolled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnrollmentRecord {
    course: CourseSchedule,
    /// Wishlist position the course was promoted from, if any. Lets `revert`
    /// put the course back exactly where it was.
    wishlist_origin: Option<usize>,
}

/// The in-memory selection for one session: insertion-ordered enrolled
/// courses (unique by id) and a disjoint wishlist.
///
/// Owns no I/O. `enrolled` is mutated only through the enrollment policy's
/// accept path (`admit`), plus the ungated `withdraw` and the `revert`
/// inverse used by the boundary layer to roll back an optimistic accept.
/// Persistence, if wanted, is an explicit serialize/deserialize step owned
/// by the external boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    enrolled: Vec<EnrollmentRecord>,
    wishlist: Vec<CourseSchedule>,
    credit_ceiling: u32,
}

impl SelectionState {
    pub fn new(credit_ceiling: u32) -> Self {
        Self {
            enrolled: Vec::new(),
            wishlist: Vec::new(),
            credit_ceiling,
        }
    }

    /// Seed from the server-supplied initial enrollment. Duplicate ids keep
    /// the first occurrence.
    pub fn from_initial(enrolled: Vec<CourseSchedule>, credit_ceiling: u32) -> Self {
        let mut state = Self::new(credit_ceiling);
        for course in enrolled {
            if !state.is_enrolled(&course.course_id) {
                state.enrolled.push(EnrollmentRecord {
                    course,
                    wishlist_origin: None,
                });
            }
        }
        state
    }

    pub fn credit_ceiling(&self) -> u32 {
        self.credit_ceiling
    }

    pub fn total_credits(&self) -> u32 {
        self.enrolled.iter().map(|r| r.course.credit).sum()
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled.iter().any(|r| r.course.course_id == course_id)
    }

    pub fn is_wishlisted(&self, course_id: &str) -> bool {
        self.wishlist.iter().any(|c| c.course_id == course_id)
    }

    /// Enrolled courses in insertion order; the grid projector relies on
    /// this order for stable color assignment.
    pub fn enrolled_courses(&self) -> impl Iterator<Item = &CourseSchedule> {
        self.enrolled.iter().map(|r| &r.course)
    }

    pub fn wishlist_courses(&self) -> impl Iterator<Item = &CourseSchedule> {
        self.wishlist.iter()
    }

    pub fn enrolled_len(&self) -> usize {
        self.enrolled.len()
    }

    /// Position of a course in insertion order, used for palette assignment.
    pub fn insertion_index(&self, course_id: &str) -> Option<usize> {
        self.enrolled
            .iter()
            .position(|r| r.course.course_id == course_id)
    }

    /// Accept path: enroll the course and, atomically, drop it from the
    /// wishlist while recording where it sat. Callers (the policy) have
    /// already run the duplicate/capacity/credit/conflict checks.
    pub(crate) fn admit(&mut self, course: CourseSchedule) {
        let wishlist_origin = self
            .wishlist
            .iter()
            .position(|c| c.course_id == course.course_id);
        if let Some(idx) = wishlist_origin {
            self.wishlist.remove(idx);
        }
        self.enrolled.push(EnrollmentRecord {
            course,
            wishlist_origin,
        });
    }

    /// Pure inverse of `admit`: un-enroll and restore wishlist membership at
    /// its original position. Used by the boundary layer when the remote
    /// persistence of an optimistic accept fails.
    pub fn revert(&mut self, course_id: &str) -> Result<()> {
        let idx = self
            .enrolled
            .iter()
            .position(|r| r.course.course_id == course_id)
            .ok_or_else(|| Error::CourseNotEnrolled {
                course_id: course_id.to_string(),
            })?;
        let record = self.enrolled.remove(idx);
        if let Some(origin) = record.wishlist_origin {
            let at = origin.min(self.wishlist.len());
            self.wishlist.insert(at, record.course);
        }
        Ok(())
    }

    /// Ungated removal; re-opens the course's credits and time slots. Unlike
    /// `revert`, a withdrawn course does not return to the wishlist.
    pub fn withdraw(&mut self, course_id: &str) -> Result<CourseSchedule> {
        let idx = self
            .enrolled
            .iter()
            .position(|r| r.course.course_id == course_id)
            .ok_or_else(|| Error::CourseNotEnrolled {
                course_id: course_id.to_string(),
            })?;
        Ok(self.enrolled.remove(idx).course)
    }

    pub fn wishlist_add(&mut self, course: CourseSchedule) -> WishlistOutcome {
        if self.is_enrolled(&course.course_id) {
            return WishlistOutcome::AlreadyEnrolled;
        }
        if self.is_wishlisted(&course.course_id) {
            return WishlistOutcome::AlreadyWishlisted;
        }
        self.wishlist.push(course);
        WishlistOutcome::Added
    }

    pub fn wishlist_remove(&mut self, course_id: &str) -> bool {
        match self.wishlist.iter().position(|c| c.course_id == course_id) {
            Some(idx) => {
                self.wishlist.remove(idx);
                true
            }
            None => false,
        }
    }
}
