use crate::core::models::CourseSchedule;
use crate::core::selection::{SelectionState, WishlistOutcome};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};

pub mod conflict;
pub mod policy;
#[cfg(test)]
mod tests;

use policy::Decision;

/// Thin wrapper that runs the (pure) enrollment policy over a selection and
/// logs every outcome. The UI/transport layers talk to this; tests mostly
/// talk to `policy` and `conflict` directly.
pub struct EnrollmentManager {
    logger: Logger,
}

impl EnrollmentManager {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn add_course(&self, state: &mut SelectionState, candidate: &CourseSchedule) -> Decision {
        let decision = policy::try_enroll(state, candidate);
        if decision.is_accepted() {
            self.logger.info(
                format!(
                    "Enrolled '{}' ({} credits, total now {}/{}).",
                    candidate.course_id,
                    candidate.credit,
                    state.total_credits(),
                    state.credit_ceiling()
                ),
                LogTarget::FileOnly,
            );
        } else {
            let reason = decision
                .reason
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let detail = if decision.conflicting_course_ids.is_empty() {
                String::new()
            } else {
                format!(" (conflicts: {})", decision.conflicting_course_ids.join(", "))
            };
            self.logger.warn(
                format!("Rejected '{}': {}{}", candidate.course_id, reason, detail),
                LogTarget::FileOnly,
            );
        }
        decision
    }

    /// Ungated removal; always succeeds for an enrolled course.
    pub fn withdraw(&self, state: &mut SelectionState, course_id: &str) -> Result<CourseSchedule> {
        let course = state.withdraw(course_id)?;
        self.logger.info(
            format!(
                "Withdrew '{}' ({} credits freed).",
                course.course_id, course.credit
            ),
            LogTarget::FileOnly,
        );
        Ok(course)
    }

    /// Roll back an optimistic accept after the boundary reports a remote
    /// failure. Restores the exact pre-accept state, wishlist included.
    pub fn revert(&self, state: &mut SelectionState, course_id: &str) -> Result<()> {
        state.revert(course_id)?;
        self.logger.warn(
            format!("Reverted optimistic enrollment of '{}'.", course_id),
            LogTarget::FileOnly,
        );
        Ok(())
    }

    pub fn wishlist_add(
        &self,
        state: &mut SelectionState,
        course: &CourseSchedule,
    ) -> WishlistOutcome {
        let outcome = state.wishlist_add(course.clone());
        match outcome {
            WishlistOutcome::Added => self.logger.info(
                format!("Wishlisted '{}'.", course.course_id),
                LogTarget::FileOnly,
            ),
            WishlistOutcome::AlreadyWishlisted => self.logger.warn(
                format!("'{}' is already on the wishlist.", course.course_id),
                LogTarget::FileOnly,
            ),
            WishlistOutcome::AlreadyEnrolled => self.logger.warn(
                format!("'{}' is already enrolled; not wishlisted.", course.course_id),
                LogTarget::FileOnly,
            ),
        }
        outcome
    }

    pub fn wishlist_remove(&self, state: &mut SelectionState, course_id: &str) -> bool {
        let removed = state.wishlist_remove(course_id);
        if removed {
            self.logger.info(
                format!("Removed '{}' from the wishlist.", course_id),
                LogTarget::FileOnly,
            );
        }
        removed
    }
}
