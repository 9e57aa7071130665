use crate::core::models::CourseSchedule;
use crate::core::types::TimeSlot;

/// One detected collision: a candidate slot against a slot of an
/// already-selected course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub course_id: String,
    pub candidate_slot: TimeSlot,
    pub existing_slot: TimeSlot,
}

/// Candidate slots bucketed by day so each existing slot only scans the
/// candidate slots that share its weekday. At this scale (tens of courses,
/// a few slots each) the bucketing is a convenience, not a necessity.
fn bucket_by_day(slots: &[TimeSlot]) -> [Vec<TimeSlot>; 7] {
    let mut buckets: [Vec<TimeSlot>; 7] = Default::default();
    for slot in slots {
        buckets[slot.day.code() as usize - 1].push(*slot);
    }
    buckets
}

/// Test every candidate slot against every slot of every schedule in
/// `against`. Short-circuits per existing course (one collision is enough to
/// name it) but keeps scanning the remaining courses, so a candidate that
/// collides with several courses reports all of them.
pub fn find_conflicts<'a, I>(candidate: &[TimeSlot], against: I) -> Vec<Conflict>
where
    I: IntoIterator<Item = &'a CourseSchedule>,
{
    if candidate.is_empty() {
        return Vec::new();
    }
    let buckets = bucket_by_day(candidate);

    let mut conflicts = Vec::new();
    'courses: for existing in against {
        for existing_slot in &existing.slots {
            let day_bucket = &buckets[existing_slot.day.code() as usize - 1];
            for candidate_slot in day_bucket {
                if candidate_slot.overlaps(existing_slot) {
                    conflicts.push(Conflict {
                        course_id: existing.course_id.clone(),
                        candidate_slot: *candidate_slot,
                        existing_slot: *existing_slot,
                    });
                    continue 'courses;
                }
            }
        }
    }
    conflicts
}
