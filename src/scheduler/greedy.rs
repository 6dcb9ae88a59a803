//! Greedy first-fit placement.
//!
//! # Algorithm
//!
//! 1. Serve courses in input order.
//! 2. For each course, scan configured days in order; within a day, scan the
//!    teacher's free slots in availability order.
//! 3. Place a session in the first slot where neither the teacher nor the
//!    course's room is committed, then commit both.
//! 4. Stop the course once its weekly sessions are placed; whatever is still
//!    missing after the last day is a shortfall.
//!
//! No backtracking: an early course can take a slot that a later course
//! needed more. Input order is the priority order.
//!
//! # Complexity
//! O(c * d * s) where c=courses, d=days, s=slots per day.

use super::availability::AvailabilityIndex;
use super::engine::{CourseJob, SlotRef};
use super::occupancy::Occupancy;

/// Places every job greedily, committing into `occupancy`.
///
/// Returns one placement list per job, aligned with `jobs`.
pub(crate) fn greedy_pass<'a>(
    jobs: &[CourseJob<'a>],
    index: &AvailabilityIndex<'a>,
    occupancy: &mut Occupancy<'a>,
    day_count: usize,
) -> Vec<Vec<SlotRef>> {
    let mut placements = Vec::with_capacity(jobs.len());

    for job in jobs {
        let needed = job.needed as usize;
        let mut placed: Vec<SlotRef> = Vec::with_capacity(needed);

        for day_idx in 0..day_count {
            if placed.len() >= needed {
                break;
            }
            for &slot_idx in index.slot_indices(job.teacher_id(), day_idx) {
                if placed.len() >= needed {
                    break;
                }
                if job.fits(index, occupancy, day_idx, slot_idx) {
                    occupancy.commit(job.teacher_id(), job.resource_id(), day_idx, slot_idx);
                    placed.push((day_idx, slot_idx));
                    tracing::debug!(
                        course = %job.course.id,
                        day = day_idx,
                        slot = slot_idx,
                        resource = %job.resource.id,
                        "session placed"
                    );
                } else {
                    tracing::trace!(
                        course = %job.course.id,
                        day = day_idx,
                        slot = slot_idx,
                        "slot unavailable"
                    );
                }
            }
        }

        placements.push(placed);
    }

    placements
}
