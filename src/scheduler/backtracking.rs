//! Bounded depth-first search for more total placements.
//!
//! Greedy first-fit can place strictly fewer sessions than the best
//! assignment. This search explores, course by course in input order, which
//! of the teacher's free slots each session takes, and keeps the assignment
//! with the most placed sessions.
//!
//! # Algorithm
//! - Each course keeps its resolved room; only slot choices are searched.
//! - Sessions of one course are interchangeable, so a course's slots are
//!   chosen in increasing scan position (no permuted duplicates).
//! - A course may stop short of its demand, which lets a later course take
//!   the slot instead.
//! - Branches whose optimistic total cannot beat the incumbent are pruned.
//! - The greedy result seeds the incumbent and is only replaced by a strictly
//!   better one, so ties keep the greedy answer.
//!
//! # Complexity
//! Exponential in the worst case; bounded by `node_limit` search nodes.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6.3 (Backtracking Search for CSPs).

use super::availability::AvailabilityIndex;
use super::engine::{CourseJob, SlotRef};
use super::occupancy::Occupancy;

/// Searches for an assignment placing more sessions than `seed`.
///
/// Returns the best assignment found within `node_limit` nodes, aligned
/// with `jobs`.
pub(crate) fn search<'a>(
    jobs: &[CourseJob<'a>],
    index: &AvailabilityIndex<'a>,
    day_count: usize,
    seed: Vec<Vec<SlotRef>>,
    node_limit: u64,
) -> Vec<Vec<SlotRef>> {
    let options: Vec<Vec<SlotRef>> = jobs
        .iter()
        .map(|job| {
            (0..day_count)
                .flat_map(|d| {
                    index
                        .slot_indices(job.teacher_id(), d)
                        .iter()
                        .map(move |&s| (d, s))
                })
                .filter(|&(_, s)| index.admits(job.resource, s))
                .collect()
        })
        .collect();

    // Optimistic placements still reachable from job i onward.
    let mut suffix = vec![0usize; jobs.len() + 1];
    for i in (0..jobs.len()).rev() {
        suffix[i] = suffix[i + 1] + options[i].len().min(jobs[i].needed as usize);
    }

    let seed_total: usize = seed.iter().map(Vec::len).sum();
    let mut search = Search {
        jobs,
        index,
        options,
        suffix,
        occupancy: Occupancy::new(),
        current: vec![Vec::new(); jobs.len()],
        current_total: 0,
        best: seed,
        best_total: seed_total,
        frames: Vec::new(),
        nodes: 0,
        node_limit,
        exhausted: false,
    };

    if search.best_total < search.suffix[0] {
        search.run();
    }

    tracing::info!(
        nodes = search.nodes,
        exhausted = search.exhausted,
        greedy = seed_total,
        best = search.best_total,
        "backtracking search finished"
    );

    search.best
}

/// One open search node: job `job` with options from `next` still untried.
///
/// Frames live on the heap, so search depth (one frame per placed session
/// plus one per course) is bounded by `node_limit`, not by the thread stack.
#[derive(Debug)]
struct Frame {
    job: usize,
    next: usize,
    /// Placement made from this frame that must be undone before the next.
    committed: Option<SlotRef>,
    /// Whether the "leave the rest unplaced" branch has been taken.
    skipped: bool,
}

struct Search<'s, 'a> {
    jobs: &'s [CourseJob<'a>],
    index: &'s AvailabilityIndex<'a>,
    /// Candidate (day, slot) per job in greedy scan order.
    options: Vec<Vec<SlotRef>>,
    suffix: Vec<usize>,
    occupancy: Occupancy<'a>,
    current: Vec<Vec<SlotRef>>,
    current_total: usize,
    best: Vec<Vec<SlotRef>>,
    best_total: usize,
    frames: Vec<Frame>,
    nodes: u64,
    node_limit: u64,
    exhausted: bool,
}

impl Search<'_, '_> {
    /// Whether the search should unwind.
    fn done(&self) -> bool {
        self.exhausted || self.best_total == self.suffix[0]
    }

    /// Counts a node for job `j` (options from `from` on) and opens a frame
    /// unless it is a leaf, pruned, or over the node limit.
    fn enter(&mut self, j: usize, from: usize) {
        if self.nodes >= self.node_limit {
            self.exhausted = true;
            return;
        }
        self.nodes += 1;

        if j == self.jobs.len() {
            if self.current_total > self.best_total {
                self.best_total = self.current_total;
                self.best = self.current.clone();
            }
            return;
        }

        let missing = self.jobs[j].needed as usize - self.current[j].len();
        let reachable = missing.min(self.options[j].len().saturating_sub(from));
        if self.current_total + reachable + self.suffix[j + 1] <= self.best_total {
            return;
        }

        let next = if missing > 0 { from } else { self.options[j].len() };
        self.frames.push(Frame {
            job: j,
            next,
            committed: None,
            skipped: false,
        });
    }

    fn run(&mut self) {
        self.enter(0, 0);

        while let Some(top) = self.frames.len().checked_sub(1) {
            let j = self.frames[top].job;
            let job = self.jobs[j];

            if let Some((d, s)) = self.frames[top].committed.take() {
                self.current_total -= 1;
                self.current[j].pop();
                self.occupancy.release(job.teacher_id(), job.resource_id(), d, s);
                if self.done() {
                    self.frames.clear();
                    break;
                }
            }

            let mut chosen = None;
            while self.frames[top].next < self.options[j].len() {
                let pos = self.frames[top].next;
                self.frames[top].next += 1;
                let (d, s) = self.options[j][pos];
                if job.fits(self.index, &self.occupancy, d, s) {
                    chosen = Some((pos, d, s));
                    break;
                }
            }

            if let Some((pos, d, s)) = chosen {
                self.occupancy.commit(job.teacher_id(), job.resource_id(), d, s);
                self.current[j].push((d, s));
                self.current_total += 1;
                self.frames[top].committed = Some((d, s));
                self.enter(j, pos + 1);
            } else if !self.frames[top].skipped {
                // Leave the rest of job j unplaced.
                self.frames[top].skipped = true;
                self.enter(j + 1, 0);
            } else {
                self.frames.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Strategy, TimetableConfig};
    use crate::models::{Catalog, Course, Resource, Teacher};
    use crate::scheduler::engine::tests::assert_invariants;
    use crate::scheduler::TimetableScheduler;

    /// C1 can use 9:00 or 10:00; C2 only 9:00. Greedy gives 9:00 to C1.
    fn greedy_trap() -> Catalog {
        Catalog::new()
            .with_teacher(Teacher::new("T1").with_slots("Monday", ["9:00", "10:00"]))
            .with_teacher(Teacher::new("T2").with_slots("Monday", ["9:00"]))
            .with_course(Course::new("C1", "T1"))
            .with_course(Course::new("C2", "T2"))
            .with_resource(Resource::classroom("R1").with_capacity(30))
    }

    fn run(catalog: &Catalog, strategy: Strategy) -> crate::models::TimetableReport {
        TimetableScheduler::new(TimetableConfig::default().with_strategy(strategy))
            .generate(catalog)
            .unwrap()
    }

    #[test]
    fn test_greedy_misses_optimum() {
        let report = run(&greedy_trap(), Strategy::Greedy);
        assert_eq!(report.total_placed_sessions(), 1);
    }

    #[test]
    fn test_backtracking_finds_optimum() {
        let catalog = greedy_trap();
        let report = run(&catalog, Strategy::backtracking());
        assert_eq!(report.total_placed_sessions(), 2);
        assert!(report.is_complete());
        assert_eq!(report.grid().cell("Monday", "9:00").unwrap()[0].course_id, "C2");
        assert_eq!(report.grid().cell("Monday", "10:00").unwrap()[0].course_id, "C1");
        assert_invariants(&report, &catalog);
    }

    #[test]
    fn test_keeps_greedy_when_already_optimal() {
        let catalog = Catalog::new()
            .with_teacher(
                Teacher::new("T1")
                    .with_slots("Monday", ["9:00"])
                    .with_slots("Tuesday", ["10:00"]),
            )
            .with_course(Course::new("C1", "T1").with_sessions(2))
            .with_resource(Resource::classroom("R1"));

        let greedy = run(&catalog, Strategy::Greedy);
        let searched = run(&catalog, Strategy::backtracking());
        assert_eq!(greedy, searched);
    }

    #[test]
    fn test_never_worse_than_greedy() {
        let mut catalog = Catalog::new()
            .with_resource(Resource::classroom("R1").with_capacity(40))
            .with_resource(Resource::lecture_hall("R2").with_capacity(120));
        let patterns: [&[&str]; 4] = [
            &["9:00", "10:00"],
            &["9:00"],
            &["10:00", "11:00", "14:00"],
            &["11:00", "9:00"],
        ];
        for (i, slots) in patterns.iter().enumerate() {
            catalog = catalog
                .with_teacher(
                    Teacher::new(format!("T{i}"))
                        .with_slots("Monday", slots.iter().copied())
                        .with_slots("Tuesday", slots.iter().rev().copied()),
                )
                .with_course(
                    Course::new(format!("C{i}"), format!("T{i}"))
                        .with_sessions(3)
                        .with_students(if i % 2 == 0 { 30 } else { 100 }),
                );
        }

        let greedy = run(&catalog, Strategy::Greedy);
        let searched = run(&catalog, Strategy::backtracking());
        assert!(searched.total_placed_sessions() >= greedy.total_placed_sessions());
        assert_invariants(&searched, &catalog);
    }

    #[test]
    fn test_node_limit_returns_incumbent() {
        let catalog = greedy_trap();
        let report = run(&catalog, Strategy::Backtracking { node_limit: 1 });
        // One node is not enough to improve; the greedy answer stands.
        assert_eq!(report.total_placed_sessions(), 1);
        assert_invariants(&report, &catalog);
    }

    #[test]
    fn test_deep_catalog_does_not_exhaust_stack() {
        let mut catalog = Catalog::new().with_resource(Resource::classroom("R1"));
        for i in 0..10_000 {
            catalog = catalog
                .with_teacher(Teacher::new(format!("T{i}")).with_slots("Monday", ["9:00"]))
                .with_course(Course::new(format!("C{i}"), format!("T{i}")));
        }

        let report = run(&catalog, Strategy::backtracking());
        assert_eq!(report.total_placed_sessions(), 1);
        assert_eq!(report.fulfillment().len(), 10_000);
        assert_eq!(report.shortfalls().len(), 9_999);
    }

    #[test]
    fn test_respects_teacher_cap() {
        let catalog = Catalog::new()
            .with_teacher(
                Teacher::new("T1")
                    .with_slots("Monday", ["9:00", "10:00", "11:00"])
                    .with_max_hours(2),
            )
            .with_course(Course::new("C1", "T1").with_sessions(2))
            .with_course(Course::new("C2", "T1").with_sessions(2))
            .with_resource(Resource::classroom("R1"));

        let config = TimetableConfig::default()
            .with_strategy(Strategy::backtracking())
            .with_teacher_max_hours(true);
        let report = TimetableScheduler::new(config).generate(&catalog).unwrap();
        assert_eq!(report.grid().sessions_for_teacher("T1").len(), 2);
    }
}
