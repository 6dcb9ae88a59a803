//! Timetable assignment engine.
//!
//! # Algorithm
//!
//! 1. Validate structure; reject the whole run on malformed input.
//! 2. Resolve each course, in input order, to its teacher and to the first
//!    resource (catalog order) that seats its enrollment. Courses that do
//!    not resolve are skipped and reported.
//! 3. Place sessions with the configured [`Strategy`].
//! 4. Assemble the grid, one fulfillment record per course, and notices.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", Sec. 2 (class-teacher
//! timetabling).

use crate::config::{Strategy, TimetableConfig};
use crate::error::StructuralError;
use crate::models::{
    Catalog, Course, Fulfillment, Notice, NoticeKind, PlacedSession, Resource, ScheduleGrid,
    SkipReason, Teacher, TimetableReport,
};
use crate::validation::validate_structure;

use super::availability::AvailabilityIndex;
use super::backtracking;
use super::greedy::greedy_pass;
use super::occupancy::Occupancy;

/// A (day index, slot index) grid position.
pub(crate) type SlotRef = (usize, usize);

/// A course resolved to its teacher and room, ready for placement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CourseJob<'a> {
    pub(crate) course: &'a Course,
    pub(crate) teacher: &'a Teacher,
    pub(crate) resource: &'a Resource,
    pub(crate) needed: u32,
    /// Weekly session cap of the teacher, when enforced.
    pub(crate) teacher_cap: Option<u32>,
}

impl<'a> CourseJob<'a> {
    #[inline]
    pub(crate) fn teacher_id(&self) -> &'a str {
        let teacher: &'a Teacher = self.teacher;
        &teacher.id
    }

    #[inline]
    pub(crate) fn resource_id(&self) -> &'a str {
        let resource: &'a Resource = self.resource;
        &resource.id
    }

    /// Whether a session can go at (day, slot) given current commitments.
    pub(crate) fn fits(
        &self,
        index: &AvailabilityIndex<'a>,
        occupancy: &Occupancy<'a>,
        day_idx: usize,
        slot_idx: usize,
    ) -> bool {
        if let Some(cap) = self.teacher_cap {
            if occupancy.teacher_load(self.teacher_id()) >= cap {
                return false;
            }
        }
        index.admits(self.resource, slot_idx)
            && occupancy.is_free(self.teacher_id(), self.resource_id(), day_idx, slot_idx)
    }
}

/// Outcome of resolving one course.
enum Preparation<'a> {
    Ready(CourseJob<'a>),
    Skipped(&'a Course, SkipReason, String),
}

/// Timetable generator.
///
/// Stateless apart from its configuration: every call to
/// [`generate`](Self::generate) owns its own occupancy record, so one
/// scheduler may serve concurrent callers.
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableConfig;
/// use u_timetable::models::{Catalog, Course, Resource, Teacher};
/// use u_timetable::scheduler::TimetableScheduler;
///
/// let catalog = Catalog::new()
///     .with_teacher(
///         Teacher::new("T1")
///             .with_slots("Monday", ["9:00"])
///             .with_slots("Tuesday", ["10:00"]),
///     )
///     .with_course(Course::new("C1", "T1").with_sessions(2).with_students(30))
///     .with_resource(Resource::classroom("R1").with_capacity(40));
///
/// let report = TimetableScheduler::new(TimetableConfig::default())
///     .generate(&catalog)
///     .unwrap();
/// assert_eq!(report.total_placed_sessions(), 2);
/// assert_eq!(report.grid().cell("Tuesday", "10:00").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    config: TimetableConfig,
}

impl TimetableScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: TimetableConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Produces a timetable for a catalog snapshot.
    ///
    /// Never fails for data inconsistencies: unresolved teachers, rooms that
    /// are too small, and exhausted availability become notices and
    /// shortfalls on the report.
    ///
    /// # Errors
    /// [`StructuralError`] if the configuration or an entity is malformed.
    pub fn generate(&self, catalog: &Catalog) -> Result<TimetableReport, StructuralError> {
        validate_structure(catalog, &self.config)?;

        let config = &self.config;
        let mut grid = ScheduleGrid::new(&config.days, &config.slots);

        if catalog.is_incomplete() {
            let mut notices = Vec::new();
            if !catalog.courses.is_empty() {
                let message = format!(
                    "Nothing to schedule: {} teacher(s), {} resource(s)",
                    catalog.teachers.len(),
                    catalog.resources.len()
                );
                tracing::warn!("{message}");
                notices.push(Notice::general(NoticeKind::NothingToSchedule, message));
            }
            return Ok(TimetableReport::new(grid, Vec::new(), notices));
        }

        let preparations = self.prepare(catalog);
        let jobs: Vec<CourseJob<'_>> = preparations
            .iter()
            .filter_map(|p| match p {
                Preparation::Ready(job) => Some(*job),
                Preparation::Skipped(..) => None,
            })
            .collect();

        let index = AvailabilityIndex::new(catalog, config);
        let mut occupancy = Occupancy::new();
        let mut placements = greedy_pass(&jobs, &index, &mut occupancy, config.days.len());

        if let Strategy::Backtracking { node_limit } = config.strategy {
            placements =
                backtracking::search(&jobs, &index, config.days.len(), placements, node_limit);
        }

        let mut fulfillment = Vec::with_capacity(catalog.courses.len());
        let mut notices = Vec::new();
        let mut placed_iter = placements.into_iter();

        for prep in preparations {
            match prep {
                Preparation::Skipped(course, reason, message) => {
                    tracing::warn!(course = %course.id, ?reason, "{message}");
                    let kind = match reason {
                        SkipReason::UnresolvedTeacher => NoticeKind::UnresolvedTeacher,
                        SkipReason::NoResourceCapacity => NoticeKind::NoResourceCapacity,
                        SkipReason::DepartmentMismatch => NoticeKind::DepartmentMismatch,
                    };
                    notices.push(Notice::for_course(kind, course, message));
                    fulfillment.push(Fulfillment::skipped(course, reason));
                }
                Preparation::Ready(job) => {
                    let slots = placed_iter.next().unwrap_or_default();
                    for &(day_idx, slot_idx) in &slots {
                        let session = PlacedSession::new(
                            job.course,
                            job.teacher,
                            job.resource,
                            &config.days[day_idx],
                            &config.slots[slot_idx],
                        );
                        grid.push(day_idx, slot_idx, session);
                    }

                    let record = Fulfillment::placed(job.course, slots.len() as u32);
                    if record.is_shortfall() {
                        let message = format!(
                            "Could only schedule {}/{} sessions for {}",
                            record.sessions_placed,
                            record.sessions_requested,
                            job.course.display_name()
                        );
                        tracing::warn!(
                            course = %job.course.id,
                            placed = record.sessions_placed,
                            requested = record.sessions_requested,
                            "partial fulfillment"
                        );
                        notices.push(Notice::for_course(
                            NoticeKind::PartialFulfillment,
                            job.course,
                            message,
                        ));
                    }
                    fulfillment.push(record);
                }
            }
        }

        let report = TimetableReport::new(grid, fulfillment, notices);
        tracing::info!(
            courses = catalog.courses.len(),
            placed = report.total_placed_sessions(),
            requested = catalog.requested_sessions(),
            shortfalls = report.shortfalls().len(),
            "timetable generated"
        );
        Ok(report)
    }

    /// Resolves every course in input order.
    fn prepare<'a>(&self, catalog: &'a Catalog) -> Vec<Preparation<'a>> {
        catalog
            .courses
            .iter()
            .map(|course| {
                let Some(teacher) = catalog.teacher(&course.teacher_id) else {
                    return Preparation::Skipped(
                        course,
                        SkipReason::UnresolvedTeacher,
                        format!(
                            "Skipping course {}: teacher '{}' not found",
                            course.display_name(),
                            course.teacher_id
                        ),
                    );
                };

                if self.config.require_department_match
                    && !course.department.is_empty()
                    && !teacher.department.is_empty()
                    && course.department != teacher.department
                {
                    return Preparation::Skipped(
                        course,
                        SkipReason::DepartmentMismatch,
                        format!(
                            "Skipping course {}: department {} does not match teacher department {}",
                            course.display_name(),
                            course.department,
                            teacher.department
                        ),
                    );
                }

                let Some(resource) = catalog.first_fitting_resource(course.students_enrolled) else {
                    return Preparation::Skipped(
                        course,
                        SkipReason::NoResourceCapacity,
                        format!(
                            "Skipping course {}: no resource seats {} students",
                            course.display_name(),
                            course.students_enrolled
                        ),
                    );
                };

                let teacher_cap = self
                    .config
                    .enforce_teacher_max_hours
                    .then(|| teacher.max_hours_per_week.max(0) as u32);

                Preparation::Ready(CourseJob {
                    course,
                    teacher,
                    resource,
                    needed: course.sessions_per_week as u32,
                    teacher_cap,
                })
            })
            .collect()
    }
}
