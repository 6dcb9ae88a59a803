//! Schedule report model.
//!
//! The output of one generation run: a grid of placed sessions keyed by
//! every configured (day, slot) pair, a fulfillment record per course, and
//! the non-fatal notices raised along the way.
//!
//! Reports are values. Collaborators read them; only the engine builds them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Course, Difficulty, Resource, Teacher};

/// One scheduled occurrence of a course.
///
/// Carries a snapshot of everything a display or export layer needs, so the
/// grid can be rendered without the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSession {
    pub course_id: String,
    pub course_name: String,
    pub course_code: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub resource_id: String,
    pub resource_name: String,
    /// Students attending (the course enrollment).
    pub students: i32,
    pub department: String,
    pub difficulty: Option<Difficulty>,
    pub day: String,
    pub slot: String,
}

impl PlacedSession {
    pub(crate) fn new(
        course: &Course,
        teacher: &Teacher,
        resource: &Resource,
        day: &str,
        slot: &str,
    ) -> Self {
        Self {
            course_id: course.id.clone(),
            course_name: course.display_name().to_string(),
            course_code: course.code.clone(),
            teacher_id: teacher.id.clone(),
            teacher_name: teacher.display_name().to_string(),
            resource_id: resource.id.clone(),
            resource_name: resource.display_name().to_string(),
            students: course.students_enrolled,
            department: course.department.clone(),
            difficulty: course.difficulty,
            day: day.to_string(),
            slot: slot.to_string(),
        }
    }
}

/// Day × slot grid of placed sessions.
///
/// Every configured (day, slot) pair has a cell, possibly empty. A cell is a
/// list because sessions in different rooms with different teachers may share
/// a slot.
///
/// Serializes as `{day: {slot: [session]}}`, days and slots in configured
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridMap", try_from = "GridMap")]
pub struct ScheduleGrid {
    days: Vec<String>,
    slots: Vec<String>,
    /// `cells[day_index][slot_index]`.
    cells: Vec<Vec<Vec<PlacedSession>>>,
}

impl ScheduleGrid {
    /// Creates a grid with an empty cell for every (day, slot).
    pub(crate) fn new(days: &[String], slots: &[String]) -> Self {
        Self {
            days: days.to_vec(),
            slots: slots.to_vec(),
            cells: vec![vec![Vec::new(); slots.len()]; days.len()],
        }
    }

    pub(crate) fn push(&mut self, day_idx: usize, slot_idx: usize, session: PlacedSession) {
        self.cells[day_idx][slot_idx].push(session);
    }

    /// Configured days, in order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Configured slots, in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Sessions at (day, slot). `None` if the pair is not configured.
    pub fn cell(&self, day: &str, slot: &str) -> Option<&[PlacedSession]> {
        let d = self.days.iter().position(|x| x == day)?;
        let s = self.slots.iter().position(|x| x == slot)?;
        Some(&self.cells[d][s])
    }

    /// Iterates `(day, slot, sessions)` in day-major configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[PlacedSession])> {
        self.days.iter().zip(&self.cells).flat_map(move |(day, row)| {
            self.slots
                .iter()
                .zip(row)
                .map(move |(slot, cell)| (day.as_str(), slot.as_str(), cell.as_slice()))
        })
    }

    /// All placed sessions in day-major order.
    pub fn sessions(&self) -> impl Iterator<Item = &PlacedSession> {
        self.cells.iter().flatten().flatten()
    }

    /// Number of (day, slot) cells.
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Sum of session counts over every cell.
    pub fn total_placed_sessions(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// Sessions of one course, in day-major order.
    pub fn sessions_for_course(&self, course_id: &str) -> Vec<&PlacedSession> {
        self.sessions().filter(|s| s.course_id == course_id).collect()
    }

    /// Sessions hosted by one resource.
    pub fn sessions_for_resource(&self, resource_id: &str) -> Vec<&PlacedSession> {
        self.sessions()
            .filter(|s| s.resource_id == resource_id)
            .collect()
    }

    /// Sessions taught by one teacher.
    pub fn sessions_for_teacher(&self, teacher_id: &str) -> Vec<&PlacedSession> {
        self.sessions()
            .filter(|s| s.teacher_id == teacher_id)
            .collect()
    }
}

/// Wire form of [`ScheduleGrid`].
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct GridMap(IndexMap<String, IndexMap<String, Vec<PlacedSession>>>);

impl From<ScheduleGrid> for GridMap {
    fn from(grid: ScheduleGrid) -> Self {
        let slots = grid.slots;
        let rows = grid
            .days
            .into_iter()
            .zip(grid.cells)
            .map(|(day, row)| (day, slots.iter().cloned().zip(row).collect()))
            .collect();
        GridMap(rows)
    }
}

impl TryFrom<GridMap> for ScheduleGrid {
    type Error = String;

    fn try_from(map: GridMap) -> Result<Self, Self::Error> {
        let slots: Vec<String> = map
            .0
            .values()
            .next()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();

        let mut days = Vec::with_capacity(map.0.len());
        let mut cells = Vec::with_capacity(map.0.len());
        for (day, row) in map.0 {
            if !row.keys().eq(slots.iter()) {
                return Err(format!("day {day} does not list the same slots as the first day"));
            }
            days.push(day);
            cells.push(row.into_values().collect());
        }

        Ok(Self { days, slots, cells })
    }
}

/// Why a course received no sessions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// `teacher_id` does not resolve.
    UnresolvedTeacher,
    /// No resource seats the enrollment.
    NoResourceCapacity,
    /// Teacher and course departments differ (only when matching is required).
    DepartmentMismatch,
}

/// Outcome of one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    /// All requested sessions placed.
    Complete,
    /// Some, possibly zero, sessions placed after scanning availability.
    Partial,
    /// Course was never attempted.
    Skipped(SkipReason),
}

/// Requested vs. placed sessions for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub course_id: String,
    pub course_name: String,
    pub sessions_requested: u32,
    pub sessions_placed: u32,
    pub status: FulfillmentStatus,
}

impl Fulfillment {
    pub(crate) fn placed(course: &Course, placed: u32) -> Self {
        let requested = course.sessions_per_week.max(0) as u32;
        let status = if placed >= requested {
            FulfillmentStatus::Complete
        } else {
            FulfillmentStatus::Partial
        };
        Self {
            course_id: course.id.clone(),
            course_name: course.display_name().to_string(),
            sessions_requested: requested,
            sessions_placed: placed,
            status,
        }
    }

    pub(crate) fn skipped(course: &Course, reason: SkipReason) -> Self {
        Self {
            course_id: course.id.clone(),
            course_name: course.display_name().to_string(),
            sessions_requested: course.sessions_per_week.max(0) as u32,
            sessions_placed: 0,
            status: FulfillmentStatus::Skipped(reason),
        }
    }

    /// Sessions that could not be placed.
    #[inline]
    pub fn missing(&self) -> u32 {
        self.sessions_requested - self.sessions_placed
    }

    /// Whether fewer sessions were placed than requested.
    #[inline]
    pub fn is_shortfall(&self) -> bool {
        self.sessions_placed < self.sessions_requested
    }

    /// Placed / requested (1.0 for a zero request).
    pub fn ratio(&self) -> f64 {
        if self.sessions_requested == 0 {
            1.0
        } else {
            self.sessions_placed as f64 / self.sessions_requested as f64
        }
    }
}

/// Classification of non-fatal notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Course references a teacher that does not exist.
    UnresolvedTeacher,
    /// No resource is large enough for the course.
    NoResourceCapacity,
    /// Course and teacher departments differ.
    DepartmentMismatch,
    /// Course got fewer sessions than requested.
    PartialFulfillment,
    /// Courses exist but there are no teachers or no resources.
    NothingToSchedule,
}

/// A non-blocking warning for the caller to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Related course, if any.
    pub course_id: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl Notice {
    pub(crate) fn for_course(
        kind: NoticeKind,
        course: &Course,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            course_id: Some(course.id.clone()),
            message: message.into(),
        }
    }

    pub(crate) fn general(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            course_id: None,
            message: message.into(),
        }
    }

    /// Whether this notice reports an unresolved reference.
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(
            self.kind,
            NoticeKind::UnresolvedTeacher | NoticeKind::NoResourceCapacity
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableReport {
    grid: ScheduleGrid,
    fulfillment: Vec<Fulfillment>,
    notices: Vec<Notice>,
}

impl TimetableReport {
    pub(crate) fn new(
        grid: ScheduleGrid,
        fulfillment: Vec<Fulfillment>,
        notices: Vec<Notice>,
    ) -> Self {
        Self {
            grid,
            fulfillment,
            notices,
        }
    }

    /// The day × slot grid.
    pub fn grid(&self) -> &ScheduleGrid {
        &self.grid
    }

    /// One record per course, in course input order.
    pub fn fulfillment(&self) -> &[Fulfillment] {
        &self.fulfillment
    }

    /// Warnings raised during the run, in the order they occurred.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Fulfillment record of one course.
    pub fn fulfillment_for(&self, course_id: &str) -> Option<&Fulfillment> {
        self.fulfillment.iter().find(|f| f.course_id == course_id)
    }

    /// Sum of sessions across all grid cells.
    pub fn total_placed_sessions(&self) -> usize {
        self.grid.total_placed_sessions()
    }

    /// Courses that received fewer sessions than requested.
    pub fn shortfalls(&self) -> Vec<&Fulfillment> {
        self.fulfillment.iter().filter(|f| f.is_shortfall()).collect()
    }

    /// Whether every course is fully placed.
    pub fn is_complete(&self) -> bool {
        self.fulfillment.iter().all(|f| !f.is_shortfall())
    }

    /// Consumes the report, returning its parts.
    pub fn into_parts(self) -> (ScheduleGrid, Vec<Fulfillment>, Vec<Notice>) {
        (self.grid, self.fulfillment, self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days() -> Vec<String> {
        vec!["Monday".into(), "Tuesday".into()]
    }

    fn slots() -> Vec<String> {
        vec!["9:00".into(), "10:00".into(), "11:00".into()]
    }

    fn session(
        course: &str,
        teacher: &str,
        resource: &str,
        day: &str,
        slot: &str,
    ) -> PlacedSession {
        let c = Course::new(course, teacher).with_students(20);
        let t = Teacher::new(teacher);
        let r = Resource::classroom(resource).with_capacity(30);
        PlacedSession::new(&c, &t, &r, day, slot)
    }

    fn sample_grid() -> ScheduleGrid {
        let mut g = ScheduleGrid::new(&days(), &slots());
        g.push(0, 0, session("C1", "T1", "R1", "Monday", "9:00"));
        g.push(0, 0, session("C2", "T2", "R2", "Monday", "9:00"));
        g.push(1, 2, session("C1", "T1", "R1", "Tuesday", "11:00"));
        g
    }

    #[test]
    fn test_new_grid_has_every_cell() {
        let g = ScheduleGrid::new(&days(), &slots());
        assert_eq!(g.cell_count(), 6);
        assert_eq!(g.iter().count(), 6);
        assert!(g.iter().all(|(_, _, cell)| cell.is_empty()));
        assert_eq!(g.total_placed_sessions(), 0);
    }

    #[test]
    fn test_cell_lookup() {
        let g = sample_grid();
        assert_eq!(g.cell("Monday", "9:00").unwrap().len(), 2);
        assert_eq!(g.cell("Tuesday", "9:00").unwrap().len(), 0);
        assert!(g.cell("Sunday", "9:00").is_none());
        assert!(g.cell("Monday", "8:00").is_none());
    }

    #[test]
    fn test_iter_is_day_major() {
        let g = sample_grid();
        let order: Vec<(&str, &str)> = g.iter().map(|(d, s, _)| (d, s)).collect();
        assert_eq!(order[0], ("Monday", "9:00"));
        assert_eq!(order[2], ("Monday", "11:00"));
        assert_eq!(order[3], ("Tuesday", "9:00"));
    }

    #[test]
    fn test_session_queries() {
        let g = sample_grid();
        assert_eq!(g.total_placed_sessions(), 3);
        assert_eq!(g.sessions_for_course("C1").len(), 2);
        assert_eq!(g.sessions_for_resource("R2").len(), 1);
        assert_eq!(g.sessions_for_teacher("T1").len(), 2);
        assert_eq!(g.sessions_for_course("C9").len(), 0);
    }

    #[test]
    fn test_fulfillment_status() {
        let c = Course::new("C1", "T1").with_sessions(3);
        let full = Fulfillment::placed(&c, 3);
        assert_eq!(full.status, FulfillmentStatus::Complete);
        assert!(!full.is_shortfall());

        let partial = Fulfillment::placed(&c, 1);
        assert_eq!(partial.status, FulfillmentStatus::Partial);
        assert_eq!(partial.missing(), 2);
        assert!((partial.ratio() - 1.0 / 3.0).abs() < 1e-10);

        let skipped = Fulfillment::skipped(&c, SkipReason::UnresolvedTeacher);
        assert_eq!(skipped.sessions_placed, 0);
        assert_eq!(skipped.sessions_requested, 3);
        assert!(skipped.is_shortfall());
    }

    #[test]
    fn test_report_shortfalls() {
        let c1 = Course::new("C1", "T1").with_sessions(2);
        let c2 = Course::new("C2", "T2").with_sessions(1);
        let report = TimetableReport::new(
            sample_grid(),
            vec![Fulfillment::placed(&c1, 2), Fulfillment::placed(&c2, 0)],
            Vec::new(),
        );
        assert_eq!(report.total_placed_sessions(), 3);
        let short = report.shortfalls();
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].course_id, "C2");
        assert!(!report.is_complete());
        assert!(report.fulfillment_for("C1").is_some());
    }

    #[test]
    fn test_session_snapshot_names() {
        let c = Course::new("C1", "T1")
            .with_name("Physics")
            .with_code("PHYS201")
            .with_difficulty(Difficulty::Medium);
        let t = Teacher::new("T1").with_name("Prof. Johnson");
        let r = Resource::laboratory("R1").with_name("Physics Lab");
        let s = PlacedSession::new(&c, &t, &r, "Monday", "9:00");
        assert_eq!(s.course_name, "Physics");
        assert_eq!(s.teacher_name, "Prof. Johnson");
        assert_eq!(s.resource_name, "Physics Lab");
        assert_eq!(s.difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn test_grid_serializes_as_day_slot_map() {
        let json = serde_json::to_value(sample_grid()).unwrap();
        assert_eq!(json["Monday"]["9:00"].as_array().unwrap().len(), 2);
        assert_eq!(json["Monday"]["10:00"].as_array().unwrap().len(), 0);
        assert_eq!(json["Tuesday"]["11:00"][0]["course_id"], "C1");
        assert_eq!(json.as_object().unwrap().len(), 2);
        assert_eq!(json["Tuesday"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_grid_deserialize_keeps_configured_order() {
        let days = vec!["Friday".to_string(), "Monday".to_string()];
        let slots = vec!["14:00".to_string(), "9:00".to_string()];
        let mut grid = ScheduleGrid::new(&days, &slots);
        grid.push(1, 0, session("C1", "T1", "R1", "Monday", "14:00"));

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.find("Friday").unwrap() < json.find("Monday").unwrap());
        let back: ScheduleGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.days(), days.as_slice());
        assert_eq!(back.slots(), slots.as_slice());
        assert_eq!(back, grid);
    }

    #[test]
    fn test_grid_rejects_ragged_map() {
        let json = r#"{"Monday":{"9:00":[],"10:00":[]},"Tuesday":{"9:00":[]}}"#;
        let err = serde_json::from_str::<ScheduleGrid>(json).unwrap_err();
        assert!(err.to_string().contains("Tuesday"));
    }

    #[test]
    fn test_report_into_parts() {
        let c1 = Course::new("C1", "T1").with_sessions(2);
        let notice = Notice::general(NoticeKind::NothingToSchedule, "nothing");
        let report = TimetableReport::new(
            sample_grid(),
            vec![Fulfillment::placed(&c1, 2)],
            vec![notice.clone()],
        );
        let (grid, fulfillment, notices) = report.into_parts();
        assert_eq!(grid, sample_grid());
        assert_eq!(fulfillment[0].course_id, "C1");
        assert_eq!(notices, vec![notice]);
    }

    #[test]
    fn test_report_serde() {
        let report = TimetableReport::new(sample_grid(), Vec::new(), Vec::new());
        let json = serde_json::to_string(&report).unwrap();
        let back: TimetableReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
