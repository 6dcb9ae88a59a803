//! Entity catalog.
//!
//! A caller-owned snapshot of every teacher, course and resource for one
//! generation run. The engine only reads it; collaborators that edit
//! entities concurrently must hand over a consistent copy.
//!
//! # Ordering
//! Vector order is significant: courses earlier in `courses` get placement
//! priority, and resources are tried in `resources` order.

use serde::{Deserialize, Serialize};

use super::{Course, Resource, Teacher};

/// Input snapshot for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Teachers, in catalog order.
    pub teachers: Vec<Teacher>,
    /// Courses, in priority order.
    pub courses: Vec<Course>,
    /// Resources, in selection order.
    pub resources: Vec<Resource>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from its three collections.
    pub fn from_parts(
        teachers: Vec<Teacher>,
        courses: Vec<Course>,
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            teachers,
            courses,
            resources,
        }
    }

    /// Appends a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Appends a course (lowest priority so far).
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Appends a resource (tried last so far).
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// First teacher with the given ID.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// First course with the given ID.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// First resource with the given ID.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// First resource (catalog order) that seats `students`.
    pub fn first_fitting_resource(&self, students: i32) -> Option<&Resource> {
        self.resources.iter().find(|r| r.fits(students))
    }

    /// Whether any of the three collections is empty.
    pub fn is_incomplete(&self) -> bool {
        self.teachers.is_empty() || self.courses.is_empty() || self.resources.is_empty()
    }

    /// Total sessions requested across all courses.
    pub fn requested_sessions(&self) -> u32 {
        self.courses
            .iter()
            .map(|c| c.sessions_per_week.max(0) as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new()
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("T2"))
            .with_course(Course::new("C1", "T1").with_sessions(3).with_students(40))
            .with_course(Course::new("C2", "T2").with_sessions(2).with_students(10))
            .with_resource(Resource::classroom("R1").with_capacity(20))
            .with_resource(Resource::lecture_hall("R2").with_capacity(100))
            .with_resource(Resource::lecture_hall("R3").with_capacity(200))
    }

    #[test]
    fn test_lookup() {
        let c = sample();
        assert_eq!(c.teacher("T2").map(|t| t.id.as_str()), Some("T2"));
        assert!(c.teacher("T9").is_none());
        assert!(c.course("C1").is_some());
        assert!(c.resource("R3").is_some());
    }

    #[test]
    fn test_first_fitting_resource_uses_catalog_order() {
        let c = sample();
        assert_eq!(c.first_fitting_resource(10).unwrap().id, "R1");
        assert_eq!(c.first_fitting_resource(40).unwrap().id, "R2");
        assert!(c.first_fitting_resource(500).is_none());
    }

    #[test]
    fn test_requested_sessions() {
        assert_eq!(sample().requested_sessions(), 5);
        assert_eq!(Catalog::new().requested_sessions(), 0);
    }

    #[test]
    fn test_incomplete() {
        assert!(Catalog::new().is_incomplete());
        assert!(!sample().is_incomplete());
    }
}
