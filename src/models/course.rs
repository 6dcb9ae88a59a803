//! Course model.
//!
//! A course needs a fixed number of weekly sessions, each taught by the
//! course's teacher in a room large enough for its enrollment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A course whose weekly sessions are to be placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog code (e.g. "MATH301").
    pub code: String,
    /// Teacher who delivers every session.
    pub teacher_id: String,
    /// Owning department.
    pub department: String,
    /// Number of distinct (day, slot) occupancies needed per week.
    pub sessions_per_week: i32,
    /// Number of enrolled students; rooms must seat at least this many.
    pub students_enrolled: i32,
    /// Workload rating shown alongside sessions.
    pub difficulty: Option<Difficulty>,
    /// Academic term (informational).
    pub semester: String,
    /// Other display metadata.
    pub attributes: HashMap<String, String>,
}

/// Course workload rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        };
        f.write_str(s)
    }
}

impl Course {
    /// Creates a course with one weekly session and no students.
    pub fn new(id: impl Into<String>, teacher_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            teacher_id: teacher_id.into(),
            department: String::new(),
            sessions_per_week: 1,
            students_enrolled: 0,
            difficulty: None,
            semester: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalog code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the weekly session count.
    pub fn with_sessions(mut self, sessions_per_week: i32) -> Self {
        self.sessions_per_week = sessions_per_week;
        self
    }

    /// Sets the enrollment.
    pub fn with_students(mut self, students_enrolled: i32) -> Self {
        self.students_enrolled = students_enrolled;
        self
    }

    /// Sets the difficulty rating.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Sets the academic term.
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Adds a display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Display name, falling back to the ID when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("C1", "T1")
            .with_name("Advanced Mathematics")
            .with_code("MATH301")
            .with_department("Mathematics")
            .with_sessions(4)
            .with_students(30)
            .with_difficulty(Difficulty::High)
            .with_semester("Fall 2024")
            .with_attribute("building", "A");

        assert_eq!(c.teacher_id, "T1");
        assert_eq!(c.code, "MATH301");
        assert_eq!(c.sessions_per_week, 4);
        assert_eq!(c.students_enrolled, 30);
        assert_eq!(c.difficulty, Some(Difficulty::High));
        assert_eq!(c.attributes.get("building"), Some(&"A".to_string()));
    }

    #[test]
    fn test_course_defaults() {
        let c = Course::new("C1", "T1");
        assert_eq!(c.sessions_per_week, 1);
        assert_eq!(c.students_enrolled, 0);
        assert_eq!(c.display_name(), "C1");
    }

    #[test]
    fn test_difficulty_serde() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(Difficulty::High.to_string(), "high");
    }
}
