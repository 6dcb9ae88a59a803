//! Teacher model.
//!
//! Teachers deliver course sessions. Each teacher has a weekly availability
//! calendar, a department affiliation and a nominal weekly teaching cap.

use serde::{Deserialize, Serialize};

use super::WeeklyAvailability;

/// A teacher who can be assigned course sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address (informational).
    pub email: String,
    /// Department affiliation.
    pub department: String,
    /// Subjects the teacher covers (informational).
    pub subjects: Vec<String>,
    /// Free (day, slot) pairs.
    pub availability: WeeklyAvailability,
    /// Upper bound on sessions per week.
    ///
    /// Only enforced when the engine runs with
    /// [`enforce_teacher_max_hours`](crate::config::TimetableConfig::enforce_teacher_max_hours).
    pub max_hours_per_week: i32,
}

impl Teacher {
    /// Default weekly cap for new teachers.
    pub const DEFAULT_MAX_HOURS: i32 = 20;

    /// Creates a teacher with no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            department: String::new(),
            subjects: Vec::new(),
            availability: WeeklyAvailability::new(),
            max_hours_per_week: Self::DEFAULT_MAX_HOURS,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Replaces the availability calendar.
    pub fn with_availability(mut self, availability: WeeklyAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Adds free slots on a day.
    pub fn with_slots<I, S>(mut self, day: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability = self.availability.with_slots(day, slots);
        self
    }

    /// Sets the weekly cap.
    pub fn with_max_hours(mut self, max_hours_per_week: i32) -> Self {
        self.max_hours_per_week = max_hours_per_week;
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
    fn test_teacher_builder() {
        let t = Teacher::new("T1")
            .with_name("Dr. Sarah Smith")
            .with_email("sarah.smith@university.edu")
            .with_department("Mathematics")
            .with_subject("Calculus")
            .with_slots("Monday", ["9:00", "10:00"])
            .with_max_hours(16);

        assert_eq!(t.id, "T1");
        assert_eq!(t.department, "Mathematics");
        assert_eq!(t.subjects, vec!["Calculus".to_string()]);
        assert_eq!(t.availability.slots_on("Monday"), ["9:00", "10:00"]);
        assert_eq!(t.max_hours_per_week, 16);
        assert_eq!(t.display_name(), "Dr. Sarah Smith");
    }

    #[test]
    fn test_display_name_fallback() {
        let t = Teacher::new("T9");
        assert_eq!(t.display_name(), "T9");
        assert_eq!(t.max_hours_per_week, Teacher::DEFAULT_MAX_HOURS);
    }
}
