//! Resource (room) model.
//!
//! Resources host course sessions: lecture halls, classrooms, laboratories.
//! Each resource has a seating capacity and, optionally, a list of slots in
//! which it may be booked.

use serde::{Deserialize, Serialize};

/// A room that can host sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room classification (informational).
    pub resource_type: ResourceType,
    /// Seats available; must be at least 1.
    pub capacity: i32,
    /// Installed equipment (informational).
    pub equipment: Vec<String>,
    /// Building / floor (informational).
    pub location: String,
    /// Slots in which the room may be booked, on every day.
    ///
    /// `None` = always bookable. Only consulted when the engine runs with
    /// [`TimetableConfig::respect_resource_availability`].
    ///
    /// [`TimetableConfig::respect_resource_availability`]:
    ///     crate::config::TimetableConfig::respect_resource_availability
    pub available_slots: Option<Vec<String>>,
}

/// Room classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Classroom,
    LectureHall,
    Laboratory,
    ComputerLab,
    /// Domain-specific type.
    Custom(String),
}

impl Resource {
    /// Creates a resource with capacity 1.
    pub fn new(id: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            resource_type,
            capacity: 1,
            equipment: Vec::new(),
            location: String::new(),
            available_slots: None,
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, ResourceType::Classroom)
    }

    /// Creates a lecture hall.
    pub fn lecture_hall(id: impl Into<String>) -> Self {
        Self::new(id, ResourceType::LectureHall)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, ResourceType::Laboratory)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds a piece of equipment.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Restricts booking to the given slots.
    pub fn with_available_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_slots = Some(slots.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the room seats `students`.
    #[inline]
    pub fn fits(&self, students: i32) -> bool {
        self.capacity >= students
    }

    /// Whether the room may be booked in `slot`.
    ///
    /// Returns `true` when no slot list is set.
    pub fn is_available_in(&self, slot: &str) -> bool {
        match &self.available_slots {
            None => true,
            Some(slots) => slots.iter().any(|s| s == slot),
        }
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
    fn test_resource_builder() {
        let r = Resource::lecture_hall("R1")
            .with_name("Main Auditorium")
            .with_capacity(100)
            .with_equipment("Projector")
            .with_location("Building A, Floor 1");

        assert_eq!(r.id, "R1");
        assert_eq!(r.resource_type, ResourceType::LectureHall);
        assert_eq!(r.capacity, 100);
        assert_eq!(r.equipment, vec!["Projector".to_string()]);
        assert_eq!(r.display_name(), "Main Auditorium");
    }

    #[test]
    fn test_fits_is_inclusive() {
        let r = Resource::classroom("R1").with_capacity(30);
        assert!(r.fits(30));
        assert!(r.fits(0));
        assert!(!r.fits(31));
    }

    #[test]
    fn test_availability_without_list() {
        let r = Resource::laboratory("L1");
        assert!(r.is_available_in("9:00"));
        assert!(r.is_available_in("16:00"));
    }

    #[test]
    fn test_availability_with_list() {
        let r = Resource::laboratory("L1").with_available_slots(["10:00", "11:00"]);
        assert!(!r.is_available_in("9:00"));
        assert!(r.is_available_in("10:00"));
    }
}
