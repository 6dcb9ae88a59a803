//! Input validation for timetabling runs.
//!
//! Two levels:
//! - [`validate_structure`]: malformed input that makes a run impossible.
//!   The engine calls it first and aborts on the first error.
//! - [`audit_catalog`]: integrity issues a CRUD layer should surface to
//!   users (duplicate IDs or course codes, dangling teacher references,
//!   availability outside the configured grid). Never fatal; the engine
//!   does not call it.

use crate::config::{Strategy, TimetableConfig};
use crate::error::StructuralError;
use crate::models::Catalog;
use std::collections::HashSet;

/// Audit result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A catalog integrity issue.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Issue category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog integrity issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// Two courses share a catalog code.
    DuplicateCourseCode,
    /// A course references a teacher that doesn't exist.
    InvalidTeacherReference,
    /// A course's department differs from its teacher's.
    DepartmentMismatch,
    /// Availability names a day outside the configured days.
    UnknownDay,
    /// Availability names a slot outside the configured slots.
    UnknownSlot,
    /// A slot is listed twice for the same day.
    DuplicateAvailabilitySlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that a run is structurally possible.
///
/// Checks, in order:
/// 1. Day and slot sequences are non-empty and free of duplicates
/// 2. Backtracking node limit is positive
/// 3. Every course requests at least one session and has non-negative enrollment
/// 4. Every resource has capacity of at least 1
///
/// # Returns
/// The first violation found.
pub fn validate_structure(
    catalog: &Catalog,
    config: &TimetableConfig,
) -> Result<(), StructuralError> {
    if config.days.is_empty() {
        return Err(StructuralError::EmptyDays);
    }
    if config.slots.is_empty() {
        return Err(StructuralError::EmptySlots);
    }

    let mut seen = HashSet::new();
    for day in &config.days {
        if !seen.insert(day.as_str()) {
            return Err(StructuralError::DuplicateDay(day.clone()));
        }
    }
    let mut seen = HashSet::new();
    for slot in &config.slots {
        if !seen.insert(slot.as_str()) {
            return Err(StructuralError::DuplicateSlot(slot.clone()));
        }
    }

    if config.strategy == (Strategy::Backtracking { node_limit: 0 }) {
        return Err(StructuralError::ZeroNodeLimit);
    }

    for course in &catalog.courses {
        if course.sessions_per_week < 1 {
            return Err(StructuralError::InvalidSessionsPerWeek {
                course_id: course.id.clone(),
                value: course.sessions_per_week,
            });
        }
        if course.students_enrolled < 0 {
            return Err(StructuralError::NegativeEnrollment {
                course_id: course.id.clone(),
                value: course.students_enrolled,
            });
        }
    }

    for resource in &catalog.resources {
        if resource.capacity < 1 {
            return Err(StructuralError::InvalidCapacity {
                resource_id: resource.id.clone(),
                value: resource.capacity,
            });
        }
    }

    Ok(())
}

/// Audits catalog integrity against a configuration.
///
/// Checks:
/// 1. No duplicate teacher, course or resource IDs
/// 2. No duplicate non-empty course codes
/// 3. Every course's teacher exists
/// 4. Course and teacher departments agree (when both are set)
/// 5. Teacher availability only names configured days and slots
/// 6. No slot is listed twice on the same day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn audit_catalog(catalog: &Catalog, config: &TimetableConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for t in &catalog.teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut resource_ids = HashSet::new();
    for r in &catalog.resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    let mut codes = HashSet::new();
    for c in &catalog.courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
        if !c.code.is_empty() && !codes.insert(c.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseCode,
                format!("Course '{}' reuses code '{}'", c.id, c.code),
            ));
        }

        match catalog.teacher(&c.teacher_id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTeacherReference,
                format!("Course '{}' references unknown teacher '{}'", c.id, c.teacher_id),
            )),
            Some(t) => {
                if !c.department.is_empty()
                    && !t.department.is_empty()
                    && c.department != t.department
                {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DepartmentMismatch,
                        format!(
                            "Course '{}' ({}) is taught by '{}' ({})",
                            c.id, c.department, t.id, t.department
                        ),
                    ));
                }
            }
        }
    }

    for t in &catalog.teachers {
        // Sorted so the error order is stable across runs.
        let mut days: Vec<&str> = t.availability.days().collect();
        days.sort_unstable();
        for day in days {
            if config.day_index(day).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Teacher '{}' lists unknown day '{}'", t.id, day),
                ));
                continue;
            }
            let mut seen = HashSet::new();
            for slot in t.availability.slots_on(day) {
                if !seen.insert(slot.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateAvailabilitySlot,
                        format!("Teacher '{}' lists {} {} twice", t.id, day, slot),
                    ));
                } else if config.slot_index(slot).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownSlot,
                        format!("Teacher '{}' lists unknown slot {} {}", t.id, day, slot),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
