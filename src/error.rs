//! Fatal engine errors.
//!
//! A `StructuralError` means the input cannot be scheduled at all and the
//! whole run is rejected with no partial result. Data inconsistencies that
//! affect single courses (missing teacher, no room large enough, exhausted
//! availability) are not errors; they are reported as
//! [`Notice`](crate::models::Notice)s on the report.

/// Malformed configuration or entity data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("day sequence is empty")]
    EmptyDays,

    #[error("slot sequence is empty")]
    EmptySlots,

    #[error("day '{0}' is configured more than once")]
    DuplicateDay(String),

    #[error("slot '{0}' is configured more than once")]
    DuplicateSlot(String),

    #[error("course '{course_id}' requests {value} sessions per week (must be at least 1)")]
    InvalidSessionsPerWeek { course_id: String, value: i32 },

    #[error("course '{course_id}' has negative enrollment {value}")]
    NegativeEnrollment { course_id: String, value: i32 },

    #[error("resource '{resource_id}' has capacity {value} (must be at least 1)")]
    InvalidCapacity { resource_id: String, value: i32 },

    #[error("backtracking node limit must be positive")]
    ZeroNodeLimit,
}
