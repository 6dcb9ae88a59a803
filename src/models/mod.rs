//! Timetabling domain models.
//!
//! Input entities (`Teacher`, `Course`, `Resource`, gathered in a `Catalog`)
//! and the output report (`ScheduleGrid`, `Fulfillment`, `Notice`,
//! `TimetableReport`).
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training center |
//! |-------------|------------|--------|-----------------|
//! | Teacher | Lecturer | Teacher | Trainer |
//! | Course | Course section | Class subject | Workshop |
//! | Resource | Lecture hall / lab | Classroom | Training room |
//! | Slot | Lecture period | Lesson period | Session block |

mod availability;
mod catalog;
mod course;
mod resource;
mod schedule;
mod teacher;

pub use availability::WeeklyAvailability;
pub use catalog::Catalog;
pub use course::{Course, Difficulty};
pub use resource::{Resource, ResourceType};
pub use schedule::{
    Fulfillment, FulfillmentStatus, Notice, NoticeKind, PlacedSession, ScheduleGrid, SkipReason,
    TimetableReport,
};
pub use teacher::Teacher;
