//! Academic timetabling engine for the U-Engine ecosystem.
//!
//! Assigns weekly course sessions to (day, slot, room) triples so that no
//! teacher or room is double-booked, every session falls in its teacher's
//! availability, and every room seats its course. Courses that cannot be
//! fully placed are reported, never silently dropped.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Course`, `Resource`, `Catalog`,
//!   `ScheduleGrid`, `Fulfillment`, `Notice`, `TimetableReport`
//! - **`scheduler`**: `TimetableScheduler` (greedy and backtracking
//!   placement), `AvailabilityIndex`, `Occupancy`, `TimetableKpi`
//! - **`config`**: `TimetableConfig` — days, slots, strategy, opt-in constraints
//! - **`validation`**: Structural checks (fatal) and catalog audit (advisory)
//! - **`error`**: `StructuralError`
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` per placement, `warn` per notice, `info`
//! per run). No subscriber is installed; that is the caller's choice.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - de Werra (1985), "An Introduction to Timetabling"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::{Strategy, TimetableConfig};
pub use error::StructuralError;
pub use scheduler::TimetableScheduler;
