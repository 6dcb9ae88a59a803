//! Timetable assignment engine and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableScheduler` uses a greedy first-fit heuristic: courses in input
//! order, days in configured order, slots in the teacher's availability
//! order, one fixed room per course. It is deterministic and explainable but
//! not optimal; an optional bounded backtracking search can recover sessions
//! the greedy order gives away.
//!
//! # KPI
//!
//! `TimetableKpi` summarizes a report: fill rate, course outcomes, teacher
//! load and room utilization.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

mod availability;
mod backtracking;
mod engine;
mod greedy;
mod kpi;
mod occupancy;

pub use availability::AvailabilityIndex;
pub use engine::TimetableScheduler;
pub use kpi::TimetableKpi;
pub use occupancy::{Occupancy, Occupant};
