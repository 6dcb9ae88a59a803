//! Timetable quality metrics (KPIs).
//!
//! Computes summary indicators from a completed report and its catalog,
//! for dashboards and for comparing strategies.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill Rate | placed sessions / requested sessions |
//! | Courses Complete / Partial / Skipped | fulfillment status counts |
//! | Teachers Assigned | distinct teachers with at least one session |
//! | Resources Used | distinct resources with at least one session |
//! | Resource Utilization | sessions hosted / grid cells |
//! | Teacher Load | sessions taught per teacher |
//! | Over Max Hours | teachers whose load exceeds `max_hours_per_week` |

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Catalog, FulfillmentStatus, TimetableReport};

/// Timetable performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableKpi {
    /// Sessions placed in the grid.
    pub total_sessions: usize,
    /// Sessions requested by fulfillment records.
    pub requested_sessions: usize,
    /// placed / requested (1.0 when nothing was requested).
    pub fill_rate: f64,
    /// Courses with every session placed.
    pub courses_complete: usize,
    /// Courses attempted but short of sessions.
    pub courses_partial: usize,
    /// Courses never attempted (unresolved teacher or room).
    pub courses_skipped: usize,
    /// Distinct teachers with at least one session.
    pub teachers_assigned: usize,
    /// Distinct resources with at least one session.
    pub resources_used: usize,
    /// Per-resource share of grid cells occupied (0.0..1.0).
    pub utilization_by_resource: BTreeMap<String, f64>,
    /// Sessions per teacher.
    pub teacher_load: BTreeMap<String, usize>,
    /// Teachers whose load exceeds their weekly cap, sorted by ID.
    pub teachers_over_max_hours: Vec<String>,
}

impl TimetableKpi {
    /// Computes KPIs from a report and the catalog it was generated from.
    pub fn calculate(report: &TimetableReport, catalog: &Catalog) -> Self {
        let grid = report.grid();
        let total_sessions = grid.total_placed_sessions();
        let requested_sessions: usize = report
            .fulfillment()
            .iter()
            .map(|f| f.sessions_requested as usize)
            .sum();

        let mut courses_complete = 0;
        let mut courses_partial = 0;
        let mut courses_skipped = 0;
        for f in report.fulfillment() {
            match f.status {
                FulfillmentStatus::Complete => courses_complete += 1,
                FulfillmentStatus::Partial => courses_partial += 1,
                FulfillmentStatus::Skipped(_) => courses_skipped += 1,
            }
        }

        let mut teacher_load: BTreeMap<String, usize> = BTreeMap::new();
        let mut resource_load: BTreeMap<String, usize> = BTreeMap::new();
        for s in grid.sessions() {
            *teacher_load.entry(s.teacher_id.clone()).or_insert(0) += 1;
            *resource_load.entry(s.resource_id.clone()).or_insert(0) += 1;
        }

        let cells = grid.cell_count();
        let utilization_by_resource = resource_load
            .iter()
            .map(|(id, &n)| {
                let util = if cells == 0 { 0.0 } else { n as f64 / cells as f64 };
                (id.clone(), util)
            })
            .collect();

        let over: BTreeSet<String> = teacher_load
            .iter()
            .filter(|&(id, &load)| {
                catalog
                    .teacher(id)
                    .is_some_and(|t| (load as i64) > i64::from(t.max_hours_per_week))
            })
            .map(|(id, _)| id.clone())
            .collect();

        let fill_rate = if requested_sessions == 0 {
            1.0
        } else {
            total_sessions as f64 / requested_sessions as f64
        };

        Self {
            total_sessions,
            requested_sessions,
            fill_rate,
            courses_complete,
            courses_partial,
            courses_skipped,
            teachers_assigned: teacher_load.len(),
            resources_used: resource_load.len(),
            utilization_by_resource,
            teacher_load,
            teachers_over_max_hours: over.into_iter().collect(),
        }
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fill_rate: f64, max_skipped: usize) -> bool {
        self.fill_rate >= min_fill_rate && self.courses_skipped <= max_skipped
    }
}
