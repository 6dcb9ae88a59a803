//! Availability index.
//!
//! Resolves, for a teacher and a configured day, the slots to try in scan
//! order. Slots are stored as indices into the configured slot sequence so
//! the engine can address grid cells and occupancy keys directly.

use std::collections::HashMap;

use crate::config::TimetableConfig;
use crate::models::{Catalog, Resource};

/// Per-teacher lookup of free (day, slot) pairs.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex<'a> {
    /// teacher_id → per configured day → slot indices in availability order.
    teachers: HashMap<&'a str, Vec<Vec<usize>>>,
    slots: &'a [String],
    respect_resources: bool,
}

impl<'a> AvailabilityIndex<'a> {
    /// Builds the index for every teacher in the catalog.
    ///
    /// When teacher IDs repeat, the first teacher wins (matching
    /// [`Catalog::teacher`]). Duplicate slots and slots outside the
    /// configuration are dropped.
    pub fn new(catalog: &'a Catalog, config: &'a TimetableConfig) -> Self {
        let mut teachers = HashMap::with_capacity(catalog.teachers.len());
        for teacher in &catalog.teachers {
            if teachers.contains_key(teacher.id.as_str()) {
                continue;
            }
            let per_day = config
                .days
                .iter()
                .map(|day| {
                    let mut indices = Vec::new();
                    for slot in teacher.availability.slots_on(day) {
                        if let Some(idx) = config.slot_index(slot) {
                            if !indices.contains(&idx) {
                                indices.push(idx);
                            }
                        }
                    }
                    indices
                })
                .collect();
            teachers.insert(teacher.id.as_str(), per_day);
        }

        Self {
            teachers,
            slots: &config.slots,
            respect_resources: config.respect_resource_availability,
        }
    }

    /// Slot indices free for `teacher_id` on the configured day `day_idx`.
    ///
    /// Empty if the teacher is unknown or has no entry for that day.
    pub fn slot_indices(&self, teacher_id: &str, day_idx: usize) -> &[usize] {
        self.teachers
            .get(teacher_id)
            .and_then(|days| days.get(day_idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Slot identifiers free for `teacher_id` on `day_idx`, in scan order.
    pub fn slots_for(&self, teacher_id: &str, day_idx: usize) -> Vec<&'a str> {
        self.slot_indices(teacher_id, day_idx)
            .iter()
            .map(|&i| self.slots[i].as_str())
            .collect()
    }

    /// Whether `resource` may be booked in slot `slot_idx`.
    ///
    /// Always `true` unless resource availability is being respected.
    pub fn admits(&self, resource: &Resource, slot_idx: usize) -> bool {
        !self.respect_resources || resource.is_available_in(&self.slots[slot_idx])
    }

    /// Number of free (day, slot) pairs for a teacher within the grid.
    pub fn capacity_of(&self, teacher_id: &str) -> usize {
        self.teachers
            .get(teacher_id)
            .map(|days| days.iter().map(Vec::len).sum())
            .unwrap_or(0)
    }
}
