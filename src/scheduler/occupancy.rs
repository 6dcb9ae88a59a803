//! Occupancy record.
//!
//! The set of `(entity, day, slot)` triples already consumed during a run.
//!
//! Teachers and resources are separate namespaces. Catalogs commonly number
//! teachers and rooms independently (`"1"`, `"2"`, ...), and a single shared
//! `"{id}-{day}-{slot}"` key space would let teacher `"1"` block room `"1"`.
//! Keying on [`Occupant`] makes that collision impossible.

use std::collections::{HashMap, HashSet};

/// An entity that can be committed to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant<'a> {
    Teacher(&'a str),
    Resource(&'a str),
}

/// Committed (entity, day, slot) triples plus per-teacher session counts.
#[derive(Debug, Clone, Default)]
pub struct Occupancy<'a> {
    taken: HashSet<(Occupant<'a>, usize, usize)>,
    teacher_load: HashMap<&'a str, u32>,
}

impl<'a> Occupancy<'a> {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the entity is committed at (day, slot).
    #[inline]
    pub fn is_taken(&self, who: Occupant<'a>, day_idx: usize, slot_idx: usize) -> bool {
        self.taken.contains(&(who, day_idx, slot_idx))
    }

    /// Whether both the teacher and the resource are free at (day, slot).
    #[inline]
    pub fn is_free(
        &self,
        teacher_id: &'a str,
        resource_id: &'a str,
        day_idx: usize,
        slot_idx: usize,
    ) -> bool {
        !self.is_taken(Occupant::Teacher(teacher_id), day_idx, slot_idx)
            && !self.is_taken(Occupant::Resource(resource_id), day_idx, slot_idx)
    }

    /// Commits the teacher and the resource at (day, slot).
    pub fn commit(
        &mut self,
        teacher_id: &'a str,
        resource_id: &'a str,
        day_idx: usize,
        slot_idx: usize,
    ) {
        self.taken.insert((Occupant::Teacher(teacher_id), day_idx, slot_idx));
        self.taken.insert((Occupant::Resource(resource_id), day_idx, slot_idx));
        *self.teacher_load.entry(teacher_id).or_insert(0) += 1;
    }

    /// Reverts a previous [`commit`](Self::commit).
    pub fn release(
        &mut self,
        teacher_id: &'a str,
        resource_id: &'a str,
        day_idx: usize,
        slot_idx: usize,
    ) {
        let removed = self.taken.remove(&(Occupant::Teacher(teacher_id), day_idx, slot_idx));
        self.taken.remove(&(Occupant::Resource(resource_id), day_idx, slot_idx));
        if removed {
            if let Some(load) = self.teacher_load.get_mut(teacher_id) {
                *load = load.saturating_sub(1);
            }
        }
    }

    /// Sessions committed for a teacher so far.
    pub fn teacher_load(&self, teacher_id: &str) -> u32 {
        self.teacher_load.get(teacher_id).copied().unwrap_or(0)
    }

    /// Number of committed triples.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Whether nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
