//! Weekly availability model.
//!
//! A teacher's weekly calendar: for each day of the week, the time slots at
//! which the teacher is free to teach.
//!
//! # Slot Model
//! Days and slots are opaque identifiers (e.g. `"Monday"`, `"9:00"`). The
//! engine configuration defines which days and slots exist; availability
//! entries outside that configuration are never scheduled.
//!
//! # Ordering
//! Slots keep insertion order within a day. A slot appears at most once per
//! day: adding an existing slot is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-day free slots of a teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAvailability {
    days: HashMap<String, Vec<String>>,
}

impl WeeklyAvailability {
    /// Creates an empty calendar (never available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one free slot on a day.
    pub fn with_slot(mut self, day: impl Into<String>, slot: impl Into<String>) -> Self {
        self.add_slot(day, slot);
        self
    }

    /// Adds several free slots on a day, in order.
    pub fn with_slots<I, S>(mut self, day: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let day = day.into();
        for slot in slots {
            self.add_slot(day.clone(), slot);
        }
        self
    }

    /// Adds a free slot, ignoring duplicates.
    pub fn add_slot(&mut self, day: impl Into<String>, slot: impl Into<String>) {
        let slots = self.days.entry(day.into()).or_default();
        let slot = slot.into();
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }

    /// Free slots on a day, in insertion order. Empty if the day has no entry.
    pub fn slots_on(&self, day: &str) -> &[String] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the slot is free on the given day.
    pub fn is_available(&self, day: &str, slot: &str) -> bool {
        self.slots_on(day).iter().any(|s| s == slot)
    }

    /// Days that have at least one entry (unordered).
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Total number of free (day, slot) pairs.
    pub fn total_slots(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether no slot is free on any day.
    pub fn is_empty(&self) -> bool {
        self.total_slots() == 0
    }
}
