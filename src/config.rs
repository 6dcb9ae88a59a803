//! Engine configuration.
//!
//! Days and slots are configuration, not discovered from data: the grid has
//! exactly one cell per configured (day, slot) pair, and availability
//! entries outside the configuration are ignored.

use serde::{Deserialize, Serialize};

/// Default teaching days.
pub const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Default teaching slots.
pub const DEFAULT_SLOTS: [&str; 6] = ["9:00", "10:00", "11:00", "14:00", "15:00", "16:00"];

/// Default node budget for [`Strategy::Backtracking`].
pub const DEFAULT_NODE_LIMIT: u64 = 100_000;

/// Placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Single-pass first-fit in course input order.
    #[default]
    Greedy,
    /// Depth-first search for more total placements, seeded with the greedy
    /// result. Stops after `node_limit` search nodes.
    Backtracking { node_limit: u64 },
}

impl Strategy {
    /// Backtracking with the default node budget.
    pub fn backtracking() -> Self {
        Strategy::Backtracking {
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Days in scan order.
    pub days: Vec<String>,
    /// Slots in grid order.
    pub slots: Vec<String>,
    /// Placement strategy.
    pub strategy: Strategy,
    /// Skip courses whose teacher belongs to another department.
    pub require_department_match: bool,
    /// Cap each teacher's total sessions at `max_hours_per_week`.
    pub enforce_teacher_max_hours: bool,
    /// Only book a resource in slots it lists in `available_slots`.
    pub respect_resource_availability: bool,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            strategy: Strategy::Greedy,
            require_department_match: false,
            enforce_teacher_max_hours: false,
            respect_resource_availability: false,
        }
    }
}

impl TimetableConfig {
    /// Creates the default Monday–Friday, six-slot configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the day sequence.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the slot sequence.
    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Requires teacher and course departments to match.
    pub fn with_department_match(mut self, enabled: bool) -> Self {
        self.require_department_match = enabled;
        self
    }

    /// Enforces `max_hours_per_week` per teacher.
    pub fn with_teacher_max_hours(mut self, enabled: bool) -> Self {
        self.enforce_teacher_max_hours = enabled;
        self
    }

    /// Honors per-resource slot lists.
    pub fn with_resource_availability(mut self, enabled: bool) -> Self {
        self.respect_resource_availability = enabled;
        self
    }

    /// Index of a configured day.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    /// Index of a configured slot.
    pub fn slot_index(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_shape() {
        let c = TimetableConfig::default();
        assert_eq!(c.days.len(), 5);
        assert_eq!(c.slots.len(), 6);
        assert_eq!(c.days[0], "Monday");
        assert_eq!(c.slots[3], "14:00");
        assert_eq!(c.strategy, Strategy::Greedy);
        assert!(!c.enforce_teacher_max_hours);
        assert!(!c.respect_resource_availability);
        assert!(!c.require_department_match);
    }

    #[test]
    fn test_builder() {
        let c = TimetableConfig::new()
            .with_days(["Mon", "Tue"])
            .with_slots(["A", "B", "C"])
            .with_strategy(Strategy::backtracking())
            .with_teacher_max_hours(true);
        assert_eq!(c.day_index("Tue"), Some(1));
        assert_eq!(c.slot_index("C"), Some(2));
        assert_eq!(c.slot_index("Z"), None);
        assert_eq!(
            c.strategy,
            Strategy::Backtracking {
                node_limit: DEFAULT_NODE_LIMIT
            }
        );
        assert!(c.enforce_teacher_max_hours);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let json = r#"{"days":["Saturday"],"enforce_teacher_max_hours":true}"#;
        let c: TimetableConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.days, vec!["Saturday".to_string()]);
        assert_eq!(c.slots.len(), 6);
        assert!(c.enforce_teacher_max_hours);
    }

    #[test]
    fn test_deserialize_strategy() {
        let c: TimetableConfig =
            serde_json::from_str(r#"{"strategy":{"backtracking":{"node_limit":50}}}"#).unwrap();
        assert_eq!(c.strategy, Strategy::Backtracking { node_limit: 50 });
    }
}
