//! Simulation state structure and operations

use crate::config::GameRules;
use serde::{Deserialize, Serialize};

/// Per-session simulation state.
///
/// `items` and `companions` behave as sets for membership but keep insertion
/// order for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    pub elapsed_days: i32,
    pub money: i64,
    pub employment: Option<String>,
    pub items: Vec<String>,
    pub companions: Vec<String>,
    pub turn_count: u32,
    pub finished: bool,
}

impl SimulationState {
    /// Fresh state: day zero, no money, nothing held
    #[inline]
    pub fn new() -> Self {
        Self {
            // Lists stay short over a 30 year session
            items: Vec::with_capacity(8),
            companions: Vec::with_capacity(8),
            ..Default::default()
        }
    }

    #[inline]
    pub fn age_years(&self, rules: &GameRules) -> i32 {
        rules.age_years(self.elapsed_days)
    }

    #[inline]
    pub fn age_days(&self, rules: &GameRules) -> i32 {
        rules.age_days(self.elapsed_days)
    }

    #[inline]
    pub fn add_money(&mut self, delta: i64) {
        self.money = self.money.saturating_add(delta);
    }

    pub fn set_employment(&mut self, job: &str) {
        self.employment = Some(job.to_string());
    }

    pub fn clear_employment(&mut self) {
        self.employment = None;
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn has_companion(&self, name: &str) -> bool {
        self.companions.iter().any(|c| c == name)
    }

    /// Returns `true` if the item was not held before
    pub fn grant_item(&mut self, item: &str) -> bool {
        insert_label(&mut self.items, item)
    }

    /// Returns `true` if the item was held
    pub fn remove_item(&mut self, item: &str) -> bool {
        remove_label(&mut self.items, item)
    }

    pub fn join_companion(&mut self, name: &str) -> bool {
        insert_label(&mut self.companions, name)
    }

    pub fn depart_companion(&mut self, name: &str) -> bool {
        remove_label(&mut self.companions, name)
    }
}

// Linear search is fine: a session collects a handful of labels at most.
fn insert_label(labels: &mut Vec<String>, label: &str) -> bool {
    if labels.iter().any(|l| l == label) {
        return false;
    }
    labels.push(label.to_string());
    true
}

fn remove_label(labels: &mut Vec<String>, label: &str) -> bool {
    let before = labels.len();
    labels.retain(|l| l != label);
    labels.len() != before
}
