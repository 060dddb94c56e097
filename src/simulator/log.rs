//! Turn log entries

use crate::config::{EventRecord, GameRules};
use crate::error::{LifeGameError, Result};
use crate::property::SimulationState;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Snapshot of one resolved turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based, increasing with each turn
    pub id: u32,
    pub die: i32,
    pub day: i32,
    pub age_years: i32,
    pub age_days: i32,
    pub money_after: i64,
    pub employment_after: Option<String>,
    pub items_after: Vec<String>,
    pub companions_after: Vec<String>,
    /// `None` when nothing was eligible or the roll ended the session
    pub event: Option<EventRecord>,
}

impl LogEntry {
    /// Capture `state` after a turn has been applied to it
    pub fn snapshot(
        state: &SimulationState,
        die: i32,
        rules: &GameRules,
        event: Option<EventRecord>,
    ) -> Self {
        Self {
            id: state.turn_count,
            die,
            day: state.elapsed_days,
            age_years: state.age_years(rules),
            age_days: state.age_days(rules),
            money_after: state.money,
            employment_after: state.employment.clone(),
            items_after: state.items.clone(),
            companions_after: state.companions.clone(),
            event,
        }
    }
}

/// Append-only log, newest entry first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnLog {
    entries: VecDeque<LogEntry>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry; its id must be greater than the newest one
    pub fn push(&mut self, entry: LogEntry) -> Result<()> {
        let last_id = self.latest().map(|e| e.id).unwrap_or(0);
        if entry.id <= last_id {
            return Err(LifeGameError::InvalidState(format!(
                "log entry id {} does not follow {}",
                entry.id, last_id
            )));
        }
        self.entries.push_front(entry);
        Ok(())
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// Oldest first
    pub fn chronological(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().rev()
    }
}
