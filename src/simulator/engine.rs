//! Turn engine: pure `(state, roll) -> (state, log entry)` transitions

use crate::config::{bundled_catalog, GameRules};
use crate::error::{LifeGameError, Result};
use crate::event::{apply_event, select_event, Catalog, EventPicker};
use crate::property::SimulationState;
use std::sync::Arc;

use super::{LogEntry, TurnLog};

/// Resolve one roll against `state`.
///
/// The input state is never modified; on error nothing is produced and the
/// caller keeps what it holds.
///
/// # Errors
/// * `InvalidConfig` if `rules` fails [`GameRules::validate`]
/// * `InvalidInput` if `die <= 0` or the picker returns an index outside the
///   eligible list
/// * `InvalidState` if `state.finished` is already set
pub fn resolve_turn<P: EventPicker + ?Sized>(
    state: &SimulationState,
    die: i32,
    picker: &mut P,
    catalog: &Catalog,
    rules: &GameRules,
) -> Result<(SimulationState, LogEntry)> {
    rules.validate()?;
    if die <= 0 {
        return Err(LifeGameError::InvalidInput(format!(
            "die value must be positive, got {}",
            die
        )));
    }
    if state.finished {
        return Err(LifeGameError::InvalidState(
            "session already finished; reset before rolling again".to_string(),
        ));
    }

    let max_days = rules.max_days();
    let candidate_day = state.elapsed_days.saturating_add(die);
    let mut next = state.clone();
    next.turn_count = next.turn_count.saturating_add(1);

    // Terminal roll: clamp and skip event evaluation
    if candidate_day >= max_days {
        next.elapsed_days = max_days;
        next.finished = true;

        let entry = LogEntry::snapshot(&next, die, rules, None);
        tracing::debug!(
            turn = next.turn_count,
            die,
            day = max_days,
            "terminal roll, session finished"
        );
        return Ok((next, entry));
    }

    next.elapsed_days = candidate_day;
    let age = rules.age_years(candidate_day);

    let event = select_event(catalog, age, picker)?;
    if let Some(event) = event {
        apply_event(&mut next, event);
    }

    tracing::debug!(
        turn = next.turn_count,
        die,
        day = candidate_day,
        age,
        event = event.map(|e| e.title.as_str()),
        "turn resolved"
    );

    let entry = LogEntry::snapshot(&next, die, rules, event.cloned());
    Ok((next, entry))
}

/// Fresh state and empty log for a new session
pub fn reset() -> (SimulationState, TurnLog) {
    (SimulationState::new(), TurnLog::new())
}

/// Catalog and rules bundled together for repeated turn resolution
#[derive(Debug, Clone)]
pub struct TurnEngine {
    catalog: Arc<Catalog>,
    rules: GameRules,
}

impl TurnEngine {
    pub fn new(catalog: impl Into<Arc<Catalog>>, rules: GameRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self {
            catalog: catalog.into(),
            rules,
        })
    }

    /// Bundled catalog with default rules
    pub fn bundled() -> Self {
        Self {
            catalog: Arc::new(bundled_catalog().clone()),
            rules: GameRules::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[inline]
    pub fn resolve_turn<P: EventPicker + ?Sized>(
        &self,
        state: &SimulationState,
        die: i32,
        picker: &mut P,
    ) -> Result<(SimulationState, LogEntry)> {
        resolve_turn(state, die, picker, &self.catalog, &self.rules)
    }
}
