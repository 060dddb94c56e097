//! LifeGame - a single player's session around the turn engine
//!
//! The session owns the state and the log, supplies randomness for the die
//! and the event pick, and enforces the "one roll at a time, none after the
//! end" gating that the pure engine leaves to its caller.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::error::{LifeGameError, Result};
use crate::event::{EventPicker, RandomPick};
use crate::property::SimulationState;

use super::{reset, LogEntry, TurnEngine, TurnLog};

/// Roll a die with `faces` sides, uniformly in `1..=faces`
#[inline]
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, faces: i32) -> i32 {
    rng.gen_range(1..=faces.max(1))
}

/// Handle returned by [`LifeGame::begin_roll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RollTicket {
    epoch: u64,
}

pub struct LifeGame {
    engine: Arc<TurnEngine>,
    state: SimulationState,
    log: TurnLog,
    rng: StdRng,
    /// Set between `begin_roll` and `complete_roll`
    rolling: bool,
    /// Bumped on every reset so a roll started before it cannot land after it
    epoch: u64,
}

impl LifeGame {
    pub fn new(engine: Arc<TurnEngine>) -> Self {
        Self::with_rng(engine, StdRng::from_entropy())
    }

    /// Reproducible session: same seed, same dice
    pub fn with_seed(engine: Arc<TurnEngine>, seed: u64) -> Self {
        Self::with_rng(engine, StdRng::seed_from_u64(seed))
    }

    fn with_rng(engine: Arc<TurnEngine>, rng: StdRng) -> Self {
        let (state, log) = reset();
        Self {
            engine,
            state,
            log,
            rng,
            rolling: false,
            epoch: 0,
        }
    }

    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    #[inline]
    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    #[inline]
    pub fn can_roll(&self) -> bool {
        !self.state.finished && !self.rolling
    }

    /// Roll a random die and resolve the turn immediately
    pub fn roll(&mut self) -> Result<LogEntry> {
        self.check_can_roll()?;
        self.resolve_random()
    }

    /// Resolve a turn with a caller-chosen die and event picker
    pub fn roll_with<P: EventPicker + ?Sized>(&mut self, die: i32, picker: &mut P) -> Result<LogEntry> {
        self.check_can_roll()?;
        let (next, entry) = self.engine.resolve_turn(&self.state, die, picker)?;
        self.commit(next, entry)
    }

    /// Mark a roll as in flight. Further rolls are rejected until
    /// [`complete_roll`](Self::complete_roll) or [`reset`](Self::reset).
    pub fn begin_roll(&mut self) -> Result<RollTicket> {
        self.check_can_roll()?;
        self.rolling = true;
        Ok(RollTicket { epoch: self.epoch })
    }

    /// Resolve the roll started by `ticket`
    pub fn complete_roll(&mut self, ticket: RollTicket) -> Result<LogEntry> {
        if ticket.epoch != self.epoch {
            tracing::warn!("roll superseded by reset, discarding");
            return Err(LifeGameError::InvalidState(
                "session was reset while the roll was in flight".to_string(),
            ));
        }
        if !self.rolling {
            return Err(LifeGameError::InvalidState(
                "no roll in progress".to_string(),
            ));
        }

        self.rolling = false;
        self.resolve_random()
    }

    /// Discard all progress and start over
    pub fn reset(&mut self) {
        let (state, log) = reset();
        self.state = state;
        self.log = log;
        self.rolling = false;
        self.epoch = self.epoch.wrapping_add(1);
        tracing::info!(epoch = self.epoch, "session reset");
    }

    fn check_can_roll(&self) -> Result<()> {
        if self.state.finished {
            tracing::warn!(turn = self.state.turn_count, "roll rejected, session finished");
            return Err(LifeGameError::InvalidState(
                "session already finished; reset before rolling again".to_string(),
            ));
        }
        if self.rolling {
            tracing::warn!("roll rejected, another roll is in flight");
            return Err(LifeGameError::InvalidState(
                "a roll is already in progress".to_string(),
            ));
        }
        Ok(())
    }

    fn resolve_random(&mut self) -> Result<LogEntry> {
        let die = roll_die(&mut self.rng, self.engine.rules().die_faces);
        let (next, entry) =
            self.engine
                .resolve_turn(&self.state, die, &mut RandomPick(&mut self.rng))?;
        self.commit(next, entry)
    }

    fn commit(&mut self, next: SimulationState, entry: LogEntry) -> Result<LogEntry> {
        self.log.push(entry.clone())?;
        self.state = next;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EventRecord, GameRules};
    use crate::event::{Catalog, FixedPick};

    fn engine() -> Arc<TurnEngine> {
        let catalog = Catalog::new(vec![
            EventRecord {
                granted_item: Some("Bicycle".to_string()),
                ..EventRecord::new("Bike", 0, 29, -100)
            },
            EventRecord {
                joined_companion: Some("Dog".to_string()),
                ..EventRecord::new("Dog", 0, 29, 0)
            },
        ])
        .unwrap();
        Arc::new(TurnEngine::new(catalog, GameRules::default()).unwrap())
    }

    #[test]
    fn test_roll_die_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let die = roll_die(&mut rng, 600);
            assert!((1..=600).contains(&die));
        }
        assert_eq!(roll_die(&mut rng, 1), 1);
    }

    #[test]
    fn test_roll_appends_newest_first() {
        let mut game = LifeGame::with_seed(engine(), 3);
        let first = game.roll().unwrap();
        let second = game.roll().unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(game.log().latest(), Some(&second));
        assert_eq!(game.state().turn_count, 2);
        assert_eq!(game.state().elapsed_days, first.die + second.die);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = LifeGame::with_seed(engine(), 99);
        let mut b = LifeGame::with_seed(engine(), 99);
        for _ in 0..10 {
            assert_eq!(a.roll().unwrap(), b.roll().unwrap());
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_plays_until_finished_then_rejects() {
        let mut game = LifeGame::with_seed(engine(), 5);
        let mut turns = 0;
        while game.can_roll() {
            game.roll().unwrap();
            turns += 1;
            assert!(turns <= 10950, "session never finished");
        }

        assert!(game.state().finished);
        assert_eq!(game.log().len(), turns);
        assert!(game.log().latest().unwrap().event.is_none());
        assert!(matches!(game.roll(), Err(LifeGameError::InvalidState(_))));
        assert_eq!(game.log().len(), turns);
    }

    #[test]
    fn test_roll_with_fixed_inputs() {
        let mut game = LifeGame::with_seed(engine(), 0);
        let entry = game.roll_with(30, &mut FixedPick(1)).unwrap();

        assert_eq!(entry.die, 30);
        assert_eq!(game.state().companions, vec!["Dog"]);
        assert!(game.state().items.is_empty());
    }

    #[test]
    fn test_failed_roll_keeps_state() {
        let mut game = LifeGame::with_seed(engine(), 0);
        game.roll_with(30, &mut FixedPick(0)).unwrap();
        let before = game.state().clone();

        assert!(game.roll_with(0, &mut FixedPick(0)).is_err());
        assert!(game.roll_with(10, &mut FixedPick(5)).is_err());

        assert_eq!(game.state(), &before);
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn test_begin_roll_blocks_second_roll() {
        let mut game = LifeGame::with_seed(engine(), 0);
        let ticket = game.begin_roll().unwrap();

        assert!(!game.can_roll());
        assert!(game.begin_roll().is_err());
        assert!(game.roll().is_err());

        let entry = game.complete_roll(ticket).unwrap();
        assert_eq!(entry.id, 1);
        assert!(game.can_roll());
        assert!(game.complete_roll(ticket).is_err());
    }

    #[test]
    fn test_reset_discards_in_flight_roll() {
        let mut game = LifeGame::with_seed(engine(), 0);
        game.roll().unwrap();
        let ticket = game.begin_roll().unwrap();

        game.reset();

        assert!(game.can_roll());
        assert!(matches!(
            game.complete_roll(ticket),
            Err(LifeGameError::InvalidState(_))
        ));
        assert_eq!(game.state(), &SimulationState::default());
        assert!(game.log().is_empty());
    }

    #[test]
    fn test_reset_after_finish_allows_new_session() {
        let mut game = LifeGame::with_seed(engine(), 0);
        game.roll_with(20000, &mut FixedPick(0)).unwrap();
        assert!(!game.can_roll());

        game.reset();
        game.reset();

        assert!(game.can_roll());
        assert_eq!(game.state(), &SimulationState::new());
        assert_eq!(game.roll().unwrap().id, 1);
    }
}
