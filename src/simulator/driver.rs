//! Async roll driver with the cosmetic pre-roll delay

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;

use super::{LifeGame, LogEntry};

/// Shared handle that rolls after a fixed pause.
///
/// The session is locked only to start and to finish a roll, never across
/// the pause, so state can be read (or reset) while a roll is pending.
#[derive(Clone)]
pub struct RollDriver {
    game: Arc<Mutex<LifeGame>>,
    delay: Duration,
}

impl RollDriver {
    /// Uses the roll delay from the session's rules
    pub fn new(game: LifeGame) -> Self {
        let delay = game.engine().rules().roll_delay();
        Self {
            game: Arc::new(Mutex::new(game)),
            delay,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn lock(&self) -> MutexGuard<'_, LifeGame> {
        self.game.lock()
    }

    pub fn can_roll(&self) -> bool {
        self.game.lock().can_roll()
    }

    /// Start a roll, wait out the delay, then resolve it.
    ///
    /// A second call while one is pending fails with `InvalidState`, as does
    /// completing a roll that a reset made stale.
    pub async fn roll(&self) -> Result<LogEntry> {
        let ticket = self.game.lock().begin_roll()?;
        tokio::time::sleep(self.delay).await;
        self.game.lock().complete_roll(ticket)
    }

    pub fn reset(&self) {
        self.game.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeGameError;
    use crate::simulator::TurnEngine;

    fn driver(delay_ms: u64) -> RollDriver {
        let game = LifeGame::with_seed(Arc::new(TurnEngine::bundled()), 11);
        RollDriver::new(game).with_delay(Duration::from_millis(delay_ms))
    }

    #[test]
    fn test_delay_defaults_to_rules() {
        let game = LifeGame::with_seed(Arc::new(TurnEngine::bundled()), 0);
        assert_eq!(RollDriver::new(game).delay(), Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_roll_resolves_after_delay() {
        let driver = driver(5);
        let entry = driver.roll().await.unwrap();

        assert_eq!(entry.id, 1);
        assert!(driver.can_roll());
        assert_eq!(driver.lock().state().turn_count, 1);
    }

    #[tokio::test]
    async fn test_concurrent_roll_rejected() {
        let driver = driver(30);
        let (first, second) = tokio::join!(driver.roll(), driver.roll());

        assert!(first.is_ok());
        assert!(matches!(second, Err(LifeGameError::InvalidState(_))));
        assert_eq!(driver.lock().log().len(), 1);
    }

    #[tokio::test]
    async fn test_roll_blocked_during_delay() {
        let driver = driver(50);
        let pending = {
            let driver = driver.clone();
            tokio::spawn(async move { driver.roll().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!driver.can_roll());
        assert!(driver.lock().is_rolling());

        let entry = pending.await.unwrap().unwrap();
        assert_eq!(entry.id, 1);
        assert!(driver.can_roll());
    }

    #[tokio::test]
    async fn test_reset_during_delay_discards_roll() {
        let driver = driver(50);
        let pending = {
            let driver = driver.clone();
            tokio::spawn(async move { driver.roll().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        driver.reset();

        let result = pending.await.unwrap();
        assert!(matches!(result, Err(LifeGameError::InvalidState(_))));
        assert!(driver.lock().log().is_empty());
        assert_eq!(driver.lock().state().turn_count, 0);
    }

    #[tokio::test]
    async fn test_plays_to_the_end() {
        let driver = driver(0);
        while driver.can_roll() {
            driver.roll().await.unwrap();
        }

        let game = driver.lock();
        assert!(game.state().finished);
        assert_eq!(game.state().elapsed_days, 10950);
        assert_eq!(game.log().len() as u32, game.state().turn_count);
    }
}
