//! Game rule constants

use crate::error::{LifeGameError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DAYS_PER_YEAR: i32 = 365;
pub const DEFAULT_MAX_AGE_YEARS: i32 = 30;
pub const DEFAULT_DIE_FACES: i32 = 600;
pub const DEFAULT_ROLL_DELAY_MS: u64 = 300;

/// Calendar and dice parameters for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub days_per_year: i32,
    pub max_age_years: i32,
    /// The die rolls uniformly in `1..=die_faces`
    pub die_faces: i32,
    /// Cosmetic pause before a roll resolves
    pub roll_delay_ms: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            max_age_years: DEFAULT_MAX_AGE_YEARS,
            die_faces: DEFAULT_DIE_FACES,
            roll_delay_ms: DEFAULT_ROLL_DELAY_MS,
        }
    }
}

impl GameRules {
    /// Day count at which the session ends
    #[inline]
    pub fn max_days(&self) -> i32 {
        self.days_per_year * self.max_age_years
    }

    #[inline]
    pub fn age_years(&self, day: i32) -> i32 {
        day / self.days_per_year
    }

    #[inline]
    pub fn age_days(&self, day: i32) -> i32 {
        day % self.days_per_year
    }

    pub fn roll_delay(&self) -> Duration {
        Duration::from_millis(self.roll_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_per_year < 1 {
            return Err(LifeGameError::InvalidConfig(format!(
                "days_per_year must be at least 1, got {}",
                self.days_per_year
            )));
        }
        if self.max_age_years < 1 {
            return Err(LifeGameError::InvalidConfig(format!(
                "max_age_years must be at least 1, got {}",
                self.max_age_years
            )));
        }
        if self.die_faces < 1 {
            return Err(LifeGameError::InvalidConfig(format!(
                "die_faces must be at least 1, got {}",
                self.die_faces
            )));
        }
        self.days_per_year
            .checked_mul(self.max_age_years)
            .ok_or_else(|| LifeGameError::InvalidConfig("max days overflows i32".to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_days() {
        let rules = GameRules::default();
        assert_eq!(rules.max_days(), 10950);
        assert_eq!(rules.age_years(10950), 30);
        assert_eq!(rules.age_days(10950), 0);
    }

    #[test]
    fn test_age_split() {
        let rules = GameRules::default();
        assert_eq!(rules.age_years(364), 0);
        assert_eq!(rules.age_days(364), 364);
        assert_eq!(rules.age_years(365), 1);
        assert_eq!(rules.age_days(400), 35);
    }

    #[test]
    fn test_validate_rejects_zero_year() {
        let rules = GameRules {
            days_per_year: 0,
            ..Default::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(LifeGameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_overflow() {
        let rules = GameRules {
            days_per_year: i32::MAX,
            max_age_years: 2,
            ..Default::default()
        };
        assert!(rules.validate().is_err());
    }
}
