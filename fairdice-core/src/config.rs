use crate::dice::Die;
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Fewest integers the startup input must carry
pub const MIN_SUPPLIED_VALUES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Draws per dice pair when answering a help query
    pub odds_trials: u32,
    pub first_move_range: u32,
    pub roll_range: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            odds_trials: 10_000,
            first_move_range: 2,
            roll_range: 6,
        }
    }
}

impl GameConfig {
    pub fn with_odds_trials(mut self, trials: u32) -> Self {
        self.odds_trials = trials;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.odds_trials == 0 {
            return Err(GameError::configuration("Odds trials must be greater than 0"));
        }

        if self.first_move_range == 0 || self.roll_range == 0 {
            return Err(GameError::configuration("Commitment ranges must be greater than 0"));
        }

        Ok(())
    }
}

/// Startup dice, parsed and checked before any session exists.
///
/// Each entry is one die written as comma-separated integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceConfig {
    dice: Vec<Die>,
}

impl DiceConfig {
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Self> {
        let dice = inputs
            .iter()
            .map(|input| Die::parse(input.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let supplied = dice.iter().map(|die| die.faces().len()).sum::<usize>();
        if supplied < MIN_SUPPLIED_VALUES {
            return Err(GameError::validation(format!(
                "expected at least {} dice values, got {}",
                MIN_SUPPLIED_VALUES, supplied
            )));
        }

        Ok(Self { dice })
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn value_count(&self) -> usize {
        self.dice.iter().map(|die| die.faces().len()).sum()
    }
}
