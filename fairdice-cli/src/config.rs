use fairdice_core::GameConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub verbose: bool,
    pub json: bool,
    pub odds_trials: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            json: false,
            odds_trials: GameConfig::default().odds_trials,
        }
    }
}

impl CliConfig {
    pub fn new(verbose: bool, json: bool, trials: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            verbose,
            json,
            odds_trials: trials.unwrap_or(defaults.odds_trials),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::default().with_odds_trials(self.odds_trials)
    }
}
