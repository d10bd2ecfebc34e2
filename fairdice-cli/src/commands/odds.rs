use super::render::odds_table;
use crate::config::CliConfig;
use anyhow::Result;
use fairdice_core::{preset_dice, OddsTable};

pub fn odds(exact: bool, config: &CliConfig) -> Result<()> {
    config.game_config().validate()?;

    let dice = preset_dice();
    let table = if exact {
        OddsTable::exact(&dice)
    } else {
        OddsTable::estimate(&dice, config.odds_trials, &mut rand::thread_rng())
    };

    println!("Probability that the row die beats the column die:");
    println!("{}", odds_table(&table));
    Ok(())
}
