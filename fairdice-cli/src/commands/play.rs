use super::render::{event_text, prompt_text};
use crate::config::CliConfig;
use anyhow::{Context, Result};
use dialoguer::Input;
use fairdice_core::{DiceConfig, Event, GameSession};

pub fn play(dice: &[String], config: &CliConfig) -> Result<()> {
    let supplied = DiceConfig::parse(dice).context("Cannot start the game")?;
    let mut session = GameSession::new(config.game_config(), &supplied)?;
    session.begin()?;

    tracing::debug!("Playing session {}", session.id());
    if config.verbose {
        println!("Session {}", session.id());
    }

    while let Some(prompt) = session.prompt() {
        println!("{}", prompt_text(&prompt));

        let line: String = Input::new()
            .with_prompt("Your selection")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read your selection")?;

        for event in session.handle(&line)? {
            println!("{}", event_text(&event));

            if config.json {
                if let Event::FirstMoveResolved { proof, .. } | Event::RollResolved { proof, .. } =
                    &event
                {
                    println!("{}", proof.to_json()?);
                }
            }
        }
        println!();
    }

    Ok(())
}
