//! Provably fair dice game engine
//!
//! The computer commits to each random value with an HMAC-SHA256 tag before the
//! user contributes input, then reveals the value and key so the user can check
//! the tag. Three non-transitive dice are dealt from a fixed pool and the higher
//! roll wins.

pub mod commitment;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod input;
pub mod player;

pub use commitment::{
    combine, verify_disclosure, Commitment, CommitmentScheme, HmacScheme, Opening, Round,
    RoundProof, Secret, Tag,
};
pub use config::{DiceConfig, GameConfig};
pub use dice::{preset_dice, DicePool, Die, OddsTable};
pub use error::{GameError, Result};
pub use game::{decide, Event, GameSession, Outcome, PhaseKind, Prompt};
pub use input::Command;
pub use player::{Participant, Player, PlayerState};

/// Parse the startup dice and open a session waiting on the first move
pub fn start_session<S: AsRef<str>>(config: GameConfig, dice: &[S]) -> Result<GameSession> {
    let supplied = DiceConfig::parse(dice)?;
    let mut session = GameSession::new(config, &supplied)?;
    session.begin()?;
    Ok(session)
}
