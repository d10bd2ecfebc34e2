use crate::dice::Die;
use crate::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    Human,
    Computer,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Human => write!(f, "user"),
            Participant::Computer => write!(f, "computer"),
        }
    }
}

/// Player state in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Waiting,
    Armed,
    Rolled,
}

/// player seat: the die it was dealt and the roll it produced
#[derive(Debug, Clone)]
pub struct Player {
    participant: Participant,
    state: PlayerState,
    die: Option<Die>,
    roll: Option<i64>,
}

impl Player {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            state: PlayerState::Waiting,
            die: None,
            roll: None,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn die(&self) -> Option<&Die> {
        self.die.as_ref()
    }

    pub fn roll(&self) -> Option<i64> {
        self.roll
    }

    pub fn assign_die(&mut self, die: Die) -> Result<()> {
        if self.die.is_some() {
            return Err(GameError::InvalidState(format!(
                "{} already holds a die",
                self.participant
            )));
        }

        tracing::debug!("Assigned {} to the {}", die, self.participant);
        self.die = Some(die);
        self.state = PlayerState::Armed;
        Ok(())
    }

    /// Draw a face from the held die and record it
    pub fn roll_die<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<i64> {
        if self.roll.is_some() {
            return Err(GameError::InvalidState(format!(
                "{} has already rolled",
                self.participant
            )));
        }

        let die = self.die.as_ref().ok_or_else(|| {
            GameError::InvalidState(format!("{} has no die to roll", self.participant))
        })?;

        let face = die.roll(rng);
        self.roll = Some(face);
        self.state = PlayerState::Rolled;
        Ok(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_requires_die() {
        let mut player = Player::new(Participant::Human);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(player.roll_die(&mut rng).is_err());
        assert_eq!(player.state(), PlayerState::Waiting);
    }

    #[test]
    fn test_roll_once() {
        let mut player = Player::new(Participant::Computer);
        let mut rng = StdRng::seed_from_u64(0);
        player.assign_die(Die::new(vec![1, 1, 6, 6, 8, 8]).unwrap()).unwrap();

        let face = player.roll_die(&mut rng).unwrap();
        assert!([1, 6, 8].contains(&face));
        assert_eq!(player.roll(), Some(face));
        assert!(player.roll_die(&mut rng).is_err());
        assert_eq!(player.state(), PlayerState::Rolled);
    }

    #[test]
    fn test_die_assigned_once() {
        let mut player = Player::new(Participant::Human);
        player.assign_die(Die::new(vec![1]).unwrap()).unwrap();
        assert!(player.assign_die(Die::new(vec![2]).unwrap()).is_err());
    }
}
