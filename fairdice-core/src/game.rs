use crate::commitment::{
    combine, Commitment, CommitmentScheme, HmacScheme, Opening, Round, RoundProof, Tag,
};
use crate::config::{DiceConfig, GameConfig};
use crate::dice::{preset_dice, DicePool, Die, OddsTable};
use crate::input::Command;
use crate::player::{Participant, Player, PlayerState};
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session phase. A pending commitment lives inside the phase of the round
/// that owns it and is dropped or revealed when that round ends.
#[derive(Debug)]
pub enum Phase {
    Init,
    FirstMove {
        commitment: Commitment,
    },
    DiceSelection,
    RollExchange {
        roller: Participant,
        commitment: Commitment,
    },
    Done {
        outcome: Option<Outcome>,
    },
}

/// Phase without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Init,
    FirstMove,
    DiceSelection,
    RollExchange(Participant),
    Done,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Init => PhaseKind::Init,
            Phase::FirstMove { .. } => PhaseKind::FirstMove,
            Phase::DiceSelection => PhaseKind::DiceSelection,
            Phase::RollExchange { roller, .. } => PhaseKind::RollExchange(*roller),
            Phase::Done { .. } => PhaseKind::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
}

/// Strictly higher roll wins; anything else goes to the computer.
pub fn decide(human_roll: i64, computer_roll: i64) -> Outcome {
    if human_roll > computer_roll {
        Outcome::HumanWins
    } else {
        Outcome::ComputerWins
    }
}

/// What the session is waiting for
#[derive(Debug)]
pub enum Prompt<'a> {
    Guess {
        tag: &'a Tag,
        range: u32,
    },
    SelectDie {
        dice: &'a [Die],
    },
    Contribution {
        roller: Participant,
        tag: &'a Tag,
        range: u32,
    },
}

/// Result of feeding one line to the session
#[derive(Debug)]
pub enum Event {
    FirstMoveResolved {
        guess: u32,
        guessed: bool,
        proof: RoundProof,
    },
    DiceAssigned {
        human: Die,
        computer: Die,
    },
    RollResolved {
        roller: Participant,
        proof: RoundProof,
        roll: i64,
    },
    Finished {
        outcome: Outcome,
        human_roll: i64,
        computer_roll: i64,
    },
    Help(OddsTable),
    /// Recoverable input problem, the same prompt is still pending
    Rejected(GameError),
    Cancelled,
}

#[derive(Debug)]
pub struct GameSession<S = HmacScheme, R = OsRng> {
    id: Uuid,
    config: GameConfig,
    scheme: S,
    rng: R,
    phase: Phase,
    pool: DicePool,
    human: Player,
    computer: Player,
}

impl GameSession {
    pub fn new(config: GameConfig, supplied: &DiceConfig) -> Result<Self> {
        Self::with_parts(config, supplied, HmacScheme::new(), OsRng)
    }
}

impl<S: CommitmentScheme, R: Rng> GameSession<S, R> {
    pub fn with_parts(config: GameConfig, supplied: &DiceConfig, scheme: S, rng: R) -> Result<Self> {
        config.validate()?;

        let id = Uuid::new_v4();
        tracing::info!(
            "Session {}: ignoring {} supplied dice values, using the preset pool",
            id,
            supplied.value_count()
        );

        Ok(Self {
            id,
            config,
            scheme,
            rng,
            phase: Phase::Init,
            pool: DicePool::preset(),
            human: Player::new(Participant::Human),
            computer: Player::new(Participant::Computer),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    pub fn player(&self, participant: Participant) -> &Player {
        match participant {
            Participant::Human => &self.human,
            Participant::Computer => &self.computer,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Done { outcome } => outcome,
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done { .. })
    }

    /// Init -> FirstMove: commit to the first-move coin.
    pub fn begin(&mut self) -> Result<()> {
        if !matches!(self.phase, Phase::Init) {
            return Err(GameError::InvalidState("Session already started".to_string()));
        }

        let commitment = self.scheme.commit(self.config.first_move_range)?;
        self.phase = Phase::FirstMove { commitment };

        tracing::info!("Session {} started first move", self.id);
        Ok(())
    }

    pub fn prompt(&self) -> Option<Prompt<'_>> {
        match &self.phase {
            Phase::FirstMove { commitment } => Some(Prompt::Guess {
                tag: commitment.tag(),
                range: commitment.range(),
            }),
            Phase::DiceSelection => Some(Prompt::SelectDie {
                dice: self.pool.dice(),
            }),
            Phase::RollExchange { roller, commitment } => Some(Prompt::Contribution {
                roller: *roller,
                tag: commitment.tag(),
                range: commitment.range(),
            }),
            Phase::Init | Phase::Done { .. } => None,
        }
    }

    /// Pairwise odds of the preset dice. Leaves the session untouched.
    pub fn odds(&mut self) -> OddsTable {
        OddsTable::estimate(&preset_dice(), self.config.odds_trials, &mut self.rng)
    }

    /// Feed one line of input to the pending prompt.
    ///
    /// Malformed input comes back as [`Event::Rejected`] with the phase unchanged.
    /// `Err` is reserved for faults that end the session.
    pub fn handle(&mut self, line: &str) -> Result<Vec<Event>> {
        if self.prompt().is_none() {
            return Err(GameError::InvalidState(format!(
                "Session is not waiting for input ({:?})",
                self.phase()
            )));
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return Ok(vec![self.reject(e)]),
        };

        match command {
            Command::Exit => {
                self.phase = Phase::Done { outcome: None };
                tracing::info!("Session {} cancelled", self.id);
                Ok(vec![Event::Cancelled])
            }
            Command::Help => Ok(vec![Event::Help(self.odds())]),
            Command::Number(n) => match self.phase() {
                PhaseKind::FirstMove => self.resolve_first_move(n),
                PhaseKind::DiceSelection => self.select_die(n),
                PhaseKind::RollExchange(roller) => self.resolve_roll(roller, n),
                PhaseKind::Init | PhaseKind::Done => Err(GameError::InvalidState(
                    "No prompt pending".to_string(),
                )),
            },
        }
    }

    fn resolve_first_move(&mut self, guess: u32) -> Result<Vec<Event>> {
        let range = self.config.first_move_range;
        if guess >= range {
            return Ok(vec![self.reject(out_of_range(guess, range))]);
        }

        let commitment = self.take_commitment(Phase::DiceSelection)?;
        let (tag, committed_at, opening) = self.open(Round::FirstMove, commitment)?;

        let guessed = opening.value() == guess;
        tracing::info!(
            "Session {} first move: guess {}, value {} ({})",
            self.id,
            guess,
            opening.value(),
            if guessed { "matched" } else { "missed" }
        );

        Ok(vec![Event::FirstMoveResolved {
            guess,
            guessed,
            proof: RoundProof::new(
                Round::FirstMove,
                range,
                &tag,
                committed_at,
                &opening,
                guess,
                None,
            ),
        }])
    }

    fn select_die(&mut self, index: u32) -> Result<Vec<Event>> {
        if self.human.state() != PlayerState::Waiting
            || self.computer.state() != PlayerState::Waiting
        {
            return Err(GameError::InvalidState("Dice were already dealt".to_string()));
        }

        if self.pool.remaining_count() < 2 {
            return Err(GameError::InvalidState(
                "Pool cannot seat both players".to_string(),
            ));
        }

        let human = match self.pool.take_by_index(index as usize) {
            Ok(die) => die,
            Err(e) if e.is_recoverable() => return Ok(vec![self.reject(e)]),
            Err(e) => return Err(e),
        };
        let computer = self.pool.take_first()?;

        self.human.assign_die(human.clone())?;
        self.computer.assign_die(computer.clone())?;

        let commitment = self.scheme.commit(self.config.roll_range)?;
        self.phase = Phase::RollExchange {
            roller: Participant::Computer,
            commitment,
        };

        tracing::info!(
            "Session {} dealt {} to the user and {} to the computer",
            self.id,
            human,
            computer
        );
        Ok(vec![Event::DiceAssigned { human, computer }])
    }

    fn resolve_roll(&mut self, roller: Participant, contribution: u32) -> Result<Vec<Event>> {
        let range = self.config.roll_range;
        if contribution >= range {
            return Ok(vec![self.reject(out_of_range(contribution, range))]);
        }

        let round = Round::roll_of(roller);
        let commitment = self.take_commitment(Phase::Done { outcome: None })?;
        let (tag, committed_at, opening) = self.open(round, commitment)?;

        // Disclosed for transparency only; the face comes from an independent draw.
        let fair_value = combine(
            i64::from(opening.value()),
            i64::from(contribution),
            range,
        )?;

        let seat = match roller {
            Participant::Human => &mut self.human,
            Participant::Computer => &mut self.computer,
        };
        let roll = seat.roll_die(&mut self.rng)?;

        tracing::debug!(
            "Session {} {}: value {} + {} = {} (mod {}), rolled {}",
            self.id,
            round,
            opening.value(),
            contribution,
            fair_value,
            range,
            roll
        );

        let mut events = vec![Event::RollResolved {
            roller,
            proof: RoundProof::new(
                round,
                range,
                &tag,
                committed_at,
                &opening,
                contribution,
                Some(fair_value),
            ),
            roll,
        }];

        match roller {
            Participant::Computer => {
                let commitment = self.scheme.commit(range)?;
                self.phase = Phase::RollExchange {
                    roller: Participant::Human,
                    commitment,
                };
            }
            Participant::Human => {
                if self.computer.state() != PlayerState::Rolled {
                    return Err(GameError::InvalidState(
                        "The computer has not rolled yet".to_string(),
                    ));
                }

                let (human_roll, computer_roll) = match (self.human.roll(), self.computer.roll()) {
                    (Some(h), Some(c)) => (h, c),
                    _ => {
                        return Err(GameError::InvalidState(
                            "Both players must roll before the result".to_string(),
                        ))
                    }
                };

                let outcome = decide(human_roll, computer_roll);
                self.phase = Phase::Done {
                    outcome: Some(outcome),
                };

                tracing::info!(
                    "Session {} completed: user {} vs computer {}, {:?}",
                    self.id,
                    human_roll,
                    computer_roll,
                    outcome
                );
                events.push(Event::Finished {
                    outcome,
                    human_roll,
                    computer_roll,
                });
            }
        }

        Ok(events)
    }

    fn take_commitment(&mut self, next: Phase) -> Result<Commitment> {
        match std::mem::replace(&mut self.phase, next) {
            Phase::FirstMove { commitment } | Phase::RollExchange { commitment, .. } => {
                Ok(commitment)
            }
            previous => {
                self.phase = previous;
                Err(GameError::InvalidState("No commitment pending".to_string()))
            }
        }
    }

    /// Reveal and verify. A mismatch ends the session.
    fn open(
        &mut self,
        round: Round,
        commitment: Commitment,
    ) -> Result<(Tag, DateTime<Utc>, Opening)> {
        let tag = *commitment.tag();
        let committed_at = commitment.created_at();
        let opening = self.scheme.reveal(commitment);

        if !opening.verify(&tag)? {
            tracing::error!("Session {}: {} reveal does not match its tag", self.id, round);
            self.phase = Phase::Done { outcome: None };
            return Err(GameError::integrity(round.to_string()));
        }

        Ok((tag, committed_at, opening))
    }

    fn reject(&self, error: GameError) -> Event {
        tracing::debug!("Session {} rejected input: {}", self.id, error);
        Event::Rejected(error)
    }
}

fn out_of_range(value: u32, range: u32) -> GameError {
    GameError::input_format(format!(
        "{} is out of range, enter a number from 0 to {}",
        value,
        range - 1
    ))
}
