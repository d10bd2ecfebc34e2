use super::{verify_disclosure, Opening, Tag};
use crate::player::Participant;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which fairness round a commitment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    FirstMove,
    ComputerRoll,
    HumanRoll,
}

impl Round {
    pub fn roll_of(roller: Participant) -> Self {
        match roller {
            Participant::Computer => Round::ComputerRoll,
            Participant::Human => Round::HumanRoll,
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Round::FirstMove => write!(f, "first move"),
            Round::ComputerRoll => write!(f, "computer roll"),
            Round::HumanRoll => write!(f, "user roll"),
        }
    }
}

/// Everything disclosed about one revealed round, enough to re-check it offline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundProof {
    pub round: Round,
    pub range: u32,
    pub tag: String,
    pub committed_at: DateTime<Utc>,
    pub value: u32,
    pub secret: String,
    pub contribution: u32,
    pub fair_value: Option<u32>,
}

impl RoundProof {
    pub fn new(
        round: Round,
        range: u32,
        tag: &Tag,
        committed_at: DateTime<Utc>,
        opening: &Opening,
        contribution: u32,
        fair_value: Option<u32>,
    ) -> Self {
        Self {
            round,
            range,
            tag: tag.to_string(),
            committed_at,
            value: opening.value(),
            secret: opening.secret().to_hex(),
            contribution,
            fair_value,
        }
    }

    pub fn verify(&self) -> Result<bool> {
        verify_disclosure(&self.tag, self.value, &self.secret)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::{Commitment, Secret, SECRET_SIZE};

    #[test]
    fn test_proof_verifies_and_serializes() {
        let commitment = Commitment::new(3, 6, Secret::from_bytes([9u8; SECRET_SIZE])).unwrap();
        let tag = *commitment.tag();
        let committed_at = commitment.created_at();
        let opening = commitment.open();

        let proof =
            RoundProof::new(Round::ComputerRoll, 6, &tag, committed_at, &opening, 4, Some(1));
        assert!(proof.verify().unwrap());
        assert_eq!(proof.committed_at, committed_at);

        let json = proof.to_json().unwrap();
        assert!(json.contains("\"round\": \"computer_roll\""));
        assert!(json.contains("\"committed_at\""));

        let parsed: RoundProof = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, proof);
    }

    #[test]
    fn test_edited_proof_fails() {
        let commitment = Commitment::new(1, 2, Secret::from_bytes([1u8; SECRET_SIZE])).unwrap();
        let tag = *commitment.tag();
        let committed_at = commitment.created_at();
        let mut proof =
            RoundProof::new(Round::FirstMove, 2, &tag, committed_at, &commitment.open(), 1, None);

        proof.value = 0;
        assert!(!proof.verify().unwrap());
    }
}
