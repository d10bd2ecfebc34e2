pub mod odds;
pub mod pool;

pub use odds::OddsTable;
pub use pool::DicePool;

use crate::{GameError, Result};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Non-transitive preset: each die beats the next one with probability 5/9.
pub const PRESET_FACES: [[i64; 6]; 3] = [[2, 2, 4, 4, 9, 9], [1, 1, 6, 6, 8, 8], [3, 3, 5, 5, 7, 7]];

/// An immutable, non-empty sequence of faces. Repeated faces weigh more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    pub fn new(faces: Vec<i64>) -> Result<Self> {
        if faces.is_empty() {
            return Err(GameError::configuration("a die needs at least one face"));
        }

        Ok(Self { faces })
    }

    /// Parse a comma-separated face list such as `2,2,4,4,9,9`
    pub fn parse(text: &str) -> Result<Self> {
        let faces = text
            .split(',')
            .map(str::trim)
            .map(|face| {
                face.parse::<i64>().map_err(|_| {
                    GameError::configuration(format!("'{}' is not an integer face in '{}'", face, text))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(faces)
    }

    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    /// Uniform draw over face positions, not over distinct values
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.faces[rng.gen_range(0..self.faces.len())]
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(i64::to_string).collect();
        write!(f, "[{}]", faces.join(","))
    }
}

pub fn preset_dice() -> Vec<Die> {
    PRESET_FACES
        .iter()
        .map(|faces| Die {
            faces: faces.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_die() {
        let die = Die::parse("2, 2,4,4,9,9").unwrap();
        assert_eq!(die.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(die.to_string(), "[2,2,4,4,9,9]");
    }

    #[test]
    fn test_parse_rejects_bad_faces() {
        assert!(matches!(Die::parse("1,a,3"), Err(GameError::Configuration(_))));
        assert!(matches!(Die::parse(""), Err(GameError::Configuration(_))));
        assert!(matches!(Die::parse("1.5"), Err(GameError::Configuration(_))));
        assert!(matches!(Die::new(vec![]), Err(GameError::Configuration(_))));
    }

    #[test]
    fn test_roll_returns_a_face() {
        let die = Die::new(vec![3, 3, 5, 5, 7, 7]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(die.faces().contains(&die.roll(&mut rng)));
        }
    }

    #[test]
    fn test_repeated_faces_weigh_more() {
        let die = Die::new(vec![1, 1, 2]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let ones = (0..30_000).filter(|_| die.roll(&mut rng) == 1).count();

        // expected 20_000
        assert!((19_000..21_000).contains(&ones), "got {}", ones);
    }

    #[test]
    fn test_preset_order() {
        let dice = preset_dice();
        assert_eq!(dice.len(), 3);
        assert_eq!(dice[0].faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(dice[1].faces(), &[1, 1, 6, 6, 8, 8]);
        assert_eq!(dice[2].faces(), &[3, 3, 5, 5, 7, 7]);
    }
}
