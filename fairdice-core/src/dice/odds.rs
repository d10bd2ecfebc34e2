use super::Die;
use rand::Rng;
use serde::Serialize;

/// Pairwise win probabilities: `probability(row, col)` is the chance that
/// the row die rolls strictly higher than the column die.
#[derive(Debug, Clone, Serialize)]
pub struct OddsTable {
    dice: Vec<Die>,
    probabilities: Vec<Vec<Option<f64>>>,
}

impl OddsTable {
    /// Monte Carlo estimate from `trials` independent draws per pair
    pub fn estimate<R: Rng + ?Sized>(dice: &[Die], trials: u32, rng: &mut R) -> Self {
        let trials = trials.max(1);

        Self::build(dice, |a, b| {
            let wins = (0..trials).filter(|_| a.roll(rng) > b.roll(rng)).count();
            wins as f64 / f64::from(trials)
        })
    }

    /// Exact probabilities by enumerating every face pair
    pub fn exact(dice: &[Die]) -> Self {
        Self::build(dice, |a, b| {
            let wins = a
                .faces()
                .iter()
                .flat_map(|x| b.faces().iter().map(move |y| (x, y)))
                .filter(|(x, y)| x > y)
                .count();
            wins as f64 / (a.faces().len() * b.faces().len()) as f64
        })
    }

    fn build(dice: &[Die], mut win_rate: impl FnMut(&Die, &Die) -> f64) -> Self {
        let probabilities: Vec<Vec<Option<f64>>> = dice
            .iter()
            .enumerate()
            .map(|(i, a)| {
                dice.iter()
                    .enumerate()
                    .map(|(j, b)| (i != j).then(|| win_rate(a, b)))
                    .collect()
            })
            .collect();

        Self {
            dice: dice.to_vec(),
            probabilities,
        }
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// `None` on the diagonal and for indices outside the table
    pub fn probability(&self, row: usize, col: usize) -> Option<f64> {
        self.probabilities.get(row)?.get(col).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::preset_dice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exact_preset_is_non_transitive() {
        let table = OddsTable::exact(&preset_dice());
        let five_ninths = 5.0 / 9.0;

        for (row, col) in [(0, 1), (1, 2), (2, 0)] {
            let p = table.probability(row, col).unwrap();
            assert!((p - five_ninths).abs() < 1e-12, "{row} vs {col}: {p}");
        }
        for (row, col) in [(1, 0), (2, 1), (0, 2)] {
            let p = table.probability(row, col).unwrap();
            assert!((p - 4.0 / 9.0).abs() < 1e-12, "{row} vs {col}: {p}");
        }
        assert_eq!(table.probability(1, 1), None);
        assert_eq!(table.probability(3, 0), None);
    }

    #[test]
    fn test_estimate_close_to_exact() {
        let dice = preset_dice();
        let exact = OddsTable::exact(&dice);
        let mut rng = StdRng::seed_from_u64(11);
        let estimate = OddsTable::estimate(&dice, 20_000, &mut rng);

        for row in 0..3 {
            for col in 0..3 {
                match (exact.probability(row, col), estimate.probability(row, col)) {
                    (Some(e), Some(s)) => assert!((e - s).abs() < 0.03, "{row} vs {col}"),
                    (None, None) => {}
                    other => panic!("diagonal mismatch: {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_ties_do_not_count_as_wins() {
        let same = Die::new(vec![4, 4]).unwrap();
        let table = OddsTable::exact(&[same.clone(), same]);
        assert_eq!(table.probability(0, 1), Some(0.0));
    }
}
