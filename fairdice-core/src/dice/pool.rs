use super::{preset_dice, Die};
use crate::{GameError, Result};

/// Dice still available for allocation, in pool order
#[derive(Debug, Clone)]
pub struct DicePool {
    dice: Vec<Die>,
}

impl DicePool {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    pub fn preset() -> Self {
        Self::new(preset_dice())
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn remaining_count(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Remove and return the die at `index`. Later dice shift down by one.
    pub fn take_by_index(&mut self, index: usize) -> Result<Die> {
        if index >= self.dice.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                remaining: self.dice.len(),
            });
        }

        Ok(self.dice.remove(index))
    }

    /// The computer's allocation rule: first remaining die in pool order.
    pub fn take_first(&mut self) -> Result<Die> {
        self.take_by_index(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_then_first_remaining() {
        let mut pool = DicePool::preset();

        let human = pool.take_by_index(0).unwrap();
        let computer = pool.take_first().unwrap();

        assert_eq!(human.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(computer.faces(), &[1, 1, 6, 6, 8, 8]);
        assert_eq!(pool.remaining_count(), 1);
    }

    #[test]
    fn test_computer_gets_first_remaining_after_middle_pick() {
        let mut pool = DicePool::preset();

        let human = pool.take_by_index(1).unwrap();
        let computer = pool.take_first().unwrap();

        assert_eq!(human.faces(), &[1, 1, 6, 6, 8, 8]);
        assert_eq!(computer.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(pool.dice()[0].faces(), &[3, 3, 5, 5, 7, 7]);
    }

    #[test]
    fn test_out_of_range_leaves_pool_untouched() {
        let mut pool = DicePool::preset();

        let err = pool.take_by_index(3).unwrap_err();
        assert!(matches!(
            err,
            GameError::IndexOutOfRange {
                index: 3,
                remaining: 3
            }
        ));
        assert_eq!(pool.remaining_count(), 3);
    }

    #[test]
    fn test_never_returns_a_die_twice() {
        let mut pool = DicePool::preset();
        let mut taken = Vec::new();

        while !pool.is_empty() {
            let before = pool.remaining_count();
            taken.push(pool.take_by_index(before - 1).unwrap());
            assert_eq!(pool.remaining_count(), before - 1);
        }

        assert_eq!(taken.len(), 3);
        for (i, a) in taken.iter().enumerate() {
            for b in &taken[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(pool.take_first().is_err());
    }
}
