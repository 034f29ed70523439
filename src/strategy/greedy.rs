//! Greedy strategy

use crate::{category::Category, dice::most_common, game_state::GameState};

use super::Strategy;

/// Chases the most frequent value and takes the best immediate score
///
/// Keeps every die showing the most common value (on ties, the value that
/// appears first in the hand) and fills whichever open category scores the
/// most right now. Ties go to the category that comes first in canonical
/// order.
#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Creates a new greedy strategy
    pub fn new() -> Self {
        GreedyStrategy
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_keep(&self, hand: &[u32], _reroll_index: usize, _state: &GameState) -> Vec<usize> {
        match most_common(hand) {
            Some((value, _)) => hand
                .iter()
                .enumerate()
                .filter(|(_, &die)| die == value)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        }
    }

    fn choose_category(&self, hand: &[u32], state: &GameState) -> Category {
        let mut best: Option<(Category, u32)> = None;
        for category in state.available_categories() {
            let score = state.potential_score(category, hand).unwrap_or(0);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((category, score));
            }
        }
        best.map(|(category, _)| category).unwrap_or(Category::Chance)
    }
}
