//! Random strategy

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::{category::Category, game_state::GameState};

use super::Strategy;

/// Keeps a random subset of the dice and fills a random open category
///
/// Draws from the thread-local generator, so its decisions are not covered
/// by the simulator's seed.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Creates a new random strategy
    pub fn new() -> Self {
        RandomStrategy
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_keep(&self, hand: &[u32], _reroll_index: usize, _state: &GameState) -> Vec<usize> {
        if hand.is_empty() {
            return Vec::new();
        }
        let mut rng = rand::thread_rng();
        let amount = rng.gen_range(0..=hand.len());
        index::sample(&mut rng, hand.len(), amount).into_vec()
    }

    fn choose_category(&self, _hand: &[u32], state: &GameState) -> Category {
        let available = state.available_categories();
        available
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Category::Chance)
    }
}
